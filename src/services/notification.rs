//! User notification service
//!
//! The web client surfaced every outcome as a toast. Here toasts are queued
//! in memory for the embedding surface to drain and render, and each one is
//! mirrored to the structured log so flow outcomes stay observable.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tracing::{info, warn};

use crate::utils::errors::AbhivyaktiError;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

/// One user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

/// Queue of pending user-facing messages
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    queue: Arc<Mutex<VecDeque<Toast>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a success toast
    pub fn success(&self, message: impl Into<String>) {
        let message = message.into();
        info!(toast = %message, "success");
        self.push(Toast {
            level: ToastLevel::Success,
            message,
        });
    }

    /// Queue an error toast
    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        warn!(toast = %message, "error surfaced to user");
        self.push(Toast {
            level: ToastLevel::Error,
            message,
        });
    }

    /// Queue an informational toast
    pub fn info(&self, message: impl Into<String>) {
        let message = message.into();
        info!(toast = %message, "info");
        self.push(Toast {
            level: ToastLevel::Info,
            message,
        });
    }

    /// Queue an error toast for a failed operation, using the error's own
    /// message (the backend's `error` field already reads user-facing)
    pub fn error_from(&self, error: &AbhivyaktiError, fallback: &str) {
        crate::utils::logging::log_surfaced_error(fallback, &error.to_string());
        let message = match error {
            AbhivyaktiError::Api { message, .. } if !message.is_empty() => message.clone(),
            AbhivyaktiError::Authentication(message)
            | AbhivyaktiError::PermissionDenied(message)
            | AbhivyaktiError::InvalidInput(message) => message.clone(),
            _ => fallback.to_string(),
        };
        self.error(message);
    }

    fn push(&self, toast: Toast) {
        let mut queue = self
            .queue
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        queue.push_back(toast);
    }

    /// Drain all pending toasts in arrival order
    pub fn drain(&self) -> Vec<Toast> {
        let mut queue = self
            .queue
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        queue.drain(..).collect()
    }

    /// Number of pending toasts
    pub fn pending(&self) -> usize {
        self.queue
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}
