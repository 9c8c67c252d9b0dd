//! Error handling for the Abhivyakti client
//!
//! This module defines the main error types used throughout the client
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the Abhivyakti client
#[derive(Error, Debug)]
pub enum AbhivyaktiError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("User not found: {serial_id}")]
    UserNotFound { serial_id: i64 },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Team not found: {team_id}")]
    TeamNotFound { team_id: i64 },

    #[error("Already registered for this event")]
    AlreadyRegistered,

    #[error("Team is full ({current}/{max})")]
    TeamFull { current: usize, max: usize },

    #[error("Sold out: {0}")]
    SoldOut(String),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Request already in flight: {0}")]
    RequestInFlight(String),
}

/// Result type alias for Abhivyakti client operations
pub type Result<T> = std::result::Result<T, AbhivyaktiError>;

impl AbhivyaktiError {
    /// Build an API error from a status code and a best-effort message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        AbhivyaktiError::Api {
            status,
            message: message.into(),
        }
    }

    /// Check if the error is recoverable by the user retrying the action
    pub fn is_recoverable(&self) -> bool {
        match self {
            AbhivyaktiError::Http(_) => true,
            AbhivyaktiError::Api { status, .. } => *status >= 500,
            AbhivyaktiError::Serialization(_) => false,
            AbhivyaktiError::UrlParse(_) => false,
            AbhivyaktiError::Io(_) => true,
            AbhivyaktiError::Config(_) => false,
            AbhivyaktiError::Authentication(_) => false,
            AbhivyaktiError::PermissionDenied(_) => false,
            AbhivyaktiError::UserNotFound { .. } => false,
            AbhivyaktiError::EventNotFound { .. } => false,
            AbhivyaktiError::TeamNotFound { .. } => false,
            AbhivyaktiError::AlreadyRegistered => false,
            AbhivyaktiError::TeamFull { .. } => false,
            AbhivyaktiError::SoldOut(_) => false,
            AbhivyaktiError::InvalidStateTransition { .. } => false,
            AbhivyaktiError::InvalidInput(_) => false,
            AbhivyaktiError::RequestInFlight(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AbhivyaktiError::Config(_) => ErrorSeverity::Critical,
            AbhivyaktiError::Authentication(_) => ErrorSeverity::Warning,
            AbhivyaktiError::PermissionDenied(_) => ErrorSeverity::Warning,
            AbhivyaktiError::AlreadyRegistered => ErrorSeverity::Info,
            AbhivyaktiError::SoldOut(_) => ErrorSeverity::Info,
            AbhivyaktiError::InvalidInput(_) => ErrorSeverity::Info,
            AbhivyaktiError::RequestInFlight(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
