//! In-flight request registry
//!
//! The only concurrency discipline the client carries: while a mutating
//! request for a given key is outstanding, the triggering control is
//! disabled so the same action cannot be submitted twice. There is no
//! locking beyond this and no cancellation; conflicting edits from two
//! sessions are resolved by the server.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Registry of outstanding mutation keys
#[derive(Debug, Clone, Default)]
pub struct InFlightRegistry {
    keys: Arc<Mutex<HashSet<String>>>,
}

impl InFlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key as in flight; returns a guard, or `None` when the same
    /// key already has an outstanding request
    pub fn try_begin(&self, key: impl Into<String>) -> Option<InFlightGuard> {
        let key = key.into();
        let mut keys = self.keys.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if !keys.insert(key.clone()) {
            return None;
        }
        Some(InFlightGuard {
            registry: self.keys.clone(),
            key,
        })
    }

    /// Whether a key currently has an outstanding request
    pub fn is_in_flight(&self, key: &str) -> bool {
        self.keys
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .contains(key)
    }
}

/// Releases the key when dropped, including on error paths
#[derive(Debug)]
pub struct InFlightGuard {
    registry: Arc<Mutex<HashSet<String>>>,
    key: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut keys = self
            .registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        keys.remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_submission_suppressed() {
        let registry = InFlightRegistry::new();
        let guard = registry.try_begin("buy:pass:2");
        assert!(guard.is_some());
        assert!(registry.try_begin("buy:pass:2").is_none());
        assert!(registry.is_in_flight("buy:pass:2"));

        // Distinct keys are independent
        assert!(registry.try_begin("buy:pass:3").is_some());
    }

    #[test]
    fn test_key_released_on_drop() {
        let registry = InFlightRegistry::new();
        {
            let _guard = registry.try_begin("team:join:1").unwrap();
            assert!(registry.is_in_flight("team:join:1"));
        }
        assert!(!registry.is_in_flight("team:join:1"));
        assert!(registry.try_begin("team:join:1").is_some());
    }
}
