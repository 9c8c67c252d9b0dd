//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for the Abhivyakti client.

use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
///
/// Returns the appender guard; dropping it stops the background writer,
/// so the caller keeps it alive for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "abhivyakti.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user-visible flow actions with structured data
pub fn log_flow_action(user_id: Option<i64>, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "Flow action performed"
    );
}

/// Log team mutations
pub fn log_team_action(team_id: i64, action: &str, user_id: Option<i64>, details: Option<&str>) {
    info!(
        team_id = team_id,
        action = action,
        user_id = user_id,
        details = details,
        "Team action performed"
    );
}

/// Log payment-order lifecycle events
pub fn log_payment_event(order_id: &str, event: &str, user_id: Option<i64>) {
    info!(
        order_id = order_id,
        event = event,
        user_id = user_id,
        "Payment event"
    );
}

/// Log failed remote calls that were surfaced as a toast
pub fn log_surfaced_error(context: &str, error: &str) {
    warn!(context = context, error = error, "Error surfaced to user");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggingConfig;

    #[test]
    fn test_init_logging_writes_under_the_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            level: "info".to_string(),
            file_path: dir.path().to_string_lossy().to_string(),
            max_files: 3,
        };

        let guard = init_logging(&config).unwrap();
        info!("startup line");
        drop(guard);

        let wrote_log = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .any(|entry| entry.file_name().to_string_lossy().starts_with("abhivyakti.log"));
        assert!(wrote_log);
    }
}
