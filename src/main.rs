//! Abhivyakti festival client
//!
//! Bootstrap binary mirroring the web app's load sequence: restore the
//! session from the cookie, run the profile-completion check, and fetch
//! the pass/accommodation catalogs.

use tracing::{info, warn};

use abhivyakti_client::{
    config::Settings,
    flows::{check_profile_completion, PassesDesk},
    services::ServiceFactory,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().unwrap_or_default();
    settings.validate()?;

    // Initialize logging; the guard keeps the file appender alive
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", abhivyakti_client::info());
    info!(api = %settings.api.base_url, backend = %settings.api.backend_url, "Configured endpoints");

    let services = ServiceFactory::new(&settings)?;

    // Restore the session; the cookie may already be set from a prior visit
    match services.auth_service.restore_session().await {
        Some(user) => {
            info!(user_id = user.id, abid = %user.abid(), "Session active");

            if let Some(status) = check_profile_completion(&services).await {
                let missing: Vec<&str> =
                    status.missing_fields.iter().map(|f| f.as_str()).collect();
                warn!(missing = ?missing, "Profile incomplete");
            }
        }
        None => info!("No active session"),
    }

    // Load the purchase surface the way the passes page does
    let desk = PassesDesk::load(&services).await;
    for card in desk.pass_cards() {
        let availability = card
            .live
            .as_ref()
            .map(|p| format!("{} left", p.available()))
            .unwrap_or_else(|| "unavailable".to_string());
        info!(pass = card.template.title, availability = %availability, "Pass");
    }
    for card in desk.accommodation_cards() {
        let availability = card
            .live
            .as_ref()
            .map(|a| format!("{} left", a.available()))
            .unwrap_or_else(|| "unavailable".to_string());
        info!(stay = card.template.title, availability = %availability, "Accommodation");
    }

    for toast in services.notifier.drain() {
        info!(level = ?toast.level, message = %toast.message, "Pending toast");
    }

    Ok(())
}
