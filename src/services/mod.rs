//! Services module
//!
//! Typed wrappers over the festival backend's endpoint families, plus the
//! session and notification services the flows share.

pub mod auth;
pub mod event;
pub mod notification;
pub mod payment;
pub mod team;
pub mod user;

// Re-export commonly used services
pub use auth::AuthService;
pub use event::EventService;
pub use notification::{Notifier, Toast, ToastLevel};
pub use payment::{payment_error_message, PaymentService};
pub use team::{TeamService, TeamSnapshot};
pub use user::{UserHoldings, UserService};

use crate::api::ApiClient;
use crate::config::settings::Settings;
use crate::state::InFlightRegistry;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub event_service: EventService,
    pub team_service: TeamService,
    pub payment_service: PaymentService,
    pub notifier: Notifier,
    pub in_flight: InFlightRegistry,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services sharing one transport
    pub fn new(settings: &Settings) -> Result<Self> {
        let api = ApiClient::new(settings)?;

        Ok(Self {
            auth_service: AuthService::new(api.clone()),
            user_service: UserService::new(api.clone()),
            event_service: EventService::new(api.clone()),
            team_service: TeamService::new(api.clone()),
            payment_service: PaymentService::new(
                api,
                settings.payment.phone_country_code.clone(),
            ),
            notifier: Notifier::new(),
            in_flight: InFlightRegistry::new(),
        })
    }
}
