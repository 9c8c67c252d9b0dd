//! Event and registration service
//!
//! Event lookup plus the registration endpoints: duplicate-registration
//! checks, individual registration and submission updates.

use serde::Deserialize;
use tracing::{debug, info};

use crate::api::{ApiClient, Base};
use crate::models::event::Event;
use crate::models::registration::{RegisterIndividualRequest, SubmitRegistrationRequest};
use crate::utils::errors::{AbhivyaktiError, Result};

#[derive(Debug, Deserialize)]
struct EventResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    event: Option<Event>,
}

#[derive(Debug, Deserialize)]
struct RegisteredResponse {
    #[serde(default)]
    registered: bool,
}

#[derive(Debug, Deserialize)]
struct AckResponse {
    #[serde(default)]
    pub success: bool,
}

/// Event and registration service
#[derive(Debug, Clone)]
pub struct EventService {
    api: ApiClient,
}

impl EventService {
    /// Create a new EventService instance
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch an event by id
    pub async fn get_event(&self, event_id: i64) -> Result<Event> {
        debug!(event_id = event_id, "Fetching event");
        let found: Option<EventResponse> = self
            .api
            .get_optional(Base::Api, &format!("/api/events/{}", event_id))
            .await?;

        found
            .filter(|response| response.success || response.event.is_some())
            .and_then(|response| response.event)
            .ok_or(AbhivyaktiError::EventNotFound { event_id })
    }

    /// Whether the user already has a registration for the event
    pub async fn is_registered(&self, user_id: i64, event_id: i64) -> Result<bool> {
        let response: RegisteredResponse = self
            .api
            .post(
                Base::Api,
                "/api/registrations/check",
                &serde_json::json!({ "userId": user_id, "eventId": event_id }),
            )
            .await?;
        Ok(response.registered)
    }

    /// Register an individual (non-team) participant
    ///
    /// The submission string is optional and may be added later.
    pub async fn register_individual(
        &self,
        user_id: i64,
        event_id: i64,
        submission_string: &str,
    ) -> Result<()> {
        info!(user_id = user_id, event_id = event_id, "Registering for individual event");
        let request = RegisterIndividualRequest {
            user_id,
            event_id,
            submission_string: submission_string.to_string(),
        };
        let response: AckResponse = self
            .api
            .post(Base::Api, "/api/registrations", &request)
            .await?;
        if !response.success {
            return Err(AbhivyaktiError::api(200, "Registration failed"));
        }
        Ok(())
    }

    /// Update a registration's submission string
    pub async fn submit_registration(
        &self,
        registration_id: i64,
        submission_string: &str,
    ) -> Result<()> {
        info!(registration_id = registration_id, "Updating registration submission");
        let request = SubmitRegistrationRequest {
            registration_id,
            submission_string: submission_string.to_string(),
        };
        let response: AckResponse = self
            .api
            .put(Base::Api, "/api/registrations/submit", &request)
            .await?;
        if !response.success {
            return Err(AbhivyaktiError::api(200, "Failed to submit"));
        }
        Ok(())
    }
}
