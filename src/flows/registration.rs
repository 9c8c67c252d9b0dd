//! Event registration flow
//!
//! Orchestrates one registration attempt: solo events register directly,
//! team events branch into creating or joining a team. Local state only
//! advances after a successful API response; failures leave the attempt
//! where it was and surface a toast.

use tracing::{debug, warn};

use crate::models::event::Event;
use crate::models::team::{CreateTeamRequest, Team};
use crate::services::ServiceFactory;
use crate::state::flow::{RegistrationFlow, RegistrationStep};
use crate::utils::errors::{AbhivyaktiError, Result};
use crate::utils::helpers::is_reasonable_submission;
use crate::utils::logging;

/// An open registration surface for one event
#[derive(Debug)]
pub struct RegistrationModal {
    services: ServiceFactory,
    pub event: Event,
    pub flow: RegistrationFlow,
}

impl RegistrationModal {
    /// Open the registration surface for an event
    ///
    /// Requires a logged-in user ("Please log in to register") and a
    /// loadable event; an unknown event is a terminal not-found view.
    pub async fn open(services: &ServiceFactory, event_id: i64) -> Result<Self> {
        if !services.auth_service.is_authenticated() {
            services.notifier.error("Please log in to register");
            return Err(AbhivyaktiError::Authentication(
                "Please log in to register".to_string(),
            ));
        }

        let event = match services.event_service.get_event(event_id).await {
            Ok(event) => event,
            Err(e) => {
                services.notifier.error_from(&e, "Failed to load event");
                return Err(e);
            }
        };

        debug!(event_id = event.id, is_team_event = event.is_team_event, "Registration opened");
        Ok(Self {
            services: services.clone(),
            flow: RegistrationFlow::new(event_id),
            event,
        })
    }

    /// Register the current user for a solo event
    pub async fn register_individual(&mut self, submission_string: &str) -> Result<()> {
        if !is_reasonable_submission(submission_string) {
            self.services.notifier.error("Submission is too long");
            return Err(AbhivyaktiError::InvalidInput(
                "Submission is too long".to_string(),
            ));
        }

        let user = self.services.auth_service.require_user()?;
        let _guard = self.begin_mutation()?;

        if self.already_registered(user.id).await? {
            return Err(AbhivyaktiError::AlreadyRegistered);
        }

        match self
            .services
            .event_service
            .register_individual(user.id, self.event.id, submission_string)
            .await
        {
            Ok(()) => {
                logging::log_flow_action(Some(user.id), "register_individual", Some(&self.event.name));
                self.flow.advance(RegistrationStep::Registered)?;
                self.services.notifier.success("Successfully registered!");
                Ok(())
            }
            Err(e) => {
                self.services.notifier.error_from(&e, "Registration failed");
                Err(e)
            }
        }
    }

    /// Enter the create/join decision for a team event
    pub fn choose_team_mode(&mut self) -> Result<()> {
        if !self.event.is_team_event {
            return Err(AbhivyaktiError::InvalidInput(
                "Not a team event".to_string(),
            ));
        }
        self.flow.advance(RegistrationStep::ModeSelection)
    }

    /// Create a team; the current user becomes its leader
    pub async fn create_team(&mut self, team_name: &str) -> Result<Team> {
        let name = team_name.trim();
        if name.is_empty() {
            self.services.notifier.error("Please enter a team name");
            return Err(AbhivyaktiError::InvalidInput(
                "Please enter a team name".to_string(),
            ));
        }

        let user = self.services.auth_service.require_user()?;
        let _guard = self.begin_mutation()?;

        if self.already_registered(user.id).await? {
            return Err(AbhivyaktiError::AlreadyRegistered);
        }

        // Pre-flight checks passed; only now does the attempt leave
        // mode selection, so a failed check stays retryable.
        self.flow.advance(RegistrationStep::CreatingTeam)?;

        let request = CreateTeamRequest {
            user_id: user.id,
            event_id: self.event.id,
            team_name: name.to_string(),
        };

        match self.services.team_service.create_team(&request).await {
            Ok(team) => {
                logging::log_flow_action(Some(user.id), "create_team", Some(&self.event.name));
                self.flow.advance(RegistrationStep::Registered)?;
                self.services
                    .notifier
                    .success("Success! Add Team members from the Profile");
                Ok(team)
            }
            Err(e) => {
                self.services.notifier.error_from(&e, "Team creation failed");
                self.rollback();
                Err(e)
            }
        }
    }

    /// Join an existing team by its shareable code
    pub async fn join_team(&mut self, team_code: &str) -> Result<()> {
        let code = team_code.trim();
        if code.is_empty() {
            self.services.notifier.error("Please enter a team code");
            return Err(AbhivyaktiError::InvalidInput(
                "Please enter a team code".to_string(),
            ));
        }

        let user = self.services.auth_service.require_user()?;
        let _guard = self.begin_mutation()?;
        self.flow.advance(RegistrationStep::JoiningTeam)?;

        match self.services.team_service.join_team(user.id, code).await {
            Ok(()) => {
                logging::log_flow_action(Some(user.id), "join_team", Some(&self.event.name));
                self.flow.advance(RegistrationStep::Registered)?;
                self.services.notifier.success("Successfully joined team!");
                Ok(())
            }
            Err(e) => {
                self.services.notifier.error_from(&e, "Failed to join team");
                self.rollback();
                Err(e)
            }
        }
    }

    /// Duplicate-registration pre-flight; surfaces a toast both when the
    /// user is already registered and when the check itself fails
    async fn already_registered(&self, user_id: i64) -> Result<bool> {
        match self
            .services
            .event_service
            .is_registered(user_id, self.event.id)
            .await
        {
            Ok(true) => {
                self.services.notifier.error("Already registered for this event");
                Ok(true)
            }
            Ok(false) => Ok(false),
            Err(e) => {
                self.services.notifier.error_from(&e, "Registration failed");
                Err(e)
            }
        }
    }

    /// Disable this event's register controls while a request is outstanding
    fn begin_mutation(&self) -> Result<crate::state::InFlightGuard> {
        let key = format!("register:event:{}", self.event.id);
        self.services.in_flight.try_begin(&key).ok_or_else(|| {
            warn!(event_id = self.event.id, "Duplicate registration submit suppressed");
            AbhivyaktiError::RequestInFlight(key)
        })
    }

    /// Drop back to the mode-selection step after a failed branch
    fn rollback(&mut self) {
        // Both team branches allow stepping back; ignore the impossible error.
        let _ = self.flow.advance(RegistrationStep::ModeSelection);
    }
}
