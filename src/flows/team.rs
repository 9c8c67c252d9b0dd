//! Team management flow
//!
//! The roster surface for an existing team: search users by ABID into a
//! local pending list, approve them onto the server roster, remove members
//! (leader only), leave the team, and update the submission string. Every
//! mutation re-fetches the team afterwards; that re-fetch is the only
//! conflict handling the client does.

use std::collections::HashMap;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::models::event::Event;
use crate::models::team::{RemoveMemberRequest, Team};
use crate::models::user::User;
use crate::services::ServiceFactory;
use crate::utils::abid::digits_to_serial_id;
use crate::utils::errors::{AbhivyaktiError, Result};
use crate::utils::helpers::{is_reasonable_submission, truncate_text};
use crate::utils::logging;

/// An open team management surface
#[derive(Debug)]
pub struct TeamManager {
    services: ServiceFactory,
    pub team: Team,
    pub event: Option<Event>,
    pub registration_id: Option<i64>,
    /// Users found by ABID search, awaiting leader approval
    pub pending: Vec<User>,
    /// Pass-eligibility per member, populated for leaders only
    pub member_passes: HashMap<i64, bool>,
}

impl TeamManager {
    /// Load the team surface
    ///
    /// Fetches the team and its event (for size bounds); for leaders, also
    /// sweeps each member's pass holdings for the eligibility column. A
    /// failed holdings fetch marks that member not eligible and the sweep
    /// continues.
    pub async fn load(
        services: &ServiceFactory,
        team_id: i64,
        event_id: Option<i64>,
    ) -> Result<Self> {
        let (team, registration_id) = match services.team_service.get_team(team_id).await {
            Ok(loaded) => loaded,
            Err(e) => {
                services.notifier.error_from(&e, "Failed to load team");
                return Err(e);
            }
        };

        let event = match event_id.or(team.event_id) {
            Some(id) => services.event_service.get_event(id).await.ok(),
            None => None,
        };

        let mut manager = Self {
            services: services.clone(),
            team,
            event,
            registration_id,
            pending: Vec::new(),
            member_passes: HashMap::new(),
        };

        if manager.is_leader() {
            manager.refresh_member_passes().await;
        }

        debug!(team_id = manager.team.id, members = manager.team.members.len(), "Team loaded");
        Ok(manager)
    }

    /// Whether the current session user leads this team
    pub fn is_leader(&self) -> bool {
        self.services
            .auth_service
            .current_user()
            .map(|user| self.team.is_leader(user.id))
            .unwrap_or(false)
    }

    /// Roster size including the local pending list
    pub fn member_count(&self) -> usize {
        self.team.members.len() + self.pending.len()
    }

    /// Upper team-size bound from the event (default applies when the
    /// event could not be loaded)
    pub fn max_members(&self) -> usize {
        self.event.as_ref().map(|e| e.max_team_size).unwrap_or(5)
    }

    /// Whether the leader may add more members
    pub fn can_add_members(&self) -> bool {
        self.is_leader() && self.member_count() < self.max_members()
    }

    /// Search a user by ABID and stage them in the pending list
    pub async fn search_user(&mut self, abid_input: &str) -> Result<User> {
        if abid_input.trim().is_empty() {
            self.services.notifier.error("Please enter an ABID");
            return Err(AbhivyaktiError::InvalidInput(
                "Please enter an ABID".to_string(),
            ));
        }

        let Some(serial_id) = digits_to_serial_id(abid_input) else {
            self.services
                .notifier
                .error("Invalid ABID format (use AB00123)");
            return Err(AbhivyaktiError::InvalidInput(
                "Invalid ABID format (use AB00123)".to_string(),
            ));
        };

        if !self.can_add_members() {
            let message = format!("Team is full ({}/{})", self.member_count(), self.max_members());
            self.services.notifier.error(&message);
            return Err(AbhivyaktiError::TeamFull {
                current: self.member_count(),
                max: self.max_members(),
            });
        }

        let found = match self.services.user_service.find_by_serial_id(serial_id).await {
            Ok(user) => user,
            Err(e) => {
                self.services.notifier.error_from(&e, "User not found");
                return Err(e);
            }
        };

        if self.team.has_member(found.id) {
            self.services.notifier.error("User already in team");
            return Err(AbhivyaktiError::InvalidInput(
                "User already in team".to_string(),
            ));
        }
        if self.pending.iter().any(|p| p.id == found.id) {
            self.services.notifier.error("User already in pending list");
            return Err(AbhivyaktiError::InvalidInput(
                "User already in pending list".to_string(),
            ));
        }

        self.pending.push(found.clone());
        self.services.notifier.success("User added to pending list");
        Ok(found)
    }

    /// Drop a staged user before approval
    pub fn remove_pending(&mut self, user_id: i64) {
        self.pending.retain(|p| p.id != user_id);
    }

    /// Approve a pending user onto the server roster (leader action)
    pub async fn approve_member(&mut self, user_id: i64) -> Result<()> {
        self.require_leader("Only the leader can approve members")?;

        if !self.pending.iter().any(|p| p.id == user_id) {
            return Err(AbhivyaktiError::InvalidInput(
                "User is not in the pending list".to_string(),
            ));
        }
        let team_code = self.team.team_code.clone().ok_or_else(|| {
            AbhivyaktiError::InvalidInput("Team code not available".to_string())
        })?;

        let _guard = self.begin_mutation(format!("team:{}:join:{}", self.team.id, user_id))?;

        match self.services.team_service.join_team(user_id, &team_code).await {
            Ok(()) => {
                logging::log_team_action(self.team.id, "member_approved", Some(user_id), None);
                self.pending.retain(|p| p.id != user_id);
                self.refetch_team().await;
                self.services.notifier.success("Member added successfully");
                Ok(())
            }
            Err(e) => {
                self.services.notifier.error_from(&e, "Failed to add member");
                Err(e)
            }
        }
    }

    /// Remove a member from the roster (leader action, leader excluded)
    pub async fn remove_member(&mut self, member_id: i64) -> Result<()> {
        self.require_leader("Only the leader can remove members")?;

        if self.team.is_leader(member_id) {
            self.services.notifier.error("cannot remove leader");
            return Err(AbhivyaktiError::PermissionDenied(
                "cannot remove leader".to_string(),
            ));
        }

        let user = self.services.auth_service.require_user()?;
        let _guard = self.begin_mutation(format!("team:{}:remove:{}", self.team.id, member_id))?;

        let request = RemoveMemberRequest {
            user_id: user.id,
            team_id: self.team.id,
            member_id,
        };
        match self.services.team_service.remove_member(&request).await {
            Ok(()) => {
                logging::log_team_action(self.team.id, "member_removed", Some(member_id), None);
                self.refetch_team().await;
                self.services.notifier.success("Member removed successfully");
                Ok(())
            }
            Err(e) => {
                self.services.notifier.error_from(&e, "Failed to remove member");
                Err(e)
            }
        }
    }

    /// Leave the team (non-leader members)
    pub async fn leave_team(&mut self) -> Result<()> {
        let user = self.services.auth_service.require_user()?;
        if self.team.is_leader(user.id) {
            return Err(AbhivyaktiError::PermissionDenied(
                "The leader cannot leave the team".to_string(),
            ));
        }

        let _guard = self.begin_mutation(format!("team:{}:leave:{}", self.team.id, user.id))?;

        match self.services.team_service.leave_team(self.team.id, user.id).await {
            Ok(()) => {
                logging::log_team_action(self.team.id, "member_left", Some(user.id), None);
                self.services.notifier.success("Left team successfully");
                Ok(())
            }
            Err(e) => {
                self.services.notifier.error_from(&e, "Failed to leave team");
                Err(e)
            }
        }
    }

    /// Update the team registration's submission string (leader action)
    pub async fn update_submission(&mut self, submission_string: &str) -> Result<()> {
        self.require_leader("Only the leader can edit the submission")?;

        if !is_reasonable_submission(submission_string) {
            self.services.notifier.error("Submission is too long");
            return Err(AbhivyaktiError::InvalidInput(
                "Submission is too long".to_string(),
            ));
        }

        let Some(registration_id) = self.registration_id else {
            self.services.notifier.error("Registration ID not found");
            return Err(AbhivyaktiError::InvalidInput(
                "Registration ID not found".to_string(),
            ));
        };

        let _guard = self.begin_mutation(format!("team:{}:submit", self.team.id))?;

        match self
            .services
            .event_service
            .submit_registration(registration_id, submission_string)
            .await
        {
            Ok(()) => {
                logging::log_team_action(
                    self.team.id,
                    "submission_updated",
                    None,
                    Some(&truncate_text(submission_string, 64)),
                );
                self.team.submission_string = Some(submission_string.to_string());
                self.services
                    .notifier
                    .success("Team submission updated successfully!");
                Ok(())
            }
            Err(e) => {
                self.services.notifier.error_from(&e, "Failed to submit");
                Err(e)
            }
        }
    }

    /// Re-fetch the roster after a mutation; keep the old snapshot when the
    /// re-fetch fails
    async fn refetch_team(&mut self) {
        match self.services.team_service.get_team(self.team.id).await {
            Ok((team, registration_id)) => {
                self.team = team;
                if registration_id.is_some() {
                    self.registration_id = registration_id;
                }
                if self.is_leader() {
                    self.refresh_member_passes().await;
                }
            }
            Err(e) => warn!(team_id = self.team.id, error = %e, "Team refetch failed"),
        }
    }

    /// Fetch each member's pass holdings for the eligibility column
    async fn refresh_member_passes(&mut self) {
        let fetches = self.team.members.iter().map(|member| {
            let user_service = self.services.user_service.clone();
            let user_id = member.user_id;
            async move {
                let has_passes = user_service
                    .get_passes_and_accommodations(user_id)
                    .await
                    .map(|holdings| holdings.has_passes())
                    .unwrap_or(false);
                (user_id, has_passes)
            }
        });

        self.member_passes = join_all(fetches).await.into_iter().collect();
        info!(team_id = self.team.id, "Member pass eligibility refreshed");
    }

    fn require_leader(&self, message: &str) -> Result<()> {
        if !self.is_leader() {
            return Err(AbhivyaktiError::PermissionDenied(message.to_string()));
        }
        Ok(())
    }

    fn begin_mutation(&self, key: String) -> Result<crate::state::InFlightGuard> {
        self.services
            .in_flight
            .try_begin(&key)
            .ok_or(AbhivyaktiError::RequestInFlight(key))
    }
}
