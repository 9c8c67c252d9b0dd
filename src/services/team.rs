//! Team service
//!
//! Thin wrappers over the team CRUD endpoints. Workflow rules (leader-only
//! actions, capacity, pending approvals) live in the team flow; the server
//! remains authoritative for all of them.

use serde::Deserialize;
use tracing::{debug, info};

use crate::api::{ApiClient, Base};
use crate::models::team::{CreateTeamRequest, JoinTeamRequest, RemoveMemberRequest, Team};
use crate::utils::errors::{AbhivyaktiError, Result};

/// Team fetch envelope; the registration id rides along so the leader can
/// update the team's submission
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSnapshot {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    pub team: Option<Team>,
    #[serde(default)]
    pub registration_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct AckResponse {
    #[serde(default)]
    success: bool,
}

/// Team CRUD service
#[derive(Debug, Clone)]
pub struct TeamService {
    api: ApiClient,
}

impl TeamService {
    /// Create a new TeamService instance
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch a team with its registration id
    pub async fn get_team(&self, team_id: i64) -> Result<(Team, Option<i64>)> {
        debug!(team_id = team_id, "Fetching team");
        let found: Option<TeamSnapshot> = self
            .api
            .get_optional(Base::Api, &format!("/api/teams/{}", team_id))
            .await?;

        let snapshot = found
            .filter(|snapshot| snapshot.success || snapshot.team.is_some())
            .ok_or(AbhivyaktiError::TeamNotFound { team_id })?;
        let team = snapshot
            .team
            .ok_or(AbhivyaktiError::TeamNotFound { team_id })?;
        Ok((team, snapshot.registration_id))
    }

    /// Create a team for an event; the creator becomes the leader
    pub async fn create_team(&self, request: &CreateTeamRequest) -> Result<Team> {
        info!(
            user_id = request.user_id,
            event_id = request.event_id,
            team_name = %request.team_name,
            "Creating team"
        );

        #[derive(Deserialize)]
        struct CreateResponse {
            #[serde(default)]
            team: Option<Team>,
        }

        let response: CreateResponse = self.api.post(Base::Api, "/api/teams", request).await?;
        response
            .team
            .ok_or_else(|| AbhivyaktiError::api(200, "Team creation failed"))
    }

    /// Join a team by its shareable code
    pub async fn join_team(&self, user_id: i64, team_code: &str) -> Result<()> {
        info!(user_id = user_id, team_code = %team_code, "Joining team");
        let request = JoinTeamRequest {
            user_id,
            team_code: team_code.to_string(),
        };
        let response: AckResponse = self.api.post(Base::Api, "/api/teams/join", &request).await?;
        if !response.success {
            return Err(AbhivyaktiError::api(200, "Failed to join team"));
        }
        Ok(())
    }

    /// Leave a team (non-leader members only; the server enforces this too)
    pub async fn leave_team(&self, team_id: i64, user_id: i64) -> Result<()> {
        info!(team_id = team_id, user_id = user_id, "Leaving team");
        let response: AckResponse = self
            .api
            .post(
                Base::Api,
                "/api/teams/leave",
                &serde_json::json!({ "teamId": team_id, "userId": user_id }),
            )
            .await?;
        if !response.success {
            return Err(AbhivyaktiError::api(200, "Failed to leave team"));
        }
        Ok(())
    }

    /// Remove a member (leader action)
    pub async fn remove_member(&self, request: &RemoveMemberRequest) -> Result<()> {
        info!(
            team_id = request.team_id,
            member_id = request.member_id,
            "Removing team member"
        );
        let response: AckResponse = self
            .api
            .post(Base::Api, "/api/teams/remove-member", request)
            .await?;
        if !response.success {
            return Err(AbhivyaktiError::api(200, "Failed to remove member"));
        }
        Ok(())
    }
}
