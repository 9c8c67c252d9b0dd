//! Team model

use serde::{Deserialize, Serialize};

/// A competition team as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i64,
    pub name: String,
    #[serde(default, rename = "teamcode")]
    pub team_code: Option<String>,
    pub leader_id: i64,
    #[serde(default)]
    pub event_id: Option<i64>,
    #[serde(default)]
    pub members: Vec<TeamMember>,
    #[serde(default)]
    pub submission_string: Option<String>,
}

impl Team {
    /// Whether the given user leads this team
    pub fn is_leader(&self, user_id: i64) -> bool {
        self.leader_id == user_id
    }

    /// Whether the given user is on the roster
    pub fn has_member(&self, user_id: i64) -> bool {
        self.members.iter().any(|m| m.user_id == user_id)
    }
}

/// A roster entry; the backend inlines the display fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub user_id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl TeamMember {
    /// Display name assembled from first/last name, trimmed
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}

/// Payload for team creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    pub user_id: i64,
    pub event_id: i64,
    pub team_name: String,
}

/// Payload for joining a team by code
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinTeamRequest {
    pub user_id: i64,
    pub team_code: String,
}

/// Payload for a leader removing a member
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveMemberRequest {
    pub user_id: i64,
    pub team_id: i64,
    pub member_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leader_and_membership_checks() {
        let team = Team {
            id: 10,
            name: "Bit Benders".to_string(),
            team_code: Some("BB42".to_string()),
            leader_id: 1,
            event_id: Some(7),
            members: vec![
                TeamMember {
                    user_id: 1,
                    first_name: Some("Asha".to_string()),
                    last_name: None,
                    email: None,
                },
                TeamMember {
                    user_id: 2,
                    first_name: Some("Ravi".to_string()),
                    last_name: Some("K".to_string()),
                    email: None,
                },
            ],
            submission_string: None,
        };

        assert!(team.is_leader(1));
        assert!(!team.is_leader(2));
        assert!(team.has_member(2));
        assert!(!team.has_member(3));
    }

    #[test]
    fn test_team_code_field_name() {
        let team: Team = serde_json::from_str(
            r#"{"id": 1, "name": "T", "teamcode": "AB99", "leaderId": 5}"#,
        )
        .unwrap();
        assert_eq!(team.team_code.as_deref(), Some("AB99"));
        assert!(team.members.is_empty());
    }
}
