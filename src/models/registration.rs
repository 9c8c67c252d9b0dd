//! Registration model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Links a user (or team) to an event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub team_id: Option<i64>,
    pub event_id: i64,
    pub status: RegistrationStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Server-side registration status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Active,
    Success,
    Pending,
}

/// Payload for individual event registration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterIndividualRequest {
    pub user_id: i64,
    pub event_id: i64,
    pub submission_string: String,
}

/// Payload for updating a team registration's submission string
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRegistrationRequest {
    pub registration_id: i64,
    pub submission_string: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let reg: Registration = serde_json::from_str(
            r#"{"id": 3, "eventId": 9, "status": "pending", "userId": 4}"#,
        )
        .unwrap();
        assert_eq!(reg.status, RegistrationStatus::Pending);
        assert_eq!(reg.user_id, Some(4));
        assert_eq!(reg.team_id, None);
    }
}
