//! Event model

use serde::{Deserialize, Serialize};

/// A festival event as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub club: Option<String>,
    #[serde(default = "default_min_team_size")]
    pub min_team_size: usize,
    #[serde(default = "default_max_team_size")]
    pub max_team_size: usize,
    #[serde(default)]
    pub is_team_event: bool,
}

// Defaults applied when the backend omits the bounds on older events.
fn default_min_team_size() -> usize {
    2
}

fn default_max_team_size() -> usize {
    5
}

impl Event {
    /// Whether a roster of the given size is within the event's bounds
    pub fn accepts_team_size(&self, size: usize) -> bool {
        size >= self.min_team_size && size <= self.max_team_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_bounds_use_defaults() {
        let event: Event = serde_json::from_str(
            r#"{"id": 7, "name": "Street Play", "isTeamEvent": true}"#,
        )
        .unwrap();
        assert_eq!(event.min_team_size, 2);
        assert_eq!(event.max_team_size, 5);
        assert!(event.is_team_event);
    }

    #[test]
    fn test_team_size_bounds() {
        let event = Event {
            id: 1,
            name: "Dance Battle".to_string(),
            club: Some("Disco".to_string()),
            min_team_size: 3,
            max_team_size: 6,
            is_team_event: true,
        };
        assert!(!event.accepts_team_size(2));
        assert!(event.accepts_team_size(3));
        assert!(event.accepts_team_size(6));
        assert!(!event.accepts_team_size(7));
    }
}
