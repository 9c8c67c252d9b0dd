//! Shared test infrastructure
//!
//! Builds a ServiceFactory pointed at a wiremock server and provides the
//! JSON fixtures the flow tests share.

use wiremock::MockServer;

use abhivyakti_client::config::Settings;
use abhivyakti_client::models::user::User;
use abhivyakti_client::services::ServiceFactory;

/// Build a service stack whose both base URLs point at the mock server
pub fn test_services(server: &MockServer) -> ServiceFactory {
    let mut settings = Settings::default();
    settings.api.base_url = server.uri();
    settings.api.backend_url = server.uri();
    ServiceFactory::new(&settings).expect("service factory")
}

/// A logged-in session user (team leader in the team fixtures)
pub fn leader_user() -> User {
    serde_json::from_value(serde_json::json!({
        "id": 1,
        "firstName": "Asha",
        "lastName": "Rao",
        "email": "asha@college.edu",
        "phoneNumber": "9876543210",
        "collegeName": "IIIT Nagpur",
        "serialId": 100
    }))
    .expect("leader fixture")
}

/// A non-leader member of the team fixtures
pub fn member_user() -> User {
    serde_json::from_value(serde_json::json!({
        "id": 2,
        "firstName": "Ravi",
        "lastName": "K",
        "email": "ravi@college.edu",
        "serialId": 200
    }))
    .expect("member fixture")
}

/// Team fixture: id 10, led by user 1, with users 1 and 2 on the roster
pub fn team_json() -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "registrationId": 77,
        "team": {
            "id": 10,
            "name": "Bit Benders",
            "teamcode": "AB42",
            "leaderId": 1,
            "eventId": 7,
            "submissionString": null,
            "members": [
                { "userId": 1, "firstName": "Asha", "lastName": "Rao" },
                { "userId": 2, "firstName": "Ravi", "lastName": "K" }
            ]
        }
    })
}

/// Team event fixture matching the team fixture
pub fn event_json() -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "event": {
            "id": 7,
            "name": "Street Play",
            "club": "Rangmanch",
            "minTeamSize": 2,
            "maxTeamSize": 4,
            "isTeamEvent": true
        }
    })
}
