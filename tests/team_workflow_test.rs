//! Team management workflow integration tests
//!
//! Search-by-ABID into the pending list, leader approval, member removal
//! rules and leaving, all against a wiremock backend.

mod helpers;

use assert_matches::assert_matches;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use abhivyakti_client::flows::TeamManager;
use abhivyakti_client::utils::errors::AbhivyaktiError;

/// Mount the fixtures every team surface load needs
async fn mount_team_fixtures(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/teams/10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(helpers::team_json()))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/events/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(helpers::event_json()))
        .mount(server)
        .await;
    // Pass-eligibility sweep for the leader view
    Mock::given(method("POST"))
        .and(path("/api/user/pass-acc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "passes": [{ "id": 2 }],
            "accommodations": []
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn leader_loads_roster_with_pass_eligibility() {
    let server = MockServer::start().await;
    mount_team_fixtures(&server).await;

    let services = helpers::test_services(&server);
    services.auth_service.set_user(Some(helpers::leader_user()));

    let manager = TeamManager::load(&services, 10, None).await.unwrap();
    assert!(manager.is_leader());
    assert_eq!(manager.team.members.len(), 2);
    assert_eq!(manager.registration_id, Some(77));
    assert_eq!(manager.max_members(), 4);
    assert!(manager.can_add_members());
    assert_eq!(manager.member_passes.get(&2), Some(&true));
}

#[tokio::test]
async fn search_stages_a_user_and_approval_joins_them() {
    let server = MockServer::start().await;
    mount_team_fixtures(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/user/serial/300"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "user": { "id": 3, "firstName": "Meera", "email": "meera@college.edu", "serialId": 300 }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/teams/join"))
        .and(body_json(serde_json::json!({ "userId": 3, "teamCode": "AB42" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let services = helpers::test_services(&server);
    services.auth_service.set_user(Some(helpers::leader_user()));
    let mut manager = TeamManager::load(&services, 10, None).await.unwrap();

    let staged = manager.search_user("AB00300").await.unwrap();
    assert_eq!(staged.id, 3);
    assert_eq!(manager.pending.len(), 1);
    assert_eq!(manager.member_count(), 3);

    manager.approve_member(3).await.unwrap();
    assert!(manager.pending.is_empty());
}

#[tokio::test]
async fn search_rejects_duplicates_and_bad_abids() {
    let server = MockServer::start().await;
    mount_team_fixtures(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/user/serial/200"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "user": { "id": 2, "firstName": "Ravi", "email": "ravi@college.edu", "serialId": 200 }
        })))
        .mount(&server)
        .await;

    let services = helpers::test_services(&server);
    services.auth_service.set_user(Some(helpers::leader_user()));
    let mut manager = TeamManager::load(&services, 10, None).await.unwrap();

    assert_matches!(
        manager.search_user("no-digits").await,
        Err(AbhivyaktiError::InvalidInput(msg)) if msg.contains("Invalid ABID")
    );
    // User 2 is already on the roster
    assert_matches!(
        manager.search_user("AB00200").await,
        Err(AbhivyaktiError::InvalidInput(msg)) if msg == "User already in team"
    );
    assert!(manager.pending.is_empty());
}

#[tokio::test]
async fn removing_the_leader_is_rejected_without_a_request() {
    let server = MockServer::start().await;
    mount_team_fixtures(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/teams/remove-member"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })))
        .expect(0)
        .mount(&server)
        .await;

    let services = helpers::test_services(&server);
    services.auth_service.set_user(Some(helpers::leader_user()));
    let mut manager = TeamManager::load(&services, 10, None).await.unwrap();

    let err = manager.remove_member(1).await.unwrap_err();
    assert_matches!(err, AbhivyaktiError::PermissionDenied(msg) if msg == "cannot remove leader");
}

#[tokio::test]
async fn leader_removes_a_member_and_roster_refetches() {
    let server = MockServer::start().await;
    mount_team_fixtures(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/teams/remove-member"))
        .and(body_json(serde_json::json!({
            "userId": 1,
            "teamId": 10,
            "memberId": 2
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let services = helpers::test_services(&server);
    services.auth_service.set_user(Some(helpers::leader_user()));
    let mut manager = TeamManager::load(&services, 10, None).await.unwrap();

    manager.remove_member(2).await.unwrap();
    let toasts = services.notifier.drain();
    assert!(toasts
        .iter()
        .any(|t| t.message == "Member removed successfully"));
}

#[tokio::test]
async fn non_leader_member_can_leave_but_leader_cannot() {
    let server = MockServer::start().await;
    mount_team_fixtures(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/teams/leave"))
        .and(body_json(serde_json::json!({ "teamId": 10, "userId": 2 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let services = helpers::test_services(&server);
    services.auth_service.set_user(Some(helpers::member_user()));
    let mut manager = TeamManager::load(&services, 10, None).await.unwrap();
    assert!(!manager.is_leader());
    manager.leave_team().await.unwrap();

    services.auth_service.set_user(Some(helpers::leader_user()));
    let mut manager = TeamManager::load(&services, 10, None).await.unwrap();
    assert_matches!(
        manager.leave_team().await,
        Err(AbhivyaktiError::PermissionDenied(_))
    );
}

#[tokio::test]
async fn leader_updates_the_submission_string() {
    let server = MockServer::start().await;
    mount_team_fixtures(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/registrations/submit"))
        .and(body_json(serde_json::json!({
            "registrationId": 77,
            "submissionString": "https://github.com/bit-benders/entry"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let services = helpers::test_services(&server);
    services.auth_service.set_user(Some(helpers::leader_user()));
    let mut manager = TeamManager::load(&services, 10, None).await.unwrap();

    manager
        .update_submission("https://github.com/bit-benders/entry")
        .await
        .unwrap();
    assert_eq!(
        manager.team.submission_string.as_deref(),
        Some("https://github.com/bit-benders/entry")
    );
}
