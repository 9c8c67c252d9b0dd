//! Purchase flow integration tests
//!
//! The buy path end to end: auth gate, order creation and the prefilled
//! checkout redirect URL, against a wiremock backend.

mod helpers;

use assert_matches::assert_matches;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use abhivyakti_client::flows::PassesDesk;
use abhivyakti_client::utils::errors::AbhivyaktiError;

/// Mount the pass catalog with one available MVP pass (id 2)
async fn mount_catalogs(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/passes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": [
                {
                    "id": 2,
                    "price": 1199,
                    "count": 100,
                    "countPurchased": 10,
                    "paymentPageLink": "https://pay.example.com/mvp"
                },
                {
                    "id": 3,
                    "price": 599,
                    "count": 100,
                    "countPurchased": 10
                }
            ]
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/accommodations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "data": []
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn logged_out_buy_sends_no_order_request() {
    let server = MockServer::start().await;
    mount_catalogs(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/payment/create-order"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let services = helpers::test_services(&server);
    let desk = PassesDesk::load(&services).await;

    let err = desk.buy_pass(2).await.unwrap_err();
    assert_matches!(err, AbhivyaktiError::Authentication(_));

    let toasts = services.notifier.drain();
    assert!(toasts.iter().any(|t| t.message == "Please login first"));
}

#[tokio::test]
async fn successful_buy_returns_a_prefilled_checkout_url() {
    let server = MockServer::start().await;
    mount_catalogs(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/user/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "user": {
                "id": 1,
                "firstName": "Asha",
                "lastName": "Rao",
                "email": "asha@college.edu",
                "phoneNumber": "9876543210",
                "serialId": 100
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/payment/create-order"))
        .and(body_json(serde_json::json!({ "passTypeId": 2 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "order": { "id": "order_xyz", "status": "created" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let services = helpers::test_services(&server);
    services.auth_service.set_user(Some(helpers::leader_user()));
    let desk = PassesDesk::load(&services).await;

    let url = desk.buy_pass(2).await.unwrap();
    assert!(url.as_str().starts_with("https://pay.example.com/mvp?"));

    let params: std::collections::HashMap<_, _> = url.query_pairs().into_owned().collect();
    assert_eq!(params["order_id"], "order_xyz");
    assert_eq!(params["ab_id"], "AB_000100");
    assert_eq!(params["email"], "asha@college.edu");
    assert_eq!(params["name"], "Asha Rao");
    assert_eq!(params["phone"], "+919876543210");

    let toasts = services.notifier.drain();
    assert!(toasts
        .iter()
        .any(|t| t.message == "Redirecting to payment..."));
}

#[tokio::test]
async fn failed_order_creation_surfaces_the_payment_wording() {
    let server = MockServer::start().await;
    mount_catalogs(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/user/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/payment/create-order"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({ "error": "Order creation failed" })),
        )
        .mount(&server)
        .await;

    let services = helpers::test_services(&server);
    services.auth_service.set_user(Some(helpers::leader_user()));
    let desk = PassesDesk::load(&services).await;

    let err = desk.buy_pass(2).await.unwrap_err();
    assert_matches!(err, AbhivyaktiError::Api { status: 500, .. });

    let toasts = services.notifier.drain();
    assert!(toasts
        .iter()
        .any(|t| t.message == "Can't process payment. Try again later"));
}

#[tokio::test]
async fn pass_without_a_payment_link_cannot_check_out() {
    let server = MockServer::start().await;
    mount_catalogs(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/user/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/payment/create-order"))
        .and(body_json(serde_json::json!({ "passTypeId": 3 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "order": { "id": "order_abc" }
        })))
        .mount(&server)
        .await;

    let services = helpers::test_services(&server);
    services.auth_service.set_user(Some(helpers::leader_user()));
    let desk = PassesDesk::load(&services).await;

    let err = desk.buy_pass(3).await.unwrap_err();
    assert_matches!(
        err,
        AbhivyaktiError::InvalidInput(msg) if msg == "Payment link not available for this item"
    );
}
