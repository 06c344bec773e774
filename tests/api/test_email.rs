use wiremock::{
    matchers::{any, body_partial_json, method, path},
    Mock, ResponseTemplate,
};

use crate::helpers::{spawn_app, spawn_app_with};

#[tokio::test]
async fn missing_email_parameter_is_a_bad_request() {
    // GIVEN
    let app = spawn_app().await;

    // WHEN
    let response = app.get_test_email("").await;

    // THEN
    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Valid email parameter is required");
}

#[tokio::test]
async fn malformed_email_parameter_is_a_bad_request() {
    // GIVEN
    let app = spawn_app().await;

    // WHEN
    let response = app.get_test_email("?email=not-an-address").await;

    // THEN
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn undecodable_query_is_a_json_bad_request() {
    // GIVEN
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    // WHEN
    let response = app
        .get_test_email("?email=a%40b.com&email=c%40d.com")
        .await;

    // THEN
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Valid email parameter is required");
}

#[tokio::test]
async fn test_email_is_delivered_to_the_requested_address() {
    // GIVEN
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .and(body_partial_json(serde_json::json!({ "To": "ops@example.com" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // WHEN
    let response = app
        .get_test_email(&format!("?email={}", urlencoding::encode("ops@example.com")))
        .await;

    // THEN
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Test email successfully sent to ops@example.com");
}

#[tokio::test]
async fn failed_delivery_is_a_server_error() {
    // GIVEN
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // WHEN
    let response = app.get_test_email("?email=ops%40example.com").await;

    // THEN
    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Error sending test email: Failed to send test email");
}

#[tokio::test]
async fn missing_credentials_are_a_server_error() {
    // GIVEN
    let app = spawn_app_with(|config| {
        config.email.sender = None;
    })
    .await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    // WHEN
    let response = app.get_test_email("?email=ops%40example.com").await;

    // THEN
    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Email service is not properly configured."));
}

#[tokio::test]
async fn test_email_only_accepts_get() {
    // GIVEN
    let app = spawn_app().await;

    // WHEN
    let response = app.post_test_email("?email=ops%40example.com").await;

    // THEN
    assert_eq!(response.status().as_u16(), 405);
}
