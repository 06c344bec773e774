use crate::helpers::{spawn_app, spawn_app_with};

#[tokio::test]
async fn health_returns_a_healthy_report() {
    // GIVEN
    let app = spawn_app().await;

    // WHEN
    let result = app.healthcheck().await;

    // THEN
    assert_eq!(result.status().as_u16(), 200);
    let body: serde_json::Value = result.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["message"], "SAI VINAYAKA ENTERPRISES API is up and running");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn health_does_not_need_mail_credentials() {
    // GIVEN
    let app = spawn_app_with(|config| {
        config.email.sender = None;
        config.email.token = None;
    })
    .await;

    // WHEN
    let result = app.healthcheck().await;

    // THEN
    assert_eq!(result.status().as_u16(), 200);
}

#[tokio::test]
async fn health_answers_any_method() {
    // GIVEN
    let app = spawn_app().await;

    // WHEN
    let result = app
        .api_client
        .post(format!("{}/api/health", app.address))
        .send()
        .await
        .expect("Failed to send request");

    // THEN
    assert_eq!(result.status().as_u16(), 200);
    let body: serde_json::Value = result.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
}
