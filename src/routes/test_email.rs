use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use serde::Deserialize;

use crate::domain::{Email, ValidationError};
use crate::mailer::Mailer;
use crate::routes::error_chain_fmt;

#[derive(Deserialize)]
pub struct TestEmailParameters {
    email: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct TestEmailResponse {
    pub success: bool,
    pub message: String,
}

#[derive(thiserror::Error)]
pub enum TestEmailError {
    #[error("Valid email parameter is required")]
    MissingRecipient,
    #[error("Valid email parameter is required")]
    InvalidRecipient(#[source] ValidationError),
    #[error("Email service is not properly configured. Missing sender or token credentials.")]
    NotConfigured,
    #[error("Error sending test email: Failed to send test email")]
    NotDelivered,
    #[error("Error sending test email: Unknown error")]
    Unexpected(#[source] anyhow::Error),
}

impl std::fmt::Debug for TestEmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for TestEmailError {
    fn status_code(&self) -> StatusCode {
        match self {
            TestEmailError::MissingRecipient | TestEmailError::InvalidRecipient(_) => {
                StatusCode::BAD_REQUEST
            }
            TestEmailError::NotConfigured
            | TestEmailError::NotDelivered
            | TestEmailError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(TestEmailResponse {
            success: false,
            message: self.to_string(),
        })
    }
}

pub fn test_email_query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        tracing::warn!(error.message = %err, "Undecodable test email parameters");
        TestEmailError::MissingRecipient.into()
    })
}

/// Sends a fixed message to `?email=` to check the transport end to end.
#[tracing::instrument(name = "Sending a diagnostic email", skip(params, mailer))]
pub async fn send_test_email(
    params: web::Query<TestEmailParameters>,
    mailer: web::Data<Mailer>,
) -> Result<HttpResponse, TestEmailError> {
    let recipient = params
        .into_inner()
        .email
        .ok_or(TestEmailError::MissingRecipient)?;
    let recipient = Email::parse(recipient).map_err(TestEmailError::InvalidRecipient)?;

    if !mailer.is_configured() {
        return Err(TestEmailError::NotConfigured);
    }

    let sent = mailer
        .send_test(&recipient)
        .await
        .map_err(|e| TestEmailError::Unexpected(e.into()))?;

    if !sent {
        return Err(TestEmailError::NotDelivered);
    }

    Ok(HttpResponse::Ok().json(TestEmailResponse {
        success: true,
        message: format!("Test email successfully sent to {recipient}"),
    }))
}
