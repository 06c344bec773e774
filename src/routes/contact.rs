use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};

use crate::configuration::SubmissionPolicy;
use crate::domain::{LeadForm, LeadSchema, LeadSubmission, ValidationError};
use crate::mailer::Mailer;
use crate::routes::error_chain_fmt;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_sent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_sent: Option<bool>,
}

impl SubmissionResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            ..Self::default()
        }
    }
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Validation error: {0}")]
    MalformedBody(String),
    #[error(
        "We could not deliver your message. Please try again or contact us directly by phone at {fallback_phone}."
    )]
    Undelivered { fallback_phone: String },
    #[error(
        "There was an error processing your message. Please try again or contact us directly by phone at {fallback_phone}."
    )]
    Unexpected {
        #[source]
        source: anyhow::Error,
        fallback_phone: String,
    },
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::Validation(_) | ContactError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ContactError::Undelivered { .. } | ContactError::Unexpected { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(SubmissionResponse::failure(self.to_string()))
    }
}

/// Body extraction config for the lead endpoint: undecodable JSON is a
/// client error reported in the same shape as a validation failure.
pub fn lead_json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ContactError::MalformedBody(err.to_string()).into())
}

#[tracing::instrument(
    name = "Handling a lead submission",
    skip(body, mailer, policy),
    fields(
        lead_email = ?body.email,
        lead_service = ?body.service,
    ),
)]
pub async fn submit_lead(
    body: web::Json<LeadForm>,
    mailer: web::Data<Mailer>,
    policy: web::Data<SubmissionPolicy>,
) -> Result<HttpResponse, ContactError> {
    let lead: LeadSubmission = body.into_inner().try_into()?;

    let (notification, confirmation) = tokio::join!(
        mailer.send_notification(&lead),
        mailer.send_confirmation(&lead)
    );
    let notification_sent = notification.map_err(|e| unexpected(&mailer, e))?;
    let confirmation_sent = confirmation.map_err(|e| unexpected(&mailer, e))?;

    tracing::info!(notification_sent, confirmation_sent, "Lead accepted");

    if *policy.get_ref() == SubmissionPolicy::RequireDelivery
        && !notification_sent
        && !confirmation_sent
    {
        return Err(ContactError::Undelivered {
            fallback_phone: mailer.business().phone.clone(),
        });
    }

    Ok(HttpResponse::Created().json(SubmissionResponse {
        success: true,
        message: Some("Your message has been received successfully.".into()),
        notification_sent: Some(notification_sent),
        confirmation_sent: Some(confirmation_sent),
    }))
}

fn unexpected(mailer: &Mailer, e: impl Into<anyhow::Error>) -> ContactError {
    let error = ContactError::Unexpected {
        source: e.into(),
        fallback_phone: mailer.business().phone.clone(),
    };
    tracing::error!(error.cause_chain = ?error, "Lead submission failed unexpectedly");
    error
}

pub async fn lead_schema() -> HttpResponse {
    HttpResponse::Ok().json(LeadSchema::standard())
}
