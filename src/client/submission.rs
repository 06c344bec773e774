use std::sync::atomic::{AtomicBool, Ordering};

use reqwest::StatusCode;

use crate::domain::{LeadForm, LeadSubmission, ValidationError};
use crate::routes::SubmissionResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted {
        notification_sent: bool,
        confirmation_sent: bool,
    },
    Invalid(ValidationError),
    AlreadySubmitting,
    Unavailable,
    Rejected { message: String },
    TooManyRequests,
    ServerError,
    Failed { message: Option<String> },
    Unreachable,
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted { .. })
    }

    pub fn user_message(&self, fallback_phone: &str) -> String {
        match self {
            SubmissionOutcome::Accepted { .. } => {
                "Thank you for your interest. We will contact you soon.".into()
            }
            SubmissionOutcome::Invalid(errors) => errors.to_string(),
            SubmissionOutcome::AlreadySubmitting => {
                "Your request is already being submitted.".into()
            }
            SubmissionOutcome::Unavailable => {
                "Please reopen the form to send another request.".into()
            }
            SubmissionOutcome::Rejected { message } => message.clone(),
            SubmissionOutcome::TooManyRequests => {
                "Too many requests. Please try again later.".into()
            }
            SubmissionOutcome::ServerError => format!(
                "Our server is experiencing issues. Please try again later or contact us by phone: {fallback_phone}"
            ),
            SubmissionOutcome::Failed { message: Some(message) } => message.clone(),
            SubmissionOutcome::Failed { message: None } | SubmissionOutcome::Unreachable => {
                format!(
                    "There was an error submitting your request. Please try again or call us directly at {fallback_phone}."
                )
            }
        }
    }
}

#[derive(Debug)]
pub struct ContactClient {
    http_client: reqwest::Client,
    endpoint: String,
    in_flight: AtomicBool,
}

impl ContactClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    #[tracing::instrument(name = "Submitting a lead", skip(self, form))]
    pub async fn submit(&self, form: &LeadForm) -> SubmissionOutcome {
        let lead = match LeadSubmission::try_from(form.clone()) {
            Ok(lead) => lead,
            Err(errors) => return SubmissionOutcome::Invalid(errors),
        };

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            return SubmissionOutcome::AlreadySubmitting;
        };

        let response = match self.http_client.post(&self.endpoint).json(&lead).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error.message = %e, "Lead submission got no response");
                return SubmissionOutcome::Unreachable;
            }
        };

        let status = response.status();
        // Error pages are not always JSON; a missing body just means no server message.
        let body = response.json::<SubmissionResponse>().await.ok();
        tracing::debug!(status = status.as_u16(), ?body, "Lead submission answered");

        classify(status, body)
    }
}

fn classify(status: StatusCode, body: Option<SubmissionResponse>) -> SubmissionOutcome {
    let body = body.unwrap_or_default();

    if status.is_success() {
        return SubmissionOutcome::Accepted {
            notification_sent: body.notification_sent.unwrap_or(false),
            confirmation_sent: body.confirmation_sent.unwrap_or(false),
        };
    }

    match status {
        StatusCode::BAD_REQUEST => SubmissionOutcome::Rejected {
            message: body
                .message
                .unwrap_or_else(|| "Please check your form inputs and try again.".into()),
        },
        StatusCode::TOO_MANY_REQUESTS => SubmissionOutcome::TooManyRequests,
        s if s.is_server_error() => SubmissionOutcome::ServerError,
        _ => SubmissionOutcome::Failed {
            message: body.message,
        },
    }
}

struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
