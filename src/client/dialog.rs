use std::sync::Arc;

use crate::client::{ContactClient, SubmissionOutcome};
use crate::domain::LeadForm;

#[derive(Debug)]
pub struct ServiceRequestDialog {
    client: Arc<ContactClient>,
    fallback_phone: String,
    open: bool,
    default_service: Option<String>,
    form: LeadForm,
    succeeded: bool,
    error: Option<String>,
}

impl ServiceRequestDialog {
    pub fn new(client: Arc<ContactClient>, fallback_phone: impl Into<String>) -> Self {
        Self {
            client,
            fallback_phone: fallback_phone.into(),
            open: false,
            default_service: None,
            form: LeadForm::default(),
            succeeded: false,
            error: None,
        }
    }

    pub fn open(&mut self, default_service: Option<&str>) {
        self.default_service = default_service.map(Into::into);
        if self.default_service.is_some() {
            self.form.service = self.default_service.clone();
        }
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.succeeded = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut LeadForm {
        &mut self.form
    }

    pub fn submit_enabled(&self) -> bool {
        self.open && !self.succeeded && !self.client.is_submitting()
    }

    pub async fn submit(&mut self) -> SubmissionOutcome {
        if self.client.is_submitting() {
            return SubmissionOutcome::AlreadySubmitting;
        }
        if !self.submit_enabled() {
            return SubmissionOutcome::Unavailable;
        }

        let outcome = self.client.submit(&self.form).await;

        if outcome.is_success() {
            self.succeeded = true;
            self.error = None;
            self.form = LeadForm {
                service: self.default_service.clone(),
                ..LeadForm::default()
            };
        } else {
            self.error = Some(outcome.user_message(&self.fallback_phone));
        }

        outcome
    }
}
