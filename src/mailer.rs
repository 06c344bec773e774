use tera::{Context, Tera};

use crate::configuration::BusinessProfile;
use crate::domain::{Email, LeadSubmission};
use crate::email_client::EmailClient;

#[derive(thiserror::Error, Debug)]
pub enum MailerError {
    #[error("Failed to render the {template} email template")]
    Render {
        template: &'static str,
        #[source]
        source: tera::Error,
    },
}

struct RenderedMessage {
    html: String,
    text: String,
}

pub struct Mailer {
    transport: Option<EmailClient>,
    business_mailbox: Email,
    business: BusinessProfile,
    templates: Tera,
}

impl Mailer {
    pub fn new(
        transport: Option<EmailClient>,
        business_mailbox: Email,
        business: BusinessProfile,
    ) -> Result<Self, tera::Error> {
        Ok(Self {
            transport,
            business_mailbox,
            business,
            templates: load_templates()?,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.transport.is_some()
    }

    pub fn business(&self) -> &BusinessProfile {
        &self.business
    }

    #[tracing::instrument(
        name = "Sending lead notification",
        skip(self, lead),
        fields(lead_service = %lead.service.as_ref())
    )]
    pub async fn send_notification(&self, lead: &LeadSubmission) -> Result<bool, MailerError> {
        let Some(transport) = self.transport("notification") else {
            return Ok(false);
        };

        let message = self.render("notification", &self.lead_context(lead))?;
        let subject = format!("New Service Request: {}", lead.service.as_ref());

        Ok(deliver(transport, "notification", &self.business_mailbox, &subject, &message).await)
    }

    #[tracing::instrument(
        name = "Sending lead confirmation",
        skip(self, lead),
        fields(lead_email = %lead.email)
    )]
    pub async fn send_confirmation(&self, lead: &LeadSubmission) -> Result<bool, MailerError> {
        let Some(transport) = self.transport("confirmation") else {
            return Ok(false);
        };

        let message = self.render("confirmation", &self.lead_context(lead))?;
        let subject = format!("Thank You for Contacting {}", self.business.name);

        Ok(deliver(transport, "confirmation", &lead.email, &subject, &message).await)
    }

    #[tracing::instrument(name = "Sending test email", skip(self))]
    pub async fn send_test(&self, recipient: &Email) -> Result<bool, MailerError> {
        let Some(transport) = self.transport("test") else {
            return Ok(false);
        };

        let mut context = Context::new();
        context.insert("business", &self.business);
        let message = self.render("test", &context)?;
        let subject = format!("Test Email from {} Website", self.business.name);

        Ok(deliver(transport, "test", recipient, &subject, &message).await)
    }

    fn transport(&self, kind: &'static str) -> Option<&EmailClient> {
        if self.transport.is_none() {
            tracing::warn!(
                email_kind = kind,
                "Email sending skipped: mail transport credentials are not configured"
            );
        }
        self.transport.as_ref()
    }

    fn lead_context(&self, lead: &LeadSubmission) -> Context {
        let mut context = Context::new();
        context.insert("lead", lead);
        context.insert("service_label", lead.service.label());
        context.insert("business", &self.business);
        context.insert("business_mailbox", &self.business_mailbox);
        context
    }

    fn render(&self, template: &'static str, context: &Context) -> Result<RenderedMessage, MailerError> {
        let render = |suffix: &str| {
            self.templates
                .render(&format!("{template}.{suffix}"), context)
                .map_err(|source| MailerError::Render { template, source })
        };

        Ok(RenderedMessage {
            html: render("html")?,
            text: render("txt")?,
        })
    }
}

async fn deliver(
    transport: &EmailClient,
    kind: &'static str,
    recipient: &Email,
    subject: &str,
    message: &RenderedMessage,
) -> bool {
    match transport
        .send_email(recipient, subject, &message.html, &message.text)
        .await
    {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(
                email_kind = kind,
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to deliver email"
            );
            false
        }
    }
}

fn load_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("notification.html", include_str!("../templates/notification.html")),
        ("notification.txt", include_str!("../templates/notification.txt")),
        ("confirmation.html", include_str!("../templates/confirmation.html")),
        ("confirmation.txt", include_str!("../templates/confirmation.txt")),
        ("test.html", include_str!("../templates/test.html")),
        ("test.txt", include_str!("../templates/test.txt")),
    ])?;
    Ok(tera)
}
