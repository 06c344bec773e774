use std::time::Duration;

use secrecy::{ExposeSecret, Secret};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::Email;
use crate::email_client::EmailClient;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email: EmailSettings,
    pub business: BusinessProfile,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    #[serde(default)]
    pub submission_policy: SubmissionPolicy,
}

#[derive(serde::Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionPolicy {
    /// Passing validation is final success; delivery flags are informational.
    #[default]
    AcceptOnValidation,
    /// At least one of the two emails has to be delivered.
    RequireDelivery,
}

#[derive(serde::Deserialize, Clone)]
pub struct EmailSettings {
    pub base_url: String,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub token: Option<Secret<String>>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
    pub business_mailbox: String,
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct BusinessProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Settings {
    pub fn get() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::new("config.yaml", config::FileFormat::Yaml))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;
        settings.try_deserialize::<Self>()
    }
}

impl EmailSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn business_mailbox(&self) -> Result<Email, String> {
        Email::parse(self.business_mailbox.clone()).map_err(|e| e.to_string())
    }

    /// Builds the transport when both credentials are present.
    pub fn client(&self) -> Result<Option<EmailClient>, String> {
        let sender = self.sender.as_deref().map(str::trim).filter(|s| !s.is_empty());
        let token = self
            .token
            .as_ref()
            .filter(|t| !t.expose_secret().trim().is_empty());

        let (Some(sender), Some(token)) = (sender, token) else {
            return Ok(None);
        };
        let sender = Email::parse(sender.to_string()).map_err(|e| e.to_string())?;

        Ok(Some(EmailClient::new(
            self.base_url.clone(),
            sender,
            token.clone(),
            self.timeout(),
        )))
    }
}
