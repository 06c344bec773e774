use std::time::Duration;

use crate::domain::Email;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

#[derive(Clone, Debug)]
pub struct EmailClient {
    base_url: String,
    http_client: reqwest::Client,
    sender: Email,
    token: Secret<String>,
    timeout: Duration,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequestBody<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text_body: &'a str,
    html_body: &'a str,
}

impl EmailClient {
    pub fn new(base_url: String, sender: Email, token: Secret<String>, timeout: Duration) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
            sender,
            token,
            timeout,
        }
    }

    pub async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        html_body: &str,
        text_body: &str,
    ) -> Result<(), reqwest::Error> {
        let url = format!("{}/email", self.base_url);
        let body = SendEmailRequestBody {
            from: self.sender.as_ref(),
            to: recipient.as_ref(),
            text_body,
            subject,
            html_body,
        };

        self.http_client
            .post(url)
            .timeout(self.timeout)
            .json(&body)
            .header("X-Postmark-Server-Token", self.token.expose_secret())
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
