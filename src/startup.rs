use std::net::TcpListener;

use actix_web::dev::Server;
use anyhow::Context;

use crate::{configuration::Settings, mailer::Mailer, run};

pub struct Application {
    pub port: u16,
    pub server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let address = (config.application.host.clone(), config.application.port);

        let transport = config
            .email
            .client()
            .map_err(anyhow::Error::msg)
            .context("Bad sender email")?;
        if transport.is_none() {
            tracing::warn!(
                "Mail transport credentials are missing; leads will be accepted without sending email"
            );
        }
        let business_mailbox = config
            .email
            .business_mailbox()
            .map_err(anyhow::Error::msg)
            .context("Bad business mailbox")?;
        let mailer = Mailer::new(transport, business_mailbox, config.business.clone())
            .context("Failed to load email templates")?;

        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let server = run(
            listener,
            mailer,
            config.application.submission_policy,
            config.business,
        )?;

        Ok(Self { port, server })
    }
}
