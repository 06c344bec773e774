use anyhow::Context;
use lead_intake::configuration::Settings;
use lead_intake::startup::Application;
use lead_intake::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("lead_intake".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = Settings::get().context("Failed to read configuration.")?;
    let application = Application::build(config).await?;
    tracing::info!(port = application.port, "Listening");

    application.server.await?;
    Ok(())
}
