use lead_intake::{
    configuration::Settings,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;
use secrecy::Secret;
use wiremock::MockServer;

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub business_mailbox: String,
    pub business_phone: String,
    pub api_client: reqwest::Client,
}

static TRACING: Lazy<()> = Lazy::new(|| {
    let name = "test".to_string();
    let level = "debug".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(name, level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(name, level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

/// Spawns the application on a random port with a mock email API; `customize`
/// runs last so a test can drop credentials or change the policy.
pub async fn spawn_app_with(customize: impl FnOnce(&mut Settings)) -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let config = {
        let mut config = Settings::get().expect("Failed to read configuration");
        config.application.port = 0;
        config.email.base_url = email_server.uri();
        config.email.sender = Some("website@example.com".into());
        config.email.token = Some(Secret::new("test-token".into()));
        config.email.timeout_milliseconds = 500;
        customize(&mut config);

        config
    };

    let app = Application::build(config.clone())
        .await
        .expect("Failed to build app.");

    tokio::spawn(app.server);

    TestApp {
        address: format!("http://127.0.0.1:{}", app.port),
        email_server,
        business_mailbox: config.email.business_mailbox,
        business_phone: config.business.phone,
        api_client: reqwest::Client::new(),
    }
}

pub fn valid_lead() -> serde_json::Value {
    serde_json::json!({
        "name": "Jo",
        "email": "jo@x.com",
        "phone": "9550222151",
        "service": "factory-setup",
        "message": "Need a quote for relocating a press line",
    })
}

impl TestApp {
    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/contact", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn post_contact_raw(&self, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/contact", self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn request_contact(&self, method: reqwest::Method) -> reqwest::Response {
        self.api_client
            .request(method, format!("{}/api/contact", self.address))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn get_schema(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/contact/schema", self.address))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn get_test_email(&self, query: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/test-email{}", self.address, query))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn post_test_email(&self, query: &str) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/test-email{}", self.address, query))
            .send()
            .await
            .expect("Failed to send request")
    }

    pub async fn healthcheck(&self) -> reqwest::Response {
        self.api_client
            .get(format!("{}/api/health", self.address))
            .send()
            .await
            .expect("Failed to send request")
    }
}
