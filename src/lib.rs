use crate::configuration::{BusinessProfile, SubmissionPolicy};
use crate::mailer::Mailer;
use actix_web::{dev::Server, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

pub mod client;
pub mod configuration;
pub mod domain;
pub mod email_client;
pub mod mailer;
pub mod routes;
pub mod startup;
pub mod telemetry;

pub fn run(
    listener: std::net::TcpListener,
    mailer: Mailer,
    policy: SubmissionPolicy,
    business: BusinessProfile,
) -> Result<Server, std::io::Error> {
    let mailer = web::Data::new(mailer);
    let policy = web::Data::new(policy);
    let business = web::Data::new(business);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/api/health", web::route().to(routes::health))
            .service(
                web::resource("/api/contact")
                    .app_data(routes::lead_json_config())
                    .route(web::post().to(routes::submit_lead))
                    .default_service(web::to(routes::method_not_allowed)),
            )
            .route("/api/contact/schema", web::get().to(routes::lead_schema))
            .service(
                web::resource("/api/test-email")
                    .app_data(routes::test_email_query_config())
                    .route(web::get().to(routes::send_test_email))
                    .default_service(web::to(routes::method_not_allowed)),
            )
            .app_data(mailer.clone())
            .app_data(policy.clone())
            .app_data(business.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
