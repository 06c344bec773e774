use actix_web::{web, HttpResponse};
use chrono::{SecondsFormat, Utc};

use crate::configuration::BusinessProfile;

#[derive(serde::Serialize)]
struct HealthReport {
    status: &'static str,
    message: String,
    timestamp: String,
}

pub async fn health(business: web::Data<BusinessProfile>) -> HttpResponse {
    HttpResponse::Ok().json(HealthReport {
        status: "healthy",
        message: format!("{} API is up and running", business.name),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
