mod contact;
mod health;
mod test_email;

pub use contact::*;
pub use health::*;
pub use test_email::*;

use actix_web::HttpResponse;

pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(SubmissionResponse::failure("Method not allowed"))
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
