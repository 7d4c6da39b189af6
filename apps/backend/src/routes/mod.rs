use actix_web::http::header;
use actix_web::{web, HttpResponse};

use crate::error::AppError;

pub mod artists;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

/// Register every page route.
///
/// `main.rs` and the test app builder both call this, then add the
/// middleware stack and `not_found` as the default service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // ids too large for i32 match the `\d+` patterns but fail extraction
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::not_found(err.to_string()).into()
    }));

    cfg.configure(health::configure_routes)
        .configure(home::configure_routes)
        .configure(venues::configure_routes)
        .configure(artists::configure_routes)
        .configure(shows::configure_routes);
}

/// Fallback for paths no route matches.
pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::not_found("no route matches this path"))
}

/// 303 to `location`, so the browser follows up with a GET.
pub(crate) fn see_other(location: impl AsRef<str>) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.as_ref()))
        .finish()
}
