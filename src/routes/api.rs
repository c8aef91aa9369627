use crate::handlers;
use actix_web::{error, web, Scope};

/// Malformed form bodies get the same negotiated 400 as failed validation.
fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, req| {
        let response = handlers::bad_request(req, "Invalid request", err.to_string());
        error::InternalError::from_response(err, response).into()
    })
}

pub fn config() -> Scope {
    web::scope("/api")
        .app_data(form_config())
        .route("/health", web::get().to(handlers::health_check))
        .route("/ready", web::get().to(handlers::ready_check))
        .route("/trends", web::post().to(handlers::shorts_trends))
        .route("/seo", web::post().to(handlers::seo_analysis))
        .route("/competitors", web::post().to(handlers::competitor_channels))
        .route("/earnings", web::post().to(handlers::estimate_earnings))
        .route("/tips", web::post().to(handlers::video_tips))
        .route("/tips", web::get().to(handlers::video_tips))
}
