pub mod dashboard;
pub mod earnings;
pub mod health;
pub mod insights;
pub mod tips;

pub use dashboard::*;
pub use earnings::*;
pub use health::*;
pub use insights::*;
pub use tips::*;

use actix_web::http::{header, StatusCode};
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;

use crate::models::ErrorResponse;
use crate::views;

pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// True when the caller asked for JSON instead of an HTML fragment.
pub fn wants_json(http_req: &HttpRequest) -> bool {
    http_req
        .headers()
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|value| value.contains("application/json"))
        .unwrap_or(false)
}

pub fn html_fragment(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(HTML_CONTENT_TYPE)
        .body(body)
}

/// Renders `payload` as JSON or as the fragment produced by `render`.
pub fn respond<T, F>(http_req: &HttpRequest, payload: &T, render: F) -> HttpResponse
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    if wants_json(http_req) {
        HttpResponse::Ok().json(payload)
    } else {
        html_fragment(StatusCode::OK, render(payload))
    }
}

/// Invalid user input: a warning, never a fault.
pub fn bad_request(http_req: &HttpRequest, message: &str, details: String) -> HttpResponse {
    if wants_json(http_req) {
        HttpResponse::BadRequest().json(ErrorResponse::with_details(message, details))
    } else {
        html_fragment(
            StatusCode::BAD_REQUEST,
            views::warning(&format!("{}: {}", message, details)),
        )
    }
}

pub fn failure(
    http_req: &HttpRequest,
    status: StatusCode,
    message: &str,
    details: String,
) -> HttpResponse {
    if wants_json(http_req) {
        HttpResponse::build(status).json(ErrorResponse::with_details(message, details))
    } else {
        html_fragment(status, views::error(message, &details))
    }
}
