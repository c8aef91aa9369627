use actix_web::{web, HttpResponse, Result};

use crate::models::{ErrorResponse, HealthResponse};
use crate::AppState;

async fn health_report(state: &AppState, ready_status: &str) -> HealthResponse {
    let provider_version = state.provider_version.read().await.clone();
    let provider_ready = provider_version.is_some();

    HealthResponse {
        status: if provider_ready { ready_status } else { "degraded" }.to_string(),
        provider_ready,
        provider_version,
        uptime_seconds: state.start_time.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(health_report(&state, "healthy").await))
}

pub async fn ready_check(state: web::Data<AppState>) -> Result<HttpResponse> {
    let report = health_report(&state, "ready").await;

    if report.provider_ready {
        Ok(HttpResponse::Ok().json(report))
    } else {
        Ok(HttpResponse::ServiceUnavailable().json(ErrorResponse::new(
            "Service not ready - search provider not available",
        )))
    }
}

pub async fn not_found() -> Result<HttpResponse> {
    Ok(HttpResponse::NotFound().json(ErrorResponse::new("Endpoint not found")))
}
