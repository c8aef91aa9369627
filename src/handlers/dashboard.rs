use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Result};

use crate::handlers::html_fragment;
use crate::views;
use crate::AppState;

pub async fn index(state: web::Data<AppState>) -> Result<HttpResponse> {
    let page = views::dashboard(&state.config.ui, state.earnings_service.default_cpm());
    Ok(html_fragment(StatusCode::OK, page))
}
