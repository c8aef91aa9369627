use actix_web::{web, HttpRequest, HttpResponse, Result};

use crate::handlers::respond;
use crate::models::TipsResponse;
use crate::views;
use crate::AppState;

pub async fn video_tips(state: web::Data<AppState>, http_req: HttpRequest) -> Result<HttpResponse> {
    let tips = state.tips_service.sample();
    let response = TipsResponse {
        tips: tips.iter().map(|tip| tip.to_string()).collect(),
    };
    Ok(respond(&http_req, &response, |r| {
        let tips: Vec<&str> = r.tips.iter().map(String::as_str).collect();
        views::tips(&tips)
    }))
}
