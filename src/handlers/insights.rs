use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::Serialize;
use tracing::{info_span, Instrument};
use uuid::Uuid;
use validator::Validate;

use crate::handlers::{bad_request, failure, respond};
use crate::models::KeywordForm;
use crate::services::SearchError;
use crate::views;
use crate::AppState;

fn validated_keyword(
    http_req: &HttpRequest,
    form: &KeywordForm,
) -> std::result::Result<String, HttpResponse> {
    let form = form.trimmed();
    match form.validate() {
        Ok(()) => Ok(form.keyword),
        Err(e) => Err(bad_request(
            http_req,
            "Invalid request",
            format!("Validation error: {}", e),
        )),
    }
}

fn respond_results<T, F>(
    http_req: &HttpRequest,
    action: &str,
    results: std::result::Result<Vec<T>, SearchError>,
    render: F,
) -> HttpResponse
where
    T: Serialize,
    F: FnOnce(&Vec<T>) -> String,
{
    match results {
        Ok(items) => respond(http_req, &items, render),
        Err(e) => {
            tracing::error!("{} error: {:?}", action, e);
            let status = match e {
                SearchError::InvalidCount => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_GATEWAY,
            };
            failure(
                http_req,
                status,
                &format!("Failed to run {}", action),
                e.to_string(),
            )
        }
    }
}

pub async fn shorts_trends(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    form: web::Form<KeywordForm>,
) -> Result<HttpResponse> {
    let keyword = match validated_keyword(&http_req, &form) {
        Ok(keyword) => keyword,
        Err(response) => return Ok(response),
    };

    let span = info_span!("shorts_trends", request_id = %Uuid::new_v4(), %keyword);
    let results = state
        .insight_service
        .shorts_trends(&keyword)
        .instrument(span)
        .await;

    Ok(respond_results(&http_req, "shorts trend analysis", results, |videos| {
        views::trends(videos)
    }))
}

pub async fn seo_analysis(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    form: web::Form<KeywordForm>,
) -> Result<HttpResponse> {
    let keyword = match validated_keyword(&http_req, &form) {
        Ok(keyword) => keyword,
        Err(response) => return Ok(response),
    };

    let span = info_span!("seo_analysis", request_id = %Uuid::new_v4(), %keyword);
    let results = state
        .insight_service
        .seo_analysis(&keyword)
        .instrument(span)
        .await;

    Ok(respond_results(&http_req, "SEO analysis", results, |videos| {
        views::seo(videos)
    }))
}

pub async fn competitor_channels(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    form: web::Form<KeywordForm>,
) -> Result<HttpResponse> {
    let keyword = match validated_keyword(&http_req, &form) {
        Ok(keyword) => keyword,
        Err(response) => return Ok(response),
    };

    let span = info_span!("competitor_channels", request_id = %Uuid::new_v4(), %keyword);
    let results = state
        .insight_service
        .competitor_channels(&keyword)
        .instrument(span)
        .await;

    Ok(respond_results(&http_req, "competitor analysis", results, |channels| {
        views::competitors(channels)
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::header, test, App};

    use crate::handlers::test_support::state_with;
    use crate::models::{SearchResult, NO_DESCRIPTION};
    use crate::routes::api;
    use crate::services::{MockSearchProvider, SearchError};
    use crate::views::{NO_COMPETITORS, NO_SEO_RESULTS, NO_TRENDS};

    fn sample() -> Vec<SearchResult> {
        vec![
            SearchResult::new("Small cat #cat", "https://youtu.be/a").with_views(10),
            SearchResult::new("Big cat", "https://youtu.be/b")
                .with_views(2_500)
                .with_description("big"),
        ]
    }

    #[actix_web::test]
    async fn trends_render_ranked_fragment() {
        let mut mock = MockSearchProvider::new();
        mock.expect_search()
            .withf(|query, count| query == "cat Shorts" && *count == 10)
            .returning(|_, _| Ok(sample()));

        let app = test::init_service(App::new().app_data(state_with(mock)).service(api::config())).await;
        let req = test::TestRequest::post()
            .uri("/api/trends")
            .set_form([("keyword", "cat")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        let big = body.find("Big cat").unwrap();
        let small = body.find("Small cat").unwrap();
        assert!(big < small);
        assert!(body.contains("Views: 2,500"));
        assert!(body.contains("#YouTubeTrends #PopularShorts"));
        assert!(body.contains("Hashtags: #cat"));
    }

    #[actix_web::test]
    async fn seo_json_when_requested() {
        let mut mock = MockSearchProvider::new();
        mock.expect_search().returning(|_, _| Ok(sample()));

        let app = test::init_service(App::new().app_data(state_with(mock)).service(api::config())).await;
        let req = test::TestRequest::post()
            .uri("/api/seo")
            .insert_header((header::ACCEPT, "application/json"))
            .set_form([("keyword", "cat")])
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let items = body.as_array().unwrap();
        assert_eq!(items[0]["title"], "Big cat");
        assert_eq!(items[0]["view_count"], 2_500);
        assert_eq!(items[1]["description"], format!("{}...", NO_DESCRIPTION));
    }

    #[actix_web::test]
    async fn empty_results_show_not_found_warnings() {
        let mut mock = MockSearchProvider::new();
        mock.expect_search().times(3).returning(|_, _| Ok(Vec::new()));
        let app = test::init_service(App::new().app_data(state_with(mock)).service(api::config())).await;

        for (uri, expected) in [
            ("/api/trends", NO_TRENDS),
            ("/api/seo", NO_SEO_RESULTS),
            ("/api/competitors", NO_COMPETITORS),
        ] {
            let req = test::TestRequest::post()
                .uri(uri)
                .set_form([("keyword", "nothing")])
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 200);
            let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
            assert!(body.contains(expected), "{}: {}", uri, body);
        }
    }

    #[actix_web::test]
    async fn blank_keyword_is_a_warning() {
        let mut mock = MockSearchProvider::new();
        mock.expect_search().never();
        let app = test::init_service(App::new().app_data(state_with(mock)).service(api::config())).await;

        let req = test::TestRequest::post()
            .uri("/api/competitors")
            .set_form([("keyword", "   ")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains(r#"class="warning""#));
    }

    #[actix_web::test]
    async fn provider_fault_is_a_bad_gateway() {
        let mut mock = MockSearchProvider::new();
        mock.expect_search().returning(|_, _| {
            Err(SearchError::Provider {
                status: "exit status: 1".to_string(),
                stderr: "ERROR: unable to connect".to_string(),
            })
        });
        let app = test::init_service(App::new().app_data(state_with(mock)).service(api::config())).await;

        let req = test::TestRequest::post()
            .uri("/api/trends")
            .set_form([("keyword", "cat")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 502);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains(r#"class="error""#));
        assert!(body.contains("ERROR: unable to connect"));
    }
}
