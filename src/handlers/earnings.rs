use actix_web::{web, HttpRequest, HttpResponse, Result};
use validator::Validate;

use crate::handlers::{bad_request, respond};
use crate::models::EarningsForm;
use crate::views;
use crate::AppState;

fn parse_cpm(raw: Option<&str>) -> std::result::Result<Option<f64>, String> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(value) => value
            .parse::<f64>()
            .map(Some)
            .map_err(|e| format!("CPM `{}` is not a number: {}", value, e)),
    }
}

pub async fn estimate_earnings(
    state: web::Data<AppState>,
    http_req: HttpRequest,
    form: web::Form<EarningsForm>,
) -> Result<HttpResponse> {
    if let Err(e) = form.validate() {
        return Ok(bad_request(
            &http_req,
            "Invalid request",
            format!("Validation error: {}", e),
        ));
    }

    let cpm = match parse_cpm(form.cpm.as_deref()) {
        Ok(cpm) => cpm,
        Err(details) => return Ok(bad_request(&http_req, "Invalid request", details)),
    };

    match state.earnings_service.estimate(form.views, cpm) {
        Ok(estimate) => {
            tracing::info!(views = estimate.views, cpm = estimate.cpm, "Estimated earnings");
            Ok(respond(&http_req, &estimate, views::earnings))
        }
        Err(e) => Ok(bad_request(&http_req, "Invalid request", e.to_string())),
    }
}


#[cfg(test)]
mod http_tests {
    use actix_web::{http::header, test, App};

    use crate::handlers::test_support::state_with;
    use crate::routes::api;
    use crate::services::MockSearchProvider;

    #[actix_web::test]
    async fn million_views_at_default_cpm() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(MockSearchProvider::new()))
                .service(api::config()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/earnings")
            .set_form([("views", "1000000"), ("cpm", "")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("$2000.00"), "{}", body);
    }

    #[actix_web::test]
    async fn json_estimate_with_custom_cpm() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(MockSearchProvider::new()))
                .service(api::config()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/earnings")
            .insert_header((header::ACCEPT, "application/json"))
            .set_form([("views", "0"), ("cpm", "4")])
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["earnings"], 0.0);
        assert_eq!(body["cpm"], 4.0);
    }

    #[actix_web::test]
    async fn negative_views_are_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(MockSearchProvider::new()))
                .service(api::config()),
        )
        .await;

        for form in [[("views", "-5"), ("cpm", "")], [("views", "5"), ("cpm", "-1")]] {
            let req = test::TestRequest::post()
                .uri("/api/earnings")
                .set_form(form)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 400);
        }
    }

    #[actix_web::test]
    async fn non_numeric_views_are_a_form_error() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(MockSearchProvider::new()))
                .service(api::config()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/earnings")
            .set_form([("views", "lots")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains(r#"class="warning""#));
    }

    #[actix_web::test]
    async fn malformed_form_honours_json_accept() {
        let app = test::init_service(
            App::new()
                .app_data(state_with(MockSearchProvider::new()))
                .service(api::config()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/earnings")
            .insert_header((header::ACCEPT, "application/json"))
            .set_form([("views", "lots")])
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid request");
        assert!(body["details"].as_str().is_some());
    }
}
