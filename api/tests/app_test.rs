#[macro_use]
mod common;

use actix_web::http::{header, StatusCode};
use actix_web::test;
use serde_json::{json, Value};

use common::{get_json, test_state, MOBILE};

#[actix_web::test]
async fn test_health_check() {
    let app = test_app!(test_state());

    let (status, body) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"], "memory");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn test_unknown_route_returns_envelope() {
    let app = test_app!(test_state());

    let (status, body) = get_json(&app, "/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "ok": false, "error": "Not found" }));
}

#[actix_web::test]
async fn test_malformed_json_is_invalid_payload() {
    let app = test_app!(test_state());

    for uri in ["/send-otp", "/verify-otp", "/submit"] {
        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{\"mobile\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "uri {uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "ok": false, "error": "Invalid payload" }));
    }
}

#[actix_web::test]
async fn test_non_json_content_type_is_invalid_payload() {
    let app = test_app!(test_state());

    let req = test::TestRequest::post()
        .uri("/send-otp")
        .insert_header((header::CONTENT_TYPE, "text/plain"))
        .set_payload(format!("mobile={MOBILE}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid payload");
}

#[actix_web::test]
async fn test_wrong_field_type_is_invalid_payload() {
    let app = test_app!(test_state());

    let (status, body) =
        common::post_json(&app, "/send-otp", json!({ "mobile": ["9876543210"] })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid payload");
}

#[actix_web::test]
async fn test_default_cors_allows_the_form_origin() {
    let app = test_app!(test_state());

    let req = test::TestRequest::get()
        .uri("/health")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
}
