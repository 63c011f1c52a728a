//! Integration test: the HTTP contract of the numsort gateway, driven
//! in-process through the router.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use numsort_core::SortResponse;
use numsort_gateway::{
    config::GatewayConfig,
    routes::{create_router, AppState},
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    create_router(AppState::from_config(&GatewayConfig::default()))
}

async fn send(req: Request<Body>) -> (StatusCode, Value) {
    let resp = match app().oneshot(req).await {
        Ok(r) => r,
        Err(e) => panic!("handler error: {e}"),
    };
    let status = resp.status();
    let bytes = match axum::body::to_bytes(resp.into_body(), 1024 * 1024).await {
        Ok(b) => b,
        Err(e) => panic!("failed to read body: {e}"),
    };
    let body = match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => panic!("invalid JSON ({e}): {}", String::from_utf8_lossy(&bytes)),
    };
    (status, body)
}

async fn post_sort(body: &str) -> (StatusCode, Value) {
    let req = match Request::builder()
        .method("POST")
        .uri("/sorted-numbers")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
    {
        Ok(r) => r,
        Err(e) => panic!("failed to build request: {e}"),
    };
    send(req).await
}

async fn post_sort_ok(body: &str) -> SortResponse {
    let (status, value) = post_sort(body).await;
    assert_eq!(status, StatusCode::OK, "body: {value}");
    match serde_json::from_value(value) {
        Ok(r) => r,
        Err(e) => panic!("response does not match SortResponse: {e}"),
    }
}

#[tokio::test]
async fn root_reports_service_running() {
    let req = match Request::builder().uri("/").body(Body::empty()) {
        Ok(r) => r,
        Err(e) => panic!("failed to build request: {e}"),
    };
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Solar Car API is running"}));
}

#[tokio::test]
async fn empty_list_returns_two_empty_lists() {
    let (status, body) = post_sort(r#"{"numbers": []}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"original_numbers": [], "sorted_numbers": []}));
}

#[tokio::test]
async fn single_element_round_trips() {
    let (status, body) = post_sort(r#"{"numbers": [5]}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"original_numbers": [5], "sorted_numbers": [5]}));
}

#[tokio::test]
async fn negatives_and_duplicates_sort_correctly() {
    let (status, body) = post_sort(r#"{"numbers": [3, -1, 3, 0]}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"original_numbers": [3, -1, 3, 0], "sorted_numbers": [-1, 0, 3, 3]})
    );
}

#[tokio::test]
async fn content_type_is_not_required() {
    let req = match Request::builder()
        .method("POST")
        .uri("/sorted-numbers")
        .body(Body::from(r#"{"numbers": [2, 1]}"#))
    {
        Ok(r) => r,
        Err(e) => panic!("failed to build request: {e}"),
    };
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sorted_numbers"], json!([1, 2]));
}

#[tokio::test]
async fn missing_field_is_422_naming_numbers() {
    let (status, body) = post_sort("{}").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let detail = &body["detail"][0];
    assert_eq!(detail["type"], "missing_field");
    assert_eq!(detail["loc"], json!(["body", "numbers"]));
    let msg = detail["msg"].as_str().unwrap_or_default();
    assert!(msg.contains("numbers"), "message must mention numbers, got {msg}");
}

#[tokio::test]
async fn boolean_element_is_422_identifying_index() {
    let (status, body) = post_sort(r#"{"numbers": [1, true, 2]}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let detail = match body["detail"].as_array() {
        Some(d) => d,
        None => panic!("detail must be a list, got {body}"),
    };
    assert_eq!(detail.len(), 1);
    assert_eq!(detail[0]["type"], "invalid_element");
    assert_eq!(detail[0]["loc"], json!(["body", "numbers", 1]));
    assert_eq!(detail[0]["input"], json!(true));
}

#[tokio::test]
async fn string_numbers_is_422_type_mismatch() {
    let (status, body) = post_sort(r#"{"numbers": "not-a-list"}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["type"], "type_mismatch");
    assert_eq!(body["detail"][0]["input"], "not-a-list");
}

#[tokio::test]
async fn float_and_string_elements_are_rejected() {
    let (status, body) = post_sort(r#"{"numbers": [1.5, "2", 3]}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["body", "numbers", 0]));
    assert_eq!(body["detail"][1]["loc"], json!(["body", "numbers", 1]));
    assert_eq!(body["detail"][1]["type"], "type_mismatch");
}

#[tokio::test]
async fn malformed_json_is_422_json_invalid() {
    let (status, body) = post_sort(r#"{"numbers": [1, 2"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["type"], "json_invalid");
    assert_eq!(body["detail"][0]["loc"], json!(["body"]));
}

#[tokio::test]
async fn huge_integer_is_echoed_verbatim() {
    // Compare raw text: the echoed literal must not be rounded to a float.
    let req = match Request::builder()
        .method("POST")
        .uri("/sorted-numbers")
        .body(Body::from(r#"{"numbers": [1, 18446744073709551616]}"#))
    {
        Ok(r) => r,
        Err(e) => panic!("failed to build request: {e}"),
    };
    let resp = match app().oneshot(req).await {
        Ok(r) => r,
        Err(e) => panic!("handler error: {e}"),
    };
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let bytes = match axum::body::to_bytes(resp.into_body(), 1024 * 1024).await {
        Ok(b) => b,
        Err(e) => panic!("failed to read body: {e}"),
    };
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains(r#""input":18446744073709551616"#), "got {text}");
    assert!(text.contains("signed 64-bit"), "got {text}");
}

#[tokio::test]
async fn sorted_output_sorted_again_is_unchanged() {
    let first = post_sort_ok(r#"{"numbers": [9, 7, -3, 7, 0, 12]}"#).await;
    assert!(first.is_consistent());
    let again = json!({ "numbers": &first.sorted_numbers }).to_string();
    let second = post_sort_ok(&again).await;
    assert_eq!(second.sorted_numbers, first.sorted_numbers);
    assert_eq!(second.original_numbers, first.sorted_numbers);
}

#[tokio::test]
async fn get_on_sort_path_is_method_not_allowed() {
    let req = match Request::builder().uri("/sorted-numbers").body(Body::empty()) {
        Ok(r) => r,
        Err(e) => panic!("failed to build request: {e}"),
    };
    let resp = match app().oneshot(req).await {
        Ok(r) => r,
        Err(e) => panic!("handler error: {e}"),
    };
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
