use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;

mod common;
use common::{delete, get, post_json, put_json, send, test_app, BODY_LIMIT};

#[tokio::test]
async fn unmatched_route_is_404_not_found() {
    let (app, _) = test_app();
    let (status, body) = get(&app, "/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({
            "error": { "code": "not_found", "status": 404, "message": "Not Found" },
            "message": "Not Found"
        })
    );
}

#[tokio::test]
async fn unmatched_nested_route_is_404_not_found() {
    let (app, _) = test_app();
    let (status, body) = get(&app, "/companies/acme/extra").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");
}

#[tokio::test]
async fn health_version_and_ready() {
    let (app, _) = test_app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let (status, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "database": "ok" }));

    let (status, body) = get(&app, "/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "biztime");
}

#[tokio::test]
async fn malformed_json_uses_error_envelope() {
    let (app, _) = test_app();
    let (status, body) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/companies")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_body");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn missing_content_type_uses_error_envelope() {
    let (app, _) = test_app();
    let (status, body) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/industries")
            .body(Body::from(r#"{"code":"x","industry":"X"}"#))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["error"]["status"], 415);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let (app, _) = test_app();
    let description = "x".repeat(BODY_LIMIT + 1);
    let (status, body) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/companies")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "name": "Big", "description": description }).to_string(),
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"]["code"], "invalid_body");
}

#[tokio::test]
async fn wrong_method_on_known_path_is_404_not_found() {
    let (app, _) = test_app();
    post_json(&app, "/companies", json!({ "name": "Acme" })).await;

    let (status, body) = send(
        &app,
        Request::builder()
            .method("PATCH")
            .uri("/companies")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({
            "error": { "code": "not_found", "status": 404, "message": "Not Found" },
            "message": "Not Found"
        })
    );

    let (status, body) = post_json(&app, "/companies/acme", json!({ "name": "Acme" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");

    let (status, body) = delete(&app, "/industries").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");

    let (status, body) = put_json(&app, "/invoices", json!({ "amt": 1 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");

    let (status, body) = delete(&app, "/health").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");
}

#[tokio::test]
async fn trailing_slash_reaches_the_same_route() {
    let (app, _) = test_app();
    post_json(&app, "/companies/", json!({ "name": "Acme" })).await;

    let (status, body) = get(&app, "/companies/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "companies": [{ "code": "acme", "name": "Acme" }] }));

    let (status, body) = get(&app, "/companies/acme/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["company"]["code"], "acme");

    let (status, body) = get(&app, "/industries/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "Industry / Company": null }));
}
