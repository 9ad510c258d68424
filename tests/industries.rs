use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{get, post_json, test_app};

#[tokio::test]
async fn create_returns_industry_with_200() {
    let (app, _) = test_app();
    let (status, body) = post_json(
        &app,
        "/industries",
        json!({ "code": "acct", "industry": "Accounting" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "industry": { "code": "acct", "industry": "Accounting" } }));
}

#[tokio::test]
async fn duplicate_industry_code_is_a_server_error() {
    let (app, _) = test_app();
    let body = json!({ "code": "acct", "industry": "Accounting" });
    post_json(&app, "/industries", body.clone()).await;
    let (status, _) = post_json(&app, "/industries", body).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn list_returns_only_the_first_association() {
    let (app, store) = test_app();
    post_json(&app, "/companies", json!({ "name": "Apple" })).await;
    post_json(&app, "/companies", json!({ "name": "IBM" })).await;
    post_json(&app, "/industries", json!({ "code": "tech", "industry": "Technology" })).await;
    store.tag_company("apple", "tech").unwrap();
    store.tag_company("ibm", "tech").unwrap();

    let (status, body) = get(&app, "/industries").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "Industry / Company": { "company_code": "apple", "industry_code": "tech" } })
    );
}

#[tokio::test]
async fn list_without_associations_is_null() {
    let (app, _) = test_app();
    let (status, body) = get(&app, "/industries").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "Industry / Company": null }));
}
