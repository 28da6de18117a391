//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::post,
};
use cashflow_core::{ChatClient, DeploymentMode, RecordProvider, SecretStore};
use http_body_util::BodyExt;
use std::collections::HashMap;
use tower::ServiceExt;

fn setup_test_app() -> Router {
    create_router(
        RecordProvider::mock_seeded(42),
        ChatClient::canned(),
        DeploymentMode::Local,
    )
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

// ========== Status ==========

#[tokio::test]
async fn test_root_status() {
    let app = setup_test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["message"], "Cash Flow Report API is running");
}

// ========== Reports API ==========

#[tokio::test]
async fn test_generate_ap_report_leap_february() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "reportType": "AP",
        "year": 2024,
        "month": 2
    });

    let response = app.oneshot(post_json("/api/reports", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 20);

    for tx in data {
        assert!(tx["amount"].as_f64().unwrap() < 0.0);
        let date = tx["date"].as_str().unwrap();
        assert!(date.starts_with("2024-02-"));
        let day: u32 = date[8..10].parse().unwrap();
        assert!((1..=29).contains(&day));
    }
}

#[tokio::test]
async fn test_report_record_shape() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "reportType": "GL",
        "year": 2024,
        "month": 3
    });

    let response = app.oneshot(post_json("/api/reports", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let first = &json["data"][0];
    assert!(first["id"].is_string());
    assert!(first["accountNumber"].is_string());
    assert!(first["description"].is_string());
    assert!(first["amount"].is_number());
    assert!(first["date"].is_string());
    assert!(first["category"].is_string());
}

#[tokio::test]
async fn test_report_missing_field_is_client_error() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "reportType": "AP",
        "year": 2024
    });

    let response = app.oneshot(post_json("/api/reports", body)).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_report_month_thirteen_is_server_error() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "reportType": "GL",
        "year": 2024,
        "month": 13
    });

    let response = app.oneshot(post_json("/api/reports", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = get_body_json(response).await;
    assert!(json["detail"].is_string());
}

#[tokio::test]
async fn test_empty_remote_result_is_ok() {
    // A store returning no matches yields {"data": []} with 200, not an error
    let gateway = Router::new().route(
        "/query",
        post(|| async { axum::Json(serde_json::json!({"data": []})) }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, gateway).await.unwrap();
    });

    let app = create_router(
        RecordProvider::remote(&format!("http://{}", addr), None),
        ChatClient::canned(),
        DeploymentMode::Production,
    );

    let body = serde_json::json!({
        "reportType": "GL",
        "year": 2024,
        "month": 3
    });

    let response = app.oneshot(post_json("/api/reports", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_unreachable_store_is_server_error_with_detail() {
    let app = create_router(
        RecordProvider::remote("http://127.0.0.1:1", None),
        ChatClient::canned(),
        DeploymentMode::Production,
    );

    let body = serde_json::json!({
        "reportType": "GL",
        "year": 2024,
        "month": 3
    });

    let response = app.oneshot(post_json("/api/reports", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = get_body_json(response).await;
    assert!(!json["detail"].as_str().unwrap().is_empty());
}

// ========== Chat API ==========

#[tokio::test]
async fn test_chat_largest_includes_date_fragment() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "message": "what's the largest transaction?",
        "reportType": "GL",
        "year": 2024,
        "month": 3
    });

    let response = app.oneshot(post_json("/api/chat", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("3/15/2024"));
}

#[tokio::test]
async fn test_chat_summary_mixed_case() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "message": "Give me a SUMMARY",
        "reportType": "AP",
        "year": 2024,
        "month": 6
    });

    let response = app.oneshot(post_json("/api/chat", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("total inflow of $245,678.90"));
}

#[tokio::test]
async fn test_chat_missing_message_is_client_error() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "reportType": "GL",
        "year": 2024,
        "month": 3
    });

    let response = app.oneshot(post_json("/api/chat", body)).await.unwrap();
    assert!(response.status().is_client_error());
}

// ========== Collaborator selection ==========

#[test]
fn test_local_mode_needs_no_secrets() {
    let secrets = SecretStore::Static(HashMap::new());
    let (provider, chat) = build_collaborators(DeploymentMode::Local, &secrets).unwrap();
    assert!(matches!(provider, RecordProvider::Mock(_)));
    assert!(matches!(chat, ChatClient::Canned(_)));
}

#[test]
fn test_production_mode_requires_secrets() {
    let secrets = SecretStore::Static(HashMap::new());
    let err = build_collaborators(DeploymentMode::Production, &secrets).unwrap_err();
    assert!(err.to_string().contains("COSMOS_ENDPOINT"));
}

#[test]
fn test_production_mode_builds_remote_collaborators() {
    let secrets = SecretStore::Static(HashMap::from([
        (
            "COSMOS_ENDPOINT".to_string(),
            "http://store.example".to_string(),
        ),
        ("COSMOS_KEY".to_string(), "store-key".to_string()),
        ("OPENAI_API_KEY".to_string(), "sk-test".to_string()),
    ]));

    let (provider, chat) = build_collaborators(DeploymentMode::Production, &secrets).unwrap();
    assert!(matches!(provider, RecordProvider::Remote(_)));
    assert!(matches!(chat, ChatClient::OpenAi(_)));
}
