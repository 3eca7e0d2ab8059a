// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{create_test_app, unreachable_url};
use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn register(app: &super::helpers::TestApp, app_name: &str, webhook_url: &str) {
    app.server
        .post("/api/webhooks/register")
        .json(&json!({ "app_name": app_name, "webhook_url": webhook_url }))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_trigger_with_empty_registry() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/webhooks/trigger")
        .json(&json!({ "event": "ping", "data": {} }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Webhooks triggered", "results": [] })
    );
}

#[tokio::test]
async fn test_trigger_reachable_and_unreachable_targets() {
    let app = create_test_app().await;

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook"))
        .and(body_json(json!({ "event": "order.created", "data": { "order_id": 17 } })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let reachable = format!("{}/webhook", server.uri());
    let unreachable = unreachable_url().await;
    register(&app, "orders", &unreachable).await;
    register(&app, "orders", &reachable).await;

    let response = app
        .server
        .post("/api/webhooks/trigger")
        .json(&json!({ "event": "order.created", "data": { "order_id": 17 } }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body = response.json::<Value>();
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);

    assert_eq!(results[0]["webhook_url"], json!(unreachable));
    assert_eq!(results[0]["status"], json!("failed"));
    assert!(!results[0]["error"].as_str().unwrap().is_empty());

    assert_eq!(
        results[1],
        json!({ "webhook_url": reachable, "status": "success" })
    );
}

#[tokio::test]
async fn test_non_success_status_is_recorded_as_failure() {
    let app = create_test_app().await;

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    register(&app, "a", &format!("{}/broken", server.uri())).await;
    register(&app, "b", &format!("{}/ok", server.uri())).await;

    let body = app
        .server
        .post("/api/webhooks/trigger")
        .json(&json!({ "event": "deploy", "data": null }))
        .await
        .json::<Value>();

    assert_eq!(
        body["results"],
        json!([
            {
                "webhook_url": format!("{}/broken", server.uri()),
                "status": "failed",
                "error": "Request failed with status code 500"
            },
            { "webhook_url": format!("{}/ok", server.uri()), "status": "success" }
        ])
    );
}

#[tokio::test]
async fn test_all_targets_failing_is_still_a_success_response() {
    let app = create_test_app().await;
    register(&app, "a", &unreachable_url().await).await;
    register(&app, "b", "not a url").await;

    let response = app
        .server
        .post("/api/webhooks/trigger")
        .json(&json!({ "event": "ping" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r["status"] == json!("failed")));
}

#[tokio::test]
async fn test_missing_event_fields_are_left_out() {
    let app = create_test_app().await;

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    register(&app, "a", &server.uri()).await;

    let body = app
        .server
        .post("/api/webhooks/trigger")
        .json(&json!({}))
        .await
        .json::<Value>();

    assert_eq!(body["results"][0]["status"], json!("success"));
}

#[tokio::test]
async fn test_structured_event_is_forwarded_unchanged() {
    let app = create_test_app().await;

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({ "event": { "kind": "x" }, "data": 1 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    register(&app, "a", &server.uri()).await;

    let response = app
        .server
        .post("/api/webhooks/trigger")
        .json(&json!({ "event": { "kind": "x" }, "data": 1 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>()["results"][0]["status"],
        json!("success")
    );
}

#[tokio::test]
async fn test_trigger_without_body_dispatches() {
    let app = create_test_app().await;

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    register(&app, "a", &server.uri()).await;

    let response = app.server.post("/api/webhooks/trigger").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "message": "Webhooks triggered",
            "results": [{ "webhook_url": server.uri(), "status": "success" }]
        })
    );
}
