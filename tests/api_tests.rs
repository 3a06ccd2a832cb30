//! HTTP surface tests, driven through the router with `tower::oneshot`.


use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use container_manager::{create_router, ContainerManager};
use http_body_util::BodyExt;
use test_utils::FakeRuntime;
use tower::ServiceExt;

fn app_with(fake: Arc<FakeRuntime>) -> Router {
    create_router(ContainerManager::new(fake))
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_returns_name_and_id() {
    let app = app_with(Arc::new(FakeRuntime::new()));

    let response = app
        .oneshot(post_json("/containers", r#"{"imageName": "alpine"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = json_body(response).await;
    let name = json["containerName"].as_str().unwrap();
    assert!(name.starts_with("container-alpine-latest-"));
    assert!(!json["containerId"].as_str().unwrap().is_empty());
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn create_passes_env_variables_through() {
    let fake = Arc::new(FakeRuntime::new().with_local_image("alpine:3.18"));
    let app = app_with(fake.clone());

    let response = app
        .oneshot(post_json(
            "/containers",
            r#"{"imageName": "alpine:3.18", "envVariables": {"FOO": "bar"}}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let specs = fake.created_specs();
    assert_eq!(specs[0].env, vec!["FOO=bar".to_string()]);
}

#[tokio::test]
async fn create_without_image_name_is_a_client_error() {
    let app = app_with(Arc::new(FakeRuntime::new()));

    let response = app.oneshot(post_json("/containers", "{}")).await.unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn create_failure_reports_message_and_details() {
    let fake = Arc::new(FakeRuntime::new().fail_pulls_with("manifest unknown"));
    let app = app_with(fake);

    let response = app
        .oneshot(post_json("/containers", r#"{"imageName": "no-such-image"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = json_body(response).await;
    assert_eq!(json["message"], "Failed to create container");
    assert!(json["details"].as_str().unwrap().contains("manifest unknown"));
}

#[tokio::test]
async fn status_reports_state_and_full_name_list() {
    let fake = Arc::new(FakeRuntime::new().with_container(
        "cafe0123",
        "container-alpine-latest-abc",
        "alpine:latest",
        "running",
        "Up 2 minutes",
    ));
    let app = app_with(fake);

    let response = app
        .oneshot(get("/containers/container-alpine-latest-abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    assert_eq!(json["containerId"], "cafe0123");
    assert_eq!(json["state"], "running");
    assert_eq!(json["image"], "alpine:latest");
    assert_eq!(
        json["containerName"],
        serde_json::json!(["/container-alpine-latest-abc"])
    );
}

#[tokio::test]
async fn status_of_missing_container_is_not_found() {
    let app = app_with(Arc::new(FakeRuntime::new()));

    let response = app.oneshot(get("/containers/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = json_body(response).await;
    assert!(json["message"].as_str().unwrap().contains("nope"));
}

#[tokio::test]
async fn list_returns_only_managed_containers() {
    let fake = Arc::new(
        FakeRuntime::new()
            .with_container("id1", "container-alpine-latest-aaa", "alpine:latest", "running", "Up")
            .with_container("id2", "postgres-db", "postgres:16", "running", "Up"),
    );
    let app = app_with(fake);

    let response = app.oneshot(get("/containers")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], "id1");
    assert_eq!(entries[0]["image"], "alpine:latest");
    assert_eq!(entries[0]["state"], "running");
}

#[tokio::test]
async fn delete_succeeds_once_then_reports_not_found() {
    let fake = Arc::new(FakeRuntime::new().with_container(
        "id1",
        "container-alpine-latest-aaa",
        "alpine:latest",
        "running",
        "Up",
    ));
    let app = app_with(fake);

    let response = app.clone().oneshot(delete("/containers/id1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    assert!(json["message"].as_str().unwrap().contains("removed"));

    let response = app.oneshot(delete("/containers/id1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_failure_surfaces_as_server_error() {
    let app = app_with(Arc::new(FakeRuntime::new().offline()));

    let response = app.oneshot(get("/containers")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = json_body(response).await;
    assert_eq!(json["message"], "Failed to list containers");
    assert!(json["details"].is_string());
}
