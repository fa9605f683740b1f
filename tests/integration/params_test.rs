//! Parameter coercion through real axum routing

use std::collections::HashMap;

use axum::{
    body::{to_bytes, Body},
    extract::{Path, Query},
    http::{Request, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use signet_common::{path_int, query_bool, query_int, Error};

async fn list_items(
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Value>, Error> {
    let limit = query_int(&query, "limit")?;
    let archived = query_bool(&query, "archived")?;

    Ok(Json(json!({ "limit": limit, "archived": archived })))
}

async fn show_item(Path(params): Path<HashMap<String, String>>) -> Result<Json<Value>, Error> {
    let id = path_int(&params, "id")?;

    Ok(Json(json!({ "id": id })))
}

fn app() -> Router {
    Router::new()
        .route("/items", get(list_items))
        .route("/items/{id}", get(show_item))
}

async fn send(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn test_query_coercion_succeeds() {
    let (status, body) = send(app(), "/items?limit=42&archived=true").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["limit"], 42);
    assert_eq!(body["archived"], true);
}

#[tokio::test]
async fn test_missing_query_parameter_is_400() {
    let (status, body) = send(app(), "/items?archived=true").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_PARAMETER");
    assert_eq!(body["error"]["message"], "no limit");
}

#[tokio::test]
async fn test_non_numeric_query_parameter_is_400() {
    let (status, body) = send(app(), "/items?limit=abc&archived=true").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "invalid limit");
}

#[tokio::test]
async fn test_loose_boolean_spelling_is_400() {
    let (status, body) = send(app(), "/items?limit=42&archived=yes").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "invalid archived");
}

#[tokio::test]
async fn test_path_coercion_succeeds() {
    let (status, body) = send(app(), "/items/7").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 7);
}

#[tokio::test]
async fn test_non_numeric_path_parameter_is_400() {
    let (status, body) = send(app(), "/items/seven").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_PARAMETER");
    assert_eq!(body["error"]["message"], "invalid id");
}
