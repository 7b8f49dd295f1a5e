use std::sync::Arc;

use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory, factory::helpers::date};
use tower::ServiceExt;

use crate::server::{flow::FlowRegistry, router, state::AppState};


/// Every record route paired with the message it returns when the fetch fails.
const RECORD_ROUTES: [(&str, &str); 5] = [
    ("/api/attendance", "Failed to fetch attendance"),
    ("/api/events", "Failed to fetch events"),
    ("/api/exams", "Failed to fetch exams"),
    ("/api/finance/payments", "Failed to fetch payments"),
    ("/api/grades", "Failed to fetch grades"),
];

/// Builds the full application router over `db` with no flows registered.
fn app(db: &DatabaseConnection) -> Router {
    app_with_flows(db, FlowRegistry::new())
}

fn app_with_flows(db: &DatabaseConnection, flows: FlowRegistry) -> Router {
    router::router().with_state(AppState::new(db.clone(), Arc::new(flows)))
}

/// Builds the router over `db`, then closes the shared pool behind it.
///
/// The router keeps its own handle, so every query it issues fails to acquire a
/// connection.
async fn app_with_closed_pool(db: &DatabaseConnection) -> Router {
    let app = app(db);

    db.clone().close().await.unwrap();

    app
}

/// Sends a GET to `uri` and returns the status, content type and raw body.
async fn get(app: &Router, uri: &str) -> (StatusCode, Option<String>, Bytes) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|value| value.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, content_type, body)
}

/// Sends a GET to `uri` and parses the body as JSON.
async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = get(app, uri).await;

    (status, serde_json::from_slice(&body).unwrap())
}
