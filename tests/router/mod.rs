//! End-to-end scenarios driven through the full router.
//!
//! Requests go through routing, path extraction, the session & CORS layers and error mapping
//! exactly as they would when served.

mod cors;
mod favorite;

use axum::{
    body::Body,
    http::{Method, Request},
    response::Response,
    Router,
};
use holocron::server::startup::build_app;
use holocron_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{body_json, TestContextExt};

fn app(test: &TestContext) -> Router {
    build_app(test.into_app_state())
}

async fn send(app: &Router, method: Method, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Router service is infallible")
}
