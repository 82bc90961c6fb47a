//! Shared helpers for integration tests.

use axum::{body::to_bytes, response::Response};
use holocron::server::model::app::AppState;
use holocron_test_utils::TestContext;
use serde::de::DeserializeOwned;

/// Extension trait for TestContext to create the application state
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }
}

/// Reads a response body and deserializes it from JSON
pub async fn body_json<T: DeserializeOwned>(resp: Response) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Response body is not the expected JSON")
}
