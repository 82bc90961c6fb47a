use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use tower::ServiceExt;

use super::*;

/// Expect simple requests from another origin to be allowed
#[tokio::test]
async fn allows_any_origin_on_get() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = app(&test);

    let resp = app
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/people")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    Ok(())
}

/// Expect a preflight for adding a favorite to be answered without reaching the handler
#[tokio::test]
async fn answers_preflight_for_favorite_routes() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(&test);

    let resp = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/favorite/planet/1")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert!(resp
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));

    Ok(())
}
