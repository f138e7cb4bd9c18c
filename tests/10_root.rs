mod common;

use std::sync::Arc;

use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use common::{sample_rows, test_app, FixedStore};

#[tokio::test]
async fn root_descriptor_lists_the_articles_endpoint() -> Result<()> {
    let router = test_app(Arc::new(FixedStore::new(sample_rows())));

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await?;
    assert_eq!(body["success"], true);
    assert!(body["data"]["endpoints"]["articles"]
        .as_str()
        .unwrap_or_default()
        .contains("/rest/articles"));
    Ok(())
}

#[tokio::test]
async fn health_reports_liveness_even_when_database_is_down() -> Result<()> {
    let router = test_app(Arc::new(FixedStore::new(Vec::new())));

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty())?)
        .await?;

    // The test pool points at no real database, so either outcome of the
    // ping is acceptable as a liveness signal
    assert!(
        response.status() == StatusCode::OK || response.status() == StatusCode::SERVICE_UNAVAILABLE,
        "unexpected status: {}",
        response.status()
    );
    let _body = common::body_json(response).await?;
    Ok(())
}
