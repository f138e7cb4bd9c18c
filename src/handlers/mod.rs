pub mod rest;

use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::AppState;

/// GET / - service descriptor
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "FLISOL API",
            "version": version,
            "description": "Read-only REST backend for article content",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "articles": "/rest/articles (protected - requires content read permission)",
            }
        }
    }))
}

/// GET /health - liveness plus database ping
pub async fn health(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::health_check(&state.db).await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
