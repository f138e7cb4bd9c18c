pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod storage;

use axum::{middleware::from_fn, routing::get, Router};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use handlers::rest::articles::ArticleListHandler;

/// Shared per-process state: the article handler with its injected
/// collaborators, plus the pool used by the health check.
#[derive(Clone)]
pub struct AppState {
    pub articles: Arc<ArticleListHandler>,
    pub db: PgPool,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // Protected REST surface
        .merge(rest_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn rest_routes() -> Router<AppState> {
    use handlers::rest::articles;

    Router::new()
        .route("/rest/articles", get(articles::articles_get))
        .route_layer(from_fn(middleware::jwt_auth_middleware))
}
