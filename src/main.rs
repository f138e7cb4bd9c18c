use std::sync::Arc;

use flisol_api::database::articles::PgArticleStore;
use flisol_api::handlers::rest::articles::ArticleListHandler;
use flisol_api::storage::ConfigPathResolver;
use flisol_api::{app, config, database, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();

    tracing_subscriber::fmt::init();
    tracing::info!("Starting FLISOL API in {:?} mode", config.environment);

    let pool = database::connect_pool().unwrap_or_else(|e| panic!("database setup failed: {}", e));

    let handler = ArticleListHandler::new(
        Arc::new(PgArticleStore::new(pool.clone())),
        Arc::new(ConfigPathResolver::new(&config.storage)),
    );

    let app = app(AppState {
        articles: Arc::new(handler),
        db: pool,
    });

    // Allow tests or deployments to override port via env
    let port = std::env::var("FLISOL_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("FLISOL API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
