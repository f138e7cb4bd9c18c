use axum::extract::{Extension, State};
use serde::Serialize;
use std::sync::Arc;

use crate::auth::{Caller, PERM_ACCESS_CONTENT};
use crate::database::articles::ArticleStore;
use crate::error::ApiError;
use crate::middleware::{CachedJson, CachedResult};
use crate::storage::{to_public_url, PublicPathResolver};
use crate::AppState;

/// Cache lifetime of the article listing: one day. A fixed constant, not a
/// rolling "now + 1 day" timestamp; max-age is relative by definition.
pub const ARTICLES_MAX_AGE_SECS: u32 = 86_400;

/// One article as served to clients: title plus the image's public URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleView {
    pub title: String,
    pub image: String,
}

/// Response envelope for the article listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleView>,
    #[serde(skip)]
    pub max_age_secs: u32,
}

/// Serves the read-only article listing.
///
/// Per request: checks the caller's content-read permission, runs one read
/// query against the content store, rewrites each stored image URI into a
/// public URL, and wraps the result with a cache lifetime. Stateless; every
/// invocation is independent.
pub struct ArticleListHandler {
    store: Arc<dyn ArticleStore>,
    paths: Arc<dyn PublicPathResolver>,
}

impl ArticleListHandler {
    pub fn new(store: Arc<dyn ArticleStore>, paths: Arc<dyn PublicPathResolver>) -> Self {
        Self { store, paths }
    }

    pub async fn handle(&self, caller: &Caller) -> Result<ArticleListResponse, ApiError> {
        // Gate before touching the store: an unauthorized caller learns
        // nothing about the content, not even whether the query works.
        if !caller.has_permission(PERM_ACCESS_CONTENT) {
            return Err(ApiError::forbidden("Access denied"));
        }

        let rows = self.store.list_articles().await.map_err(|e| {
            // Cause stays in the logs; the caller gets a fixed message.
            tracing::error!("article listing query failed: {}", e);
            ApiError::bad_request("Could not find articles")
        })?;

        let base_path = self.paths.public_base_path();
        let articles = rows
            .into_iter()
            .map(|row| ArticleView {
                title: row.title,
                image: to_public_url(&row.image_uri, &base_path),
            })
            .collect();

        Ok(ArticleListResponse {
            articles,
            max_age_secs: ARTICLES_MAX_AGE_SECS,
        })
    }
}

/// GET /rest/articles - list articles with public image URLs
pub async fn articles_get(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
) -> CachedResult<ArticleListResponse> {
    let response = state.articles.handle(&caller).await?;
    let max_age = response.max_age_secs;
    Ok(CachedJson::new(response, max_age))
}
