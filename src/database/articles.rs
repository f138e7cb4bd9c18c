use async_trait::async_trait;
use sqlx::PgPool;

use super::DatabaseError;

/// Content type whose rows the article listing serves.
const ARTICLE_CONTENT_TYPE: &str = "article";

/// One article row as projected by the listing query: the title plus the
/// image's storage-scheme URI (e.g. `public://images/a.png`). The URI is
/// rewritten to a public URL later, outside the query.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ArticleRow {
    pub title: String,
    pub image_uri: String,
}

/// Read-only access to article content rows.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Fetch all article rows whose image reference resolves to a managed
    /// file. Rows failing either join are excluded, not reported.
    async fn list_articles(&self) -> Result<Vec<ArticleRow>, DatabaseError>;
}

/// Postgres-backed store over the content-metadata schema.
pub struct PgArticleStore {
    pool: PgPool,
}

impl PgArticleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleStore for PgArticleStore {
    async fn list_articles(&self) -> Result<Vec<ArticleRow>, DatabaseError> {
        // Inner joins drop content without a resolvable managed file.
        // No ORDER BY: row order follows the engine's natural order.
        let rows = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT nfd.title AS title, f.uri AS image_uri
            FROM node_field_data nfd
            INNER JOIN node__field_image n_fi ON n_fi.entity_id = nfd.nid
            INNER JOIN file_managed f ON f.fid = n_fi.field_image_target_id
            WHERE nfd.type = $1
            "#,
        )
        .bind(ARTICLE_CONTENT_TYPE)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
