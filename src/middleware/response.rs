use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;

/// JSON response carrying a public cache lifetime.
///
/// Serializes `data` as the response body and attaches a
/// `Cache-Control: public, max-age=<secs>` directive so intermediaries and
/// clients may reuse the payload for the given number of seconds.
#[derive(Debug)]
pub struct CachedJson<T: Serialize> {
    pub data: T,
    pub max_age_secs: u32,
}

impl<T: Serialize> CachedJson<T> {
    pub fn new(data: T, max_age_secs: u32) -> Self {
        Self { data, max_age_secs }
    }
}

impl<T: Serialize> IntoResponse for CachedJson<T> {
    fn into_response(self) -> Response {
        let mut response = Json(&self.data).into_response();

        if response.status() == StatusCode::OK {
            let directive = format!("public, max-age={}", self.max_age_secs);
            match HeaderValue::from_str(&directive) {
                Ok(value) => {
                    response.headers_mut().insert(header::CACHE_CONTROL, value);
                }
                Err(e) => {
                    tracing::error!("failed to build Cache-Control header: {}", e);
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({
                            "error": true,
                            "message": "Failed to build response headers"
                        })),
                    )
                        .into_response();
                }
            }
        }

        response
    }
}

/// Convenience result type for cacheable handlers
pub type CachedResult<T> = Result<CachedJson<T>, crate::error::ApiError>;
