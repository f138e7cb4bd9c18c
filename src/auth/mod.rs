use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::config;

/// Permission required to read published content.
pub const PERM_ACCESS_CONTENT: &str = "access content";

/// Claims carried in the bearer token issued by the identity provider.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub name: String,
    pub permissions: Vec<String>,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(sub: Uuid, name: String, permissions: Vec<String>) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::hours(24)).timestamp();

        Self {
            sub,
            name,
            permissions,
            exp,
            iat: now.timestamp(),
        }
    }
}

/// The authenticated caller for one request: an identity plus its granted
/// permission strings. Built by the auth middleware from validated claims.
#[derive(Clone, Debug)]
pub struct Caller {
    pub id: Uuid,
    pub name: String,
    permissions: HashSet<String>,
}

impl Caller {
    pub fn new(id: Uuid, name: String, permissions: impl IntoIterator<Item = String>) -> Self {
        Self {
            id,
            name,
            permissions: permissions.into_iter().collect(),
        }
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}

impl From<Claims> for Caller {
    fn from(claims: Claims) -> Self {
        Caller::new(claims.sub, claims.name, claims.permissions)
    }
}

#[derive(Debug)]
pub enum JwtError {
    TokenGeneration(String),
    InvalidSecret,
}

impl std::fmt::Display for JwtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JwtError::TokenGeneration(msg) => write!(f, "JWT generation error: {}", msg),
            JwtError::InvalidSecret => write!(f, "Invalid JWT secret"),
        }
    }
}

impl std::error::Error for JwtError {}

pub fn generate_jwt(claims: Claims) -> Result<String, JwtError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, &claims, &encoding_key).map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_permission_lookup() {
        let caller = Caller::new(
            Uuid::new_v4(),
            "reader".to_string(),
            vec![PERM_ACCESS_CONTENT.to_string()],
        );
        assert!(caller.has_permission(PERM_ACCESS_CONTENT));
        assert!(!caller.has_permission("administer site"));
    }

    #[test]
    fn caller_from_claims_keeps_permissions() {
        let claims = Claims::new(
            Uuid::new_v4(),
            "reader".to_string(),
            vec![PERM_ACCESS_CONTENT.to_string(), "post comments".to_string()],
        );
        let caller = Caller::from(claims);
        assert!(caller.has_permission("post comments"));
        assert!(!caller.has_permission("access administration"));
    }
}
