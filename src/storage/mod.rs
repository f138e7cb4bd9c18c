//! Public file storage: base-path resolution and storage-URI rewriting.

use crate::config::StorageConfig;

/// Scheme prefix of internally stored file URIs.
pub const PUBLIC_SCHEME: &str = "public://";

/// Supplies the externally reachable prefix that storage URIs are rewritten
/// into for client consumption.
pub trait PublicPathResolver: Send + Sync {
    fn public_base_path(&self) -> String;
}

/// Resolver backed by the storage section of the app config.
pub struct ConfigPathResolver {
    base_path: String,
}

impl ConfigPathResolver {
    pub fn new(storage: &StorageConfig) -> Self {
        Self {
            base_path: storage.public_base_path.clone(),
        }
    }
}

impl PublicPathResolver for ConfigPathResolver {
    fn public_base_path(&self) -> String {
        self.base_path.clone()
    }
}

/// Rewrite a storage-scheme URI into a public URL by exact prefix
/// substitution: the leading `public://` is replaced with `base_path`
/// (normalized to a trailing slash). No other characters are altered and
/// nothing is URL-parsed or re-encoded. URIs that do not carry the scheme
/// pass through unchanged.
pub fn to_public_url(uri: &str, base_path: &str) -> String {
    match uri.strip_prefix(PUBLIC_SCHEME) {
        Some(relative) => {
            if base_path.ends_with('/') {
                format!("{}{}", base_path, relative)
            } else {
                format!("{}/{}", base_path, relative)
            }
        }
        None => uri.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_public_scheme_prefix() {
        assert_eq!(
            to_public_url("public://images/a.png", "/sites/default/files/"),
            "/sites/default/files/images/a.png"
        );
    }

    #[test]
    fn normalizes_missing_trailing_slash() {
        assert_eq!(
            to_public_url("public://images/a.png", "/sites/default/files"),
            "/sites/default/files/images/a.png"
        );
    }

    #[test]
    fn leaves_other_schemes_untouched() {
        assert_eq!(
            to_public_url("private://secret.png", "/sites/default/files/"),
            "private://secret.png"
        );
        assert_eq!(to_public_url("images/plain.png", "/files/"), "images/plain.png");
    }

    #[test]
    fn only_the_leading_prefix_is_replaced() {
        // A scheme-looking substring later in the path must survive as-is
        assert_eq!(
            to_public_url("public://odd/public://nested.png", "/files/"),
            "/files/odd/public://nested.png"
        );
    }

    #[test]
    fn resolver_returns_configured_path() {
        let storage = crate::config::StorageConfig {
            public_base_path: "/sites/default/files/".to_string(),
        };
        let resolver = ConfigPathResolver::new(&storage);
        assert_eq!(resolver.public_base_path(), "/sites/default/files/");
    }
}
