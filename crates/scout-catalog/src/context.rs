//! Catalog client context: credential and locale parameters sent with
//! every request.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default catalog API root.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Per-client request context.
#[derive(Clone, Serialize, Deserialize)]
pub struct CatalogContext {
    /// API root, without a trailing slash.
    pub base_url: String,
    /// Bearer credential (API read access token).
    pub access_token: String,
    /// Response language (e.g. "en-US").
    pub language: String,
    /// Release region for region-scoped listings (e.g. "US").
    pub region: String,
    /// Whether discover requests may include adult titles.
    pub include_adult: bool,
    /// Optional per-request timeout. `None` leaves requests unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
}

impl CatalogContext {
    /// Context with the default API root and `en-US`/`US` locale.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: access_token.into(),
            language: "en-US".to_string(),
            region: "US".to_string(),
            include_adult: false,
            timeout: None,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Query parameters shared by every request.
    pub fn locale_params(&self) -> Vec<(&'static str, String)> {
        vec![("language", self.language.clone())]
    }

    /// Query parameters for region-scoped listings.
    pub fn regional_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("language", self.language.clone()),
            ("region", self.region.clone()),
        ]
    }
}

impl std::fmt::Debug for CatalogContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogContext")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .field("language", &self.language)
            .field("region", &self.region)
            .field("include_adult", &self.include_adult)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_defaults() {
        let ctx = CatalogContext::new("token");
        assert_eq!(ctx.base_url, DEFAULT_BASE_URL);
        assert_eq!(ctx.language, "en-US");
        assert_eq!(ctx.region, "US");
        assert!(!ctx.include_adult);
        assert!(ctx.timeout.is_none());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let ctx = CatalogContext::new("t").with_base_url("http://localhost:8080/3/");
        assert_eq!(ctx.base_url, "http://localhost:8080/3");
    }

    #[test]
    fn test_debug_redacts_token() {
        let ctx = CatalogContext::new("super-secret");
        let debug = format!("{ctx:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_regional_params() {
        let ctx = CatalogContext::new("t").with_region("GB");
        let params = ctx.regional_params();
        assert!(params.contains(&("region", "GB".to_string())));
        assert!(params.contains(&("language", "en-US".to_string())));
    }
}
