//! Application configuration: optional JSON file, then environment.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use scout_account::DEFAULT_BASE_URL as DEFAULT_ACCOUNT_URL;
use scout_cache::DEFAULT_CAPACITY;
use scout_catalog::CatalogContext;
use scout_search::PipelineConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Runtime settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog API read access token.
    pub tmdb_token: String,
    pub language: String,
    pub region: String,
    pub account_url: String,
    pub debounce_ms: u64,
    pub cache_capacity: usize,
    /// Extra content filter terms.
    pub denylist: Vec<String>,
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tmdb_token: String::new(),
            language: "en-US".to_string(),
            region: "US".to_string(),
            account_url: DEFAULT_ACCOUNT_URL.to_string(),
            debounce_ms: 500,
            cache_capacity: DEFAULT_CAPACITY,
            denylist: Vec::new(),
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Load the config file if there is one, then apply `SCOUT_*` overrides.
    ///
    /// Never fails: a broken file is logged and defaults are used instead.
    pub fn load() -> Self {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path).unwrap_or_else(|e| {
                warn!("Ignoring config file: {e:#}");
                Self::default()
            }),
            _ => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok());

        if config.tmdb_token.is_empty() {
            warn!("SCOUT_TMDB_TOKEN not set, catalog requests will fail");
        }
        config
    }

    /// `<config dir>/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "moviescout", "MovieScout")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Override fields from `SCOUT_*` variables looked up through `var`.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(token) = var("SCOUT_TMDB_TOKEN") {
            self.tmdb_token = token.trim().to_string();
        }
        if let Some(language) = var("SCOUT_LANGUAGE") {
            self.language = language;
        }
        if let Some(region) = var("SCOUT_REGION") {
            self.region = region;
        }
        if let Some(url) = var("SCOUT_ACCOUNT_URL") {
            self.account_url = url;
        }
        try_parse(&var, "SCOUT_DEBOUNCE_MS", &mut self.debounce_ms);
        try_parse(&var, "SCOUT_CACHE_CAPACITY", &mut self.cache_capacity);
        if let Some(terms) = var("SCOUT_DENYLIST") {
            self.denylist = terms
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
        }
    }

    pub fn catalog_context(&self) -> CatalogContext {
        let context = CatalogContext::new(&self.tmdb_token)
            .with_language(&self.language)
            .with_region(&self.region);
        match self.request_timeout_secs {
            Some(secs) => context.with_timeout(Duration::from_secs(secs)),
            None => context,
        }
    }

    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            debounce: Duration::from_millis(self.debounce_ms),
            cache_capacity: self.cache_capacity,
            denylist: self.denylist.clone(),
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("tmdb_token", &"<redacted>")
            .field("language", &self.language)
            .field("region", &self.region)
            .field("account_url", &self.account_url)
            .field("debounce_ms", &self.debounce_ms)
            .field("cache_capacity", &self.cache_capacity)
            .field("denylist", &self.denylist)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

fn try_parse<T: FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str, target: &mut T)
where
    T::Err: std::fmt::Display,
{
    if let Some(raw) = var(key) {
        match raw.trim().parse() {
            Ok(value) => *target = value,
            Err(e) => warn!("Invalid {key} value {raw:?}: {e}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.language, "en-US");
        assert_eq!(config.region, "US");
        assert_eq!(config.account_url, "http://localhost:3001");
        assert_eq!(config.pipeline_config().debounce, Duration::from_millis(500));
        assert_eq!(config.pipeline_config().cache_capacity, 100);
        assert!(config.catalog_context().timeout.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config.apply_env(env(&[
            ("SCOUT_TMDB_TOKEN", " secret "),
            ("SCOUT_REGION", "GB"),
            ("SCOUT_DEBOUNCE_MS", "250"),
            ("SCOUT_CACHE_CAPACITY", "not a number"),
            ("SCOUT_DENYLIST", "gore, ,slasher"),
        ]));

        assert_eq!(config.tmdb_token, "secret");
        assert_eq!(config.region, "GB");
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.cache_capacity, DEFAULT_CAPACITY);
        assert_eq!(config.denylist, vec!["gore", "slasher"]);

        let context = config.catalog_context();
        assert_eq!(context.access_token, "secret");
        assert_eq!(context.region, "GB");
    }

    #[test]
    fn test_file_then_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"language": "fr-FR", "request_timeout_secs": 10, "tmdb_token": "from-file"}"#,
        )
        .unwrap();

        let mut config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.language, "fr-FR");
        assert_eq!(config.region, "US");
        assert_eq!(
            config.catalog_context().timeout,
            Some(Duration::from_secs(10))
        );

        config.apply_env(env(&[("SCOUT_TMDB_TOKEN", "from-env")]));
        assert_eq!(config.tmdb_token, "from-env");
    }

    #[test]
    fn test_broken_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{nope").unwrap();
        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = AppConfig {
            tmdb_token: "secret".into(),
            ..Default::default()
        };
        assert!(!format!("{config:?}").contains("secret"));
    }
}
