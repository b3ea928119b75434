//! Catalog API client implementation.

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use scout_core::{Error, HttpError, Result};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::context::CatalogContext;

/// Maximum number of attempts for a failed request.
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
const BASE_RETRY_DELAY_MS: u64 = 500;

/// Block applied after a 429 without a `Retry-After` header.
const DEFAULT_RATE_LIMIT_BLOCK: Duration = Duration::from_secs(10);

/// Upper bound on any rate-limit block, whatever `Retry-After` says.
const MAX_RATE_LIMIT_BLOCK: Duration = Duration::from_secs(60 * 60);

/// Movie catalog API client.
#[derive(Clone)]
pub struct CatalogClient {
    /// HTTP client for making requests.
    http: reqwest::Client,
    /// Credential and locale parameters.
    pub(crate) context: CatalogContext,
    /// Set after the server answers 429.
    rate_limit: Arc<RwLock<RateLimitState>>,
}

#[derive(Debug, Default)]
struct RateLimitState {
    blocked_until: Option<Instant>,
}

impl RateLimitState {
    fn remaining(&self) -> Option<Duration> {
        self.blocked_until
            .and_then(|until| until.checked_duration_since(Instant::now()))
            .filter(|d| !d.is_zero())
    }

    fn block_for(&mut self, duration: Duration) {
        let now = Instant::now();
        self.blocked_until = now
            .checked_add(duration.min(MAX_RATE_LIMIT_BLOCK))
            .or(Some(now));
    }
}

impl CatalogClient {
    /// Create a new catalog client for the given context.
    pub fn new(context: CatalogContext) -> Result<Self> {
        if context.access_token.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "catalog access token is empty".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("MovieScout/", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(10)
            .tcp_keepalive(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            context,
            rate_limit: Arc::new(RwLock::new(RateLimitState::default())),
        })
    }

    /// The context this client sends with every request.
    pub const fn context(&self) -> &CatalogContext {
        &self.context
    }

    /// Build the full URL for an endpoint and its query parameters.
    pub(crate) fn build_url(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Url> {
        let raw = format!("{}/{}", self.context.base_url, endpoint.trim_start_matches('/'));
        let mut url =
            Url::parse(&raw).map_err(|e| Error::Http(HttpError::InvalidUrl(format!("{raw}: {e}"))))?;
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    /// Make a GET request to a catalog endpoint and decode the JSON body.
    pub(crate) async fn get<R>(&self, endpoint: &str, params: &[(&str, String)]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.build_url(endpoint, params)?;

        if let Some(remaining) = self.rate_limit.read().remaining() {
            return Err(Error::RateLimited {
                retry_after_secs: Some(remaining.as_secs().max(1)),
            });
        }

        let mut last_error = None;
        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = Duration::from_millis(BASE_RETRY_DELAY_MS * 2u64.pow(attempt - 1));
                tokio::time::sleep(delay).await;
                debug!("Retry attempt {attempt} for {endpoint} after {delay:?}");
            }

            match self.do_request(url.clone()).await {
                Ok(body) => {
                    return serde_json::from_slice(&body).map_err(|e| {
                        Error::Parse(format!("Failed to parse {endpoint} response: {e}"))
                    });
                }
                Err(e) => {
                    warn!("Request to {endpoint} failed (attempt {attempt}): {e}");

                    if let Error::RateLimited { retry_after_secs } = &e {
                        let block = retry_after_secs
                            .map_or(DEFAULT_RATE_LIMIT_BLOCK, Duration::from_secs);
                        self.rate_limit.write().block_for(block);
                        return Err(e);
                    }

                    if !e.is_retryable() {
                        return Err(e);
                    }

                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| Error::Network("Request failed".to_string())))
    }

    async fn do_request(&self, url: Url) -> Result<Vec<u8>> {
        debug!("GET {}", url.path());

        let mut request = self
            .http
            .get(url)
            .bearer_auth(&self.context.access_token);
        if let Some(timeout) = self.context.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Http(HttpError::Timeout)
            } else if e.is_connect() {
                Error::Http(HttpError::ConnectionFailed(e.to_string()))
            } else {
                Error::Network(e.to_string())
            }
        })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(|secs| secs.min(MAX_RATE_LIMIT_BLOCK.as_secs()));

            return Err(Error::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Http(HttpError::StatusError {
                status: status.as_u16(),
                message,
            }));
        }

        response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| Error::Network(format!("Failed to read response body: {e}")))
    }
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client() -> CatalogClient {
        CatalogClient::new(CatalogContext::new("token")).unwrap()
    }

    #[test]
    fn test_empty_token_rejected() {
        let err = CatalogClient::new(CatalogContext::new("  ")).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_build_url() {
        let url = client()
            .build_url(
                "search/movie",
                &[("language", "en-US".into()), ("query", "star wars".into())],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.themoviedb.org/3/search/movie?language=en-US&query=star+wars"
        );
    }

    #[test]
    fn test_rate_limit_state() {
        let mut state = RateLimitState::default();
        assert!(state.remaining().is_none());

        state.block_for(Duration::from_secs(5));
        assert!(state.remaining().is_some());
    }

    #[tokio::test]
    async fn test_get_sends_bearer_and_decodes() {
        let (base, heads) =
            test_server::serve(vec![(200, r#"{"genres":[]}"#.to_string())]).await;
        let client = CatalogClient::new(CatalogContext::new("abc").with_base_url(base)).unwrap();

        let value: serde_json::Value = client
            .get("genre/movie/list", &[("language", "en-US".into())])
            .await
            .unwrap();
        assert!(value["genres"].is_array());

        let heads = heads.await.unwrap();
        assert!(heads[0].starts_with("GET /3/genre/movie/list?language=en-US "));
        assert!(heads[0].to_lowercase().contains("authorization: bearer abc"));
    }

    #[tokio::test]
    async fn test_client_error_not_retried() {
        let (base, heads) = test_server::serve(vec![(
            401,
            r#"{"status_message":"Invalid API key"}"#.to_string(),
        )])
        .await;
        let client = CatalogClient::new(CatalogContext::new("bad").with_base_url(base)).unwrap();

        let err = client
            .get::<serde_json::Value>("movie/top_rated", &[])
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(401));
        assert_eq!(heads.await.unwrap().len(), 1);
    }

    #[test]
    fn test_block_for_huge_duration_is_capped() {
        let mut state = RateLimitState::default();
        state.block_for(Duration::MAX);
        let remaining = state.remaining().unwrap();
        assert!(remaining <= MAX_RATE_LIMIT_BLOCK);
    }

    #[tokio::test]
    async fn test_oversized_retry_after_is_clamped() {
        let (base, _heads) = test_server::serve_with_headers(vec![(
            429,
            "Retry-After: 18446744073709551615\r\n".to_string(),
            "{}".to_string(),
        )])
        .await;
        let client = CatalogClient::new(CatalogContext::new("t").with_base_url(base)).unwrap();

        let err = client
            .get::<serde_json::Value>("movie/upcoming", &[])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::RateLimited {
                retry_after_secs: Some(3600)
            }
        ));

        // Still blocked, for no longer than the cap.
        let err = client
            .get::<serde_json::Value>("movie/upcoming", &[])
            .await
            .unwrap_err();
        assert!(
            matches!(err, Error::RateLimited { retry_after_secs: Some(secs) } if secs <= 3600),
            "unexpected error: {err:?}"
        );
    }

    #[tokio::test]
    async fn test_rate_limit_blocks_following_requests() {
        let (base, _heads) =
            test_server::serve(vec![(429, "{}".to_string())]).await;
        let client = CatalogClient::new(CatalogContext::new("t").with_base_url(base)).unwrap();

        let err = client
            .get::<serde_json::Value>("movie/upcoming", &[])
            .await
            .unwrap_err();
        assert!(err.is_rate_limited());

        let err = client
            .get::<serde_json::Value>("movie/upcoming", &[])
            .await
            .unwrap_err();
        assert!(err.is_rate_limited());
    }
}
