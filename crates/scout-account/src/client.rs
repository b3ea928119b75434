//! Register/login client for the account service.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use scout_core::{Error, HttpError, Result, UserIdentity};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

/// Where the account service listens unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// A successful login.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub email: String,
    /// Opaque bearer token issued by the service.
    pub token: String,
}

impl Session {
    pub fn identity(&self) -> UserIdentity {
        UserIdentity::new(&self.name).with_email(&self.email)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// The user record echoed back by a successful registration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct LoginReply {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorReply {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    msg: Option<String>,
}

/// Account service client.
#[derive(Clone)]
pub struct AccountClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AccountClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url.trim())
            .map_err(|e| Error::Http(HttpError::InvalidUrl(format!("{base_url}: {e}"))))?;
        // Keep any path prefix when joining endpoint names.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("MovieScout/", env!("CARGO_PKG_VERSION")))
            .tcp_keepalive(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, base_url })
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Create an account.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<Registration> {
        info!("Registering account for {email}");
        let body = RegisterRequest {
            name,
            email,
            password,
        };
        let (status, bytes) = self.post("register", &body).await?;

        if !(200..300).contains(&status) {
            return Err(Error::Account(error_message(status, &bytes)));
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| Error::Parse(format!("Failed to parse register response: {e}")))
    }

    /// Log in.
    ///
    /// Unknown emails and wrong passwords both come back as
    /// [`Error::CredentialsNotFound`].
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let body = LoginRequest { email, password };
        let (status, bytes) = self.post("login", &body).await?;

        let session = login_outcome(status, &bytes, email)?;
        info!("Logged in as {}", session.name);
        Ok(session)
    }

    async fn post<B: Serialize + Sync>(&self, endpoint: &str, body: &B) -> Result<(u16, Vec<u8>)> {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|e| Error::Http(HttpError::InvalidUrl(format!("{endpoint}: {e}"))))?;
        debug!("POST {}", url.path());

        let response = self.http.post(url).json(body).send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Http(HttpError::Timeout)
            } else if e.is_connect() {
                Error::Http(HttpError::ConnectionFailed(e.to_string()))
            } else {
                Error::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response body: {e}")))?;

        Ok((status, bytes.to_vec()))
    }
}

impl std::fmt::Debug for AccountClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

fn login_outcome(status: u16, body: &[u8], email: &str) -> Result<Session> {
    match status {
        200 => {
            let reply: LoginReply = serde_json::from_slice(body)
                .map_err(|e| Error::Parse(format!("Failed to parse login response: {e}")))?;

            if reply.msg.as_deref() != Some("success") {
                return Err(Error::CredentialsNotFound);
            }

            match (reply.name, reply.token) {
                (Some(name), Some(token)) => Ok(Session {
                    name,
                    email: email.to_string(),
                    token,
                }),
                _ => Err(Error::Parse(
                    "login response is missing name or token".to_string(),
                )),
            }
        }
        404 => Err(Error::CredentialsNotFound),
        _ => {
            let message = error_message(status, body);
            warn!("Login failed: {message}");
            Err(Error::Account(message))
        }
    }
}

fn error_message(status: u16, body: &[u8]) -> String {
    let reply: ErrorReply = serde_json::from_slice(body).unwrap_or_default();
    let detail = reply
        .error
        .or(reply.msg)
        .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned());
    format!("status {status}: {detail}")
}
