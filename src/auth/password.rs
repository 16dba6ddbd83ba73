//! Identity/password login against Space-Track.

use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, info, warn};

use super::{CredentialProvider, HttpResponse, Session};
use crate::error::{ClientError, ClientResult};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://www.space-track.org/";

const LOGIN_PATH: &str = "ajaxauth/login";

static DEFAULT_URL: LazyLock<Url> = LazyLock::new(|| Url::parse(DEFAULT_BASE_URL).unwrap());

/// Logs in with an identity (account e-mail) and password.
///
/// Every call to [`authenticate`](CredentialProvider::authenticate) performs a
/// fresh login; sessions are not cached.
#[derive(Clone)]
pub struct PasswordCredentials {
    identity: String,
    password: String,
    base_url: Url,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl PasswordCredentials {
    pub fn new(identity: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            password: password.into(),
            base_url: DEFAULT_URL.clone(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Point at a different API root (a mirror, proxy or test server).
    pub fn with_base_url(mut self, base_url: &str) -> ClientResult<Self> {
        let mut url = Url::parse(base_url)
            .map_err(|e| ClientError::invalid(format!("invalid base URL {base_url:?}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(ClientError::invalid(format!(
                "base URL cannot carry a path: {base_url}"
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        self.base_url = url;
        Ok(self)
    }

    /// Per-request timeout applied by the HTTP transport.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn build_client(&self) -> ClientResult<reqwest::Client> {
        let mut builder = reqwest::Client::builder().cookie_store(true);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        builder
            .build()
            .map_err(|e| ClientError::authentication(format!("failed to build HTTP client: {e}")))
    }
}

impl fmt::Debug for PasswordCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordCredentials")
            .field("identity", &self.identity)
            .field("password", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[async_trait]
impl CredentialProvider for PasswordCredentials {
    async fn authenticate(&self) -> ClientResult<Box<dyn Session>> {
        let client = self.build_client()?;
        let login_url = self
            .base_url
            .join(LOGIN_PATH)
            .map_err(|e| ClientError::invalid(format!("invalid login URL: {e}")))?;

        debug!(identity = %self.identity, url = %login_url, "logging in");

        let response = client
            .post(login_url)
            .form(&[
                ("identity", self.identity.as_str()),
                ("password", self.password.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ClientError::authentication(format!("login request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::authentication(format!("failed to read login response: {e}")))?;

        if !status.is_success() {
            warn!(identity = %self.identity, status = status.as_u16(), "login rejected");
            return Err(ClientError::authentication(format!(
                "login returned HTTP {}",
                status.as_u16()
            )));
        }

        if login_failed(&body) {
            warn!(identity = %self.identity, "login rejected");
            return Err(ClientError::authentication(
                "login rejected: check identity and password",
            ));
        }

        info!(identity = %self.identity, "authenticated");
        Ok(Box::new(HttpSession {
            client,
            base_url: self.base_url.clone(),
        }))
    }
}

/// Space-Track answers a bad login with HTTP 200 and `{"Login":"Failed"}`.
fn login_failed(body: &str) -> bool {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => json
            .get("Login")
            .and_then(|v| v.as_str())
            .is_some_and(|v| v.eq_ignore_ascii_case("failed")),
        Err(_) => false,
    }
}

/// A logged-in reqwest client; the login cookie lives in its cookie store.
pub struct HttpSession {
    client: reqwest::Client,
    base_url: Url,
}

#[async_trait]
impl Session for HttpSession {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get(&self, url: Url) -> ClientResult<HttpResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}
