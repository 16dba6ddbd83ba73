//! Authentication and session abstraction.
//!
//! The query engine never talks to the network directly. It asks a
//! [`CredentialProvider`] for a [`Session`] and issues its single GET through
//! that session:
//!
//! ```text
//! ┌──────────────┐  authenticate()  ┌────────────────────┐
//! │ Query engine │ ───────────────▶ │ CredentialProvider │
//! └──────────────┘                  └────────────────────┘
//!        │                                   │ login round trip(s)
//!        │ get(url)                          ▼
//!        └──────────────────────────▶  ┌─────────┐
//!                                      │ Session │ ──▶ Space-Track
//!                                      └─────────┘
//! ```
//!
//! [`PasswordCredentials`] is the production provider: it logs in with an
//! identity/password pair and returns an [`HttpSession`] holding the login
//! cookie. Tests substitute their own provider to serve canned responses.

mod password;

pub use password::{HttpSession, PasswordCredentials, DEFAULT_BASE_URL};

use async_trait::async_trait;
use reqwest::Url;

use crate::error::ClientResult;

/// Status and body of one HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Check for a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Supplies an authenticated session.
///
/// Implementations own any session caching they choose to do, and the
/// thread safety of that cache. Failures must surface as
/// [`ClientError::Authentication`](crate::ClientError::Authentication) so
/// callers can tell a rejected login from a failed data request.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Log in and return a session usable for subsequent requests.
    async fn authenticate(&self) -> ClientResult<Box<dyn Session>>;
}

/// An authenticated connection to the API.
#[async_trait]
pub trait Session: Send + Sync {
    /// Root URL that request paths are appended to.
    fn base_url(&self) -> &Url;

    /// Issue one GET. Non-success statuses are returned, not raised.
    async fn get(&self, url: Url) -> ClientResult<HttpResponse>;
}
