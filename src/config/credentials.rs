//! Credentials from the environment.
//!
//! - `SPACETRACK_IDENTITY`: account identity (the login e-mail)
//! - `SPACETRACK_PASSWORD`: account password
//! - `SPACETRACK_BASE_URL`: API root (optional, defaults to production)

use std::env;
use std::fmt;
use std::time::Duration;

use crate::auth::PasswordCredentials;

pub const IDENTITY_VAR: &str = "SPACETRACK_IDENTITY";
pub const PASSWORD_VAR: &str = "SPACETRACK_PASSWORD";
pub const BASE_URL_VAR: &str = "SPACETRACK_BASE_URL";

/// Error type for credential configuration.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Identity/password pair plus the optional API root to log in against.
#[derive(Clone)]
pub struct CredentialConfig {
    pub identity: String,
    pub password: String,
    pub base_url: Option<String>,
}

impl CredentialConfig {
    pub fn new(identity: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            password: password.into(),
            base_url: None,
        }
    }

    /// Load from `SPACETRACK_IDENTITY`, `SPACETRACK_PASSWORD` and
    /// `SPACETRACK_BASE_URL`.
    pub fn from_env() -> Result<Self, CredentialError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CredentialError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let identity =
            get(IDENTITY_VAR).ok_or_else(|| CredentialError::MissingEnvVar(IDENTITY_VAR.to_string()))?;
        let password =
            get(PASSWORD_VAR).ok_or_else(|| CredentialError::MissingEnvVar(PASSWORD_VAR.to_string()))?;

        Ok(Self {
            identity,
            password,
            base_url: get(BASE_URL_VAR),
        })
    }

    /// Build the login provider.
    pub fn into_provider(
        self,
        timeout: Option<Duration>,
        user_agent: Option<String>,
    ) -> Result<PasswordCredentials, CredentialError> {
        if self.identity.trim().is_empty() {
            return Err(CredentialError::InvalidConfig("identity is empty".to_string()));
        }

        let mut provider = PasswordCredentials::new(self.identity, self.password);
        if let Some(url) = &self.base_url {
            provider = provider
                .with_base_url(url)
                .map_err(|e| CredentialError::InvalidConfig(e.to_string()))?;
        }
        if let Some(timeout) = timeout {
            provider = provider.with_timeout(timeout);
        }
        if let Some(agent) = user_agent {
            provider = provider.with_user_agent(agent);
        }
        Ok(provider)
    }
}

impl fmt::Debug for CredentialConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialConfig")
            .field("identity", &self.identity)
            .field("password", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
