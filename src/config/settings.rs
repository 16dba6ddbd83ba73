//! TOML-based configuration for the Space-Track client.
//!
//! Supports a config file (spacetrack.toml) with environment variable expansion.
//!
//! Example configuration:
//! ```toml
//! [client]
//! base_url = "https://www.space-track.org/"
//! timeout_secs = 30
//! user_agent = "my-tracker/1.0"
//!
//! [credentials]
//! identity = "${SPACETRACK_IDENTITY}"
//! password = "${SPACETRACK_PASSWORD}"
//! ```
//!
//! Without a `[credentials]` section the identity and password are read from
//! the environment (see [`CredentialConfig::from_env`]).

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::credentials::{CredentialConfig, CredentialError};
use crate::auth::{PasswordCredentials, DEFAULT_BASE_URL};

/// Environment variable naming an explicit config file.
pub const CONFIG_VAR: &str = "SPACETRACK_CONFIG";

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error(transparent)]
    Credentials(#[from] CredentialError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP client settings.
    pub client: ClientSettings,

    /// Login credentials (values support ${ENV_VAR} expansion).
    pub credentials: Option<CredentialSettings>,
}

/// HTTP client settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientSettings {
    /// API root URL.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,

    pub user_agent: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl ClientSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Get the base URL with environment variables expanded.
    pub fn resolved_base_url(&self) -> Result<String, SettingsError> {
        expand_env_vars(&self.base_url)
    }
}

/// Credentials section.
#[derive(Clone, Deserialize, Serialize)]
pub struct CredentialSettings {
    pub identity: String,
    pub password: String,
}

impl CredentialSettings {
    /// Expand environment variables in both values.
    pub fn resolve(&self) -> Result<CredentialConfig, SettingsError> {
        Ok(CredentialConfig::new(
            expand_env_vars(&self.identity)?,
            expand_env_vars(&self.password)?,
        ))
    }
}

impl fmt::Debug for CredentialSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialSettings")
            .field("identity", &self.identity)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `SPACETRACK_CONFIG`
    /// 2. `./spacetrack.toml`
    /// 3. `~/.config/spacetrack/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var(CONFIG_VAR) {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("spacetrack.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("spacetrack").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }

    /// Resolve credentials: the `[credentials]` section if present, the
    /// environment otherwise.
    pub fn credential_config(&self) -> Result<CredentialConfig, SettingsError> {
        match &self.credentials {
            Some(section) => {
                let mut config = section.resolve()?;
                config.base_url = Some(self.client.resolved_base_url()?);
                Ok(config)
            }
            None => {
                let mut config = CredentialConfig::from_env()?;
                if config.base_url.is_none() {
                    config.base_url = Some(self.client.resolved_base_url()?);
                }
                Ok(config)
            }
        }
    }

    /// Build the login provider described by these settings.
    pub fn provider(&self) -> Result<PasswordCredentials, SettingsError> {
        let config = self.credential_config()?;
        Ok(config.into_provider(self.client.timeout(), self.client.user_agent.clone())?)
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    expand_with(s, |name| env::var(name).ok())
}

fn expand_with(s: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<String, SettingsError> {
    let resolve = |name: &str| lookup(name).ok_or_else(|| SettingsError::MissingEnvVar(name.to_string()));

    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        let mut var_name = String::new();
        if chars.peek() == Some(&'{') {
            chars.next();
            let mut closed = false;
            for ch in chars.by_ref() {
                if ch == '}' {
                    closed = true;
                    break;
                }
                var_name.push(ch);
            }
            if !closed {
                return Err(SettingsError::InvalidConfig(format!(
                    "unterminated variable reference in {s:?}"
                )));
            }
            result.push_str(&resolve(&var_name)?);
        } else {
            // $VAR ends at the first non-alphanumeric/underscore
            while let Some(&ch) = chars.peek() {
                if !(ch.is_alphanumeric() || ch == '_') {
                    break;
                }
                var_name.push(ch);
                chars.next();
            }
            if var_name.is_empty() {
                result.push('$');
            } else {
                result.push_str(&resolve(&var_name)?);
            }
        }
    }

    Ok(result)
}
