//! Configuration for the client and CLI.
//!
//! Handles credentials from environment variables and TOML settings.

mod credentials;
mod settings;

pub use credentials::{
    CredentialConfig, CredentialError, BASE_URL_VAR, IDENTITY_VAR, PASSWORD_VAR,
};
pub use settings::{
    expand_env_vars, ClientSettings, CredentialSettings, Settings, SettingsError, CONFIG_VAR,
};
