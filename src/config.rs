//! Configuration loading
//!
//! Settings are read from a TOML file with an optional `[baat]` section for
//! the authorization service and an optional `[introspection]` section for
//! token introspection.
//!
//! # Example
//!
//! ```rust,ignore
//! use baat_authz::config::load_config;
//!
//! let config = load_config("authz.toml")?;
//! let client = baat_authz::BaatAuthzClient::from_config(&config.baat_config()?)?;
//! ```

use crate::{AuthzError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Request timeout used when a section does not set `timeout_secs`
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthzConfig {
    /// BAAT authorization service section
    #[serde(default)]
    pub baat: Option<BaatConfig>,

    /// Token introspection section
    #[serde(default)]
    pub introspection: Option<IntrospectionConfig>,
}

impl AuthzConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_config(path)
    }

    /// Get the BAAT section
    pub fn baat_config(&self) -> Result<BaatConfig> {
        self.baat.clone().ok_or_else(|| {
            AuthzError::Config("BAAT configuration not found in config file".to_string())
        })
    }

    /// Get the introspection section. A missing section yields empty settings
    /// so callers that never introspect are unaffected.
    pub fn introspection_config(&self) -> IntrospectionConfig {
        self.introspection.clone().unwrap_or_default()
    }
}

/// BAAT authorization service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaatConfig {
    /// Base URL of the authorization API, e.g. `https://baat.example.com/authzapi/`
    pub api_url: String,

    /// Basic auth credentials as `username:password`
    pub api_credentials: String,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl BaatConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

/// Token introspection settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntrospectionConfig {
    /// Introspection endpoint URL
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub client_id: Option<String>,

    #[serde(default)]
    pub client_secret: Option<String>,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl IntrospectionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

/// Load configuration from a TOML file
///
/// # Example
///
/// ```rust,ignore
/// let config = baat_authz::config::load_config("authz.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AuthzConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| AuthzError::Config(format!("Failed to read config file: {}", e)))?;

    toml::from_str(&content)
        .map_err(|e| AuthzError::Config(format!("Failed to parse TOML config: {}", e)))
}
