//! OAuth 2.0 token introspection
//!
//! Resolves an opaque bearer token to the username it was issued for.

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::Deserialize;
use tracing;

use crate::config::IntrospectionConfig;
use crate::error::{AuthzError, Result};

/// Introspection endpoint response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntrospectionResponse {
    /// Whether the token is currently active
    #[serde(default)]
    pub active: bool,
    /// Username the token was issued for
    #[serde(default)]
    pub username: Option<String>,
}

impl IntrospectionResponse {
    /// Username of an active token
    pub fn active_username(self) -> Option<String> {
        if self.active {
            self.username
        } else {
            None
        }
    }
}

/// Client for a token introspection endpoint
#[derive(Clone)]
pub struct IntrospectionClient {
    /// HTTP client
    http_client: Client,
    config: IntrospectionConfig,
}

impl IntrospectionClient {
    /// Create a client with its own connection pool
    pub fn new(config: IntrospectionConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    /// Create a client sharing an existing connection pool
    pub fn with_http_client(http_client: Client, config: IntrospectionConfig) -> Self {
        Self { http_client, config }
    }

    /// Create a client from configuration, applying the configured timeout
    pub fn from_config(config: IntrospectionConfig) -> Result<Self> {
        let http_client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self::with_http_client(http_client, config))
    }

    /// Resolve `token` to a username.
    ///
    /// A leading `Bearer ` is stripped. Returns `None` when the token is not
    /// active, carries no username, or the endpoint could not be used.
    pub async fn introspect(&self, token: &str) -> Option<String> {
        match self.request(token).await {
            Ok(response) => {
                let username = response.active_username();
                if username.is_none() {
                    tracing::error!("Token introspection returned an inactive token or no username");
                }
                username
            }
            Err(e) => {
                tracing::error!("Token introspection failed: {}", e);
                None
            }
        }
    }

    async fn request(&self, token: &str) -> Result<IntrospectionResponse> {
        let url = self.config.url.as_deref().ok_or_else(|| {
            AuthzError::Config("Introspection URL is not configured".to_string())
        })?;

        let token = token.strip_prefix("Bearer ").unwrap_or(token);
        let params = [
            ("token", token),
            ("client_id", self.config.client_id.as_deref().unwrap_or_default()),
            ("client_secret", self.config.client_secret.as_deref().unwrap_or_default()),
        ];

        tracing::debug!("Introspecting token at {}", url);

        let response = self
            .http_client
            .post(url)
            .header(ACCEPT, "application/json")
            .form(&params)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
