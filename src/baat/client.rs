//! HTTP client for the BAAT authorization API

use async_trait::async_trait;
use base64::Engine;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing;

use crate::config::BaatConfig;
use crate::error::Result;
use super::types::{Lookup, UserInfoResponse, UserRolesResponse};

/// Read access to the authorization service.
///
/// Implementations are expected to degrade to `Lookup::Empty` on remote
/// failures. An `Err` is treated by `AuthorizationService` as fatal for the
/// request.
#[async_trait]
pub trait AuthzApi: Send + Sync {
    /// Returns information about a user, e.g. name and organization
    async fn info(&self, username: &str) -> Result<Lookup<UserInfoResponse>>;

    /// Returns the services (roles) granted to a user
    async fn roles(&self, username: &str) -> Result<Lookup<UserRolesResponse>>;
}

#[async_trait]
impl<T: AuthzApi + ?Sized> AuthzApi for std::sync::Arc<T> {
    async fn info(&self, username: &str) -> Result<Lookup<UserInfoResponse>> {
        (**self).info(username).await
    }

    async fn roles(&self, username: &str) -> Result<Lookup<UserRolesResponse>> {
        (**self).roles(username).await
    }
}

/// `AuthzApi` over HTTP with basic authentication
#[derive(Clone)]
pub struct BaatAuthzClient {
    /// HTTP client
    http_client: Client,
    /// Base URL of the API
    api_url: String,
    /// Precomputed `Authorization` header value
    authorization: String,
}

impl BaatAuthzClient {
    /// Create a client with its own connection pool
    pub fn new(api_url: impl Into<String>, api_credentials: &str) -> Self {
        Self::with_http_client(Client::new(), api_url, api_credentials)
    }

    /// Create a client sharing an existing connection pool
    pub fn with_http_client(
        http_client: Client,
        api_url: impl Into<String>,
        api_credentials: &str,
    ) -> Self {
        use base64::engine::general_purpose::STANDARD;

        Self {
            http_client,
            api_url: api_url.into(),
            authorization: format!("Basic {}", STANDARD.encode(api_credentials)),
        }
    }

    /// Create a client from configuration, applying the configured timeout
    pub fn from_config(config: &BaatConfig) -> Result<Self> {
        let http_client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self::with_http_client(
            http_client,
            config.api_url.clone(),
            &config.api_credentials,
        ))
    }

    /// URL for `endpoint` and `username`, with exactly one `/` after the base URL
    pub fn endpoint_url(&self, endpoint: &str, username: &str) -> String {
        format!(
            "{}/{}/{}",
            self.api_url.trim_end_matches('/'),
            endpoint,
            urlencoding::encode(username)
        )
    }

    async fn send(&self, url: &str) -> reqwest::Result<Response> {
        self.http_client
            .get(url)
            .header(AUTHORIZATION, &self.authorization)
            .header(ACCEPT, "application/json")
            .send()
            .await
    }

    /// Turn a response into a lookup result. Every failure becomes `Lookup::Empty`.
    async fn read_body<T: DeserializeOwned>(
        response: reqwest::Result<Response>,
        username: &str,
    ) -> Lookup<T> {
        let response = match response {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Looking up {} from BaatAuthzApi failed: {}", username, e);
                return Lookup::Empty;
            }
        };

        if !response.status().is_success() {
            tracing::error!(
                "Looking up {} from BaatAuthzApi failed with status code: {}",
                username,
                response.status()
            );
            return Lookup::Empty;
        }

        let json = match response.text().await {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to read BaatAuthzApi response for {}: {}", username, e);
                return Lookup::Empty;
            }
        };

        tracing::debug!("Response from BaatAuthzApi: {}", json);

        match serde_json::from_str(&json) {
            Ok(body) => Lookup::Found(body),
            Err(e) => {
                tracing::error!("Failed to parse BaatAuthzApi response for {}: {}", username, e);
                Lookup::Empty
            }
        }
    }
}

#[async_trait]
impl AuthzApi for BaatAuthzClient {
    async fn info(&self, username: &str) -> Result<Lookup<UserInfoResponse>> {
        let url = self.endpoint_url("authzinfo", username);
        tracing::debug!("Fetching data from {}", url);

        let response = self.send(&url).await;
        Ok(Self::read_body(response, username).await)
    }

    async fn roles(&self, username: &str) -> Result<Lookup<UserRolesResponse>> {
        let url = self.endpoint_url("authzlist", username);
        tracing::debug!("Fetching data from {}", url);

        let started = Instant::now();
        let response = self.send(&url).await;
        let elapsed = started.elapsed().as_millis();

        match &response {
            Ok(r) => tracing::info!(
                "Http call to {} with response code {} executed in {} ms",
                url,
                r.status(),
                elapsed
            ),
            Err(_) => tracing::info!("Http call to {} failed after {} ms", url, elapsed),
        }

        Ok(Self::read_body(response, username).await)
    }
}
