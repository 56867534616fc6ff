//! Axum integration
//!
//! This module provides utilities for integrating claims enrichment with the Axum web framework:
//! - Bearer token extraction from request headers, for use with token introspection
//! - `FromRequestParts` extractor for an enriched `Identity`
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::{routing::get, Router};
//! use baat_authz::axum_integration::IdentityExtractor;
//!
//! async fn profile(identity: IdentityExtractor) -> String {
//!     format!("Hello, {}!", identity.full_name().unwrap_or_default())
//! }
//!
//! let app = Router::new().route("/profile", get(profile));
//! ```

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, StatusCode},
};
use std::ops::Deref;

use crate::identity::Identity;

/// Extract Bearer token from Authorization header
///
/// # Example
///
/// ```rust,ignore
/// use axum::http::HeaderMap;
/// use baat_authz::axum_integration::extract_bearer_token;
///
/// let mut headers = HeaderMap::new();
/// headers.insert("Authorization", "Bearer my-token".parse().unwrap());
///
/// let token = extract_bearer_token(&headers);
/// assert_eq!(token, Some("my-token".to_string()));
/// ```
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer ").map(|s| s.to_string()))
}

/// Axum extractor for the enriched identity.
///
/// The `Identity` must be inserted into the request extensions by the
/// application's authentication layer.
#[derive(Debug, Clone)]
pub struct IdentityExtractor(pub Identity);

impl Deref for IdentityExtractor {
    type Target = Identity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Identity> for IdentityExtractor {
    fn from(identity: Identity) -> Self {
        Self(identity)
    }
}

impl IdentityExtractor {
    pub fn into_inner(self) -> Identity {
        self.0
    }
}

impl<S> FromRequestParts<S> for IdentityExtractor
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(IdentityExtractor)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
