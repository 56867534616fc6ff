//! # baat-authz
//!
//! Enriches an authenticated identity with authorization claims from the
//! BAAT authorization service.
//!
//! Given a username (taken from an upstream identity, or resolved from a
//! bearer token through token introspection) the service fetches user
//! information and the user's role list, and maps them to an ordered list of
//! claims: name, email, authorization window, organization details and the
//! `nd.`-prefixed roles.
//!
//! ## Features
//!
//! - `axum` (default): bearer token extraction, an `Identity` extractor and a
//!   `RequireRole` tower layer
//!
//! # Example
//!
//! ```rust,ignore
//! use baat_authz::{AuthorizationService, BaatAuthzClient, Identity};
//!
//! let config = baat_authz::config::load_config("authz.toml")?;
//! let service = AuthorizationService::new(BaatAuthzClient::from_config(&config.baat_config()?)?);
//!
//! let mut identity = Identity::from_username("johndoe");
//! service.enrich(&mut identity).await?;
//! ```

pub mod error;
pub use error::{AuthzError, Result};

pub mod baat;
pub mod claims;
pub mod config;
pub mod identity;
pub mod introspection;
pub mod roles;
pub mod service;

#[cfg(feature = "axum")]
pub mod auth;

#[cfg(feature = "axum")]
pub mod axum_integration;

#[cfg(test)]
mod test_support;

// Re-export commonly used types at crate root
pub use crate::baat::{AuthzApi, BaatAuthzClient, Lookup, Organization, UserInfoResponse, UserRolesResponse};
pub use crate::claims::{build_claims, Claim, ClaimType};
pub use crate::config::{AuthzConfig, BaatConfig, IntrospectionConfig};
pub use crate::identity::Identity;
pub use crate::introspection::IntrospectionClient;
pub use crate::service::AuthorizationService;
