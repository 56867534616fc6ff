//! Role-based access control for Axum applications
//!
//! Requests are expected to carry an enriched [`Identity`] in their
//! extensions, inserted by the application's authentication layer after
//! calling [`AuthorizationService::enrich`](crate::AuthorizationService::enrich).
//!
//! # Example
//!
//! ```ignore
//! use axum::{routing::get, Router};
//! use baat_authz::auth::RequireRole;
//! use baat_authz::roles;
//!
//! let app = Router::new()
//!     .route("/metadata/admin", get(admin_handler))
//!     .layer(RequireRole::new(vec![roles::METADATA_ADMIN.to_string()]));
//! ```

pub mod error;
pub mod middleware;

pub use error::AuthorizationError;
pub use middleware::RequireRole;

pub use crate::identity::Identity;
