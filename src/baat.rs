//! BAAT authorization service client
//!
//! Response types for the `authzinfo` and `authzlist` endpoints and an
//! HTTP client that fetches them with basic authentication.

pub mod types;
pub mod client;

pub use types::*;
pub use client::*;
