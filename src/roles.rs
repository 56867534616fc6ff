//! Well-known role identifiers. Use these instead of string literals.

/// Only services starting with this prefix become role claims
pub const ROLE_PREFIX: &str = "nd.";

pub const METADATA_ADMIN: &str = "nd.metadata_admin";
pub const METADATA_EDITOR: &str = "nd.metadata_editor";
pub const DOK_ADMIN: &str = "nd.dok_admin";
pub const DOK_EDITOR: &str = "nd.dok_editor";
pub const METADATA_MANAGER: &str = "nd.metadata_forvalter";

/// Whether a service identifier from the authorization service is a role
pub fn is_role(service: &str) -> bool {
    service.starts_with(ROLE_PREFIX)
}
