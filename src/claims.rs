//! Claim types and the mapping from authorization responses to claims

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing;

use crate::baat::types::{Lookup, UserInfoResponse, UserRolesResponse};
use crate::roles;

/// Kind of fact a claim carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimType {
    /// Upstream name identifier; read by the service, never produced by the mapper
    #[serde(rename = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier")]
    Username,
    Name,
    Email,
    AuthorizedFrom,
    AuthorizedUntil,
    OrganizationName,
    OrganizationOrgnr,
    OrganizationContactName,
    OrganizationContactEmail,
    OrganizationContactPhone,
    #[serde(rename = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role")]
    Role,
}

impl ClaimType {
    /// Wire name of the claim type
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Username => {
                "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier"
            }
            ClaimType::Name => "Name",
            ClaimType::Email => "Email",
            ClaimType::AuthorizedFrom => "AuthorizedFrom",
            ClaimType::AuthorizedUntil => "AuthorizedUntil",
            ClaimType::OrganizationName => "OrganizationName",
            ClaimType::OrganizationOrgnr => "OrganizationOrgnr",
            ClaimType::OrganizationContactName => "OrganizationContactName",
            ClaimType::OrganizationContactEmail => "OrganizationContactEmail",
            ClaimType::OrganizationContactPhone => "OrganizationContactPhone",
            ClaimType::Role => "http://schemas.microsoft.com/ws/2008/06/identity/claims/role",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed fact about an identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub claim_type: ClaimType,
    /// `None` only for organization fields the service left out
    pub value: Option<String>,
}

impl Claim {
    pub fn new(claim_type: ClaimType, value: impl Into<String>) -> Self {
        Self {
            claim_type,
            value: Some(value.into()),
        }
    }

    pub fn optional(claim_type: ClaimType, value: Option<String>) -> Self {
        Self { claim_type, value }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Map user info and roles to claims.
///
/// Produces nothing when `user_info` is `Empty`. Otherwise the list holds,
/// in order: name, email and the authorization window; the five
/// organization claims when an organization is present; one role claim per
/// service carrying the `nd.` prefix, in service order.
pub fn build_claims(
    user_info: &Lookup<UserInfoResponse>,
    user_roles: &Lookup<UserRolesResponse>,
) -> Vec<Claim> {
    let info = match user_info {
        Lookup::Found(info) => info,
        Lookup::Empty => {
            tracing::warn!("Empty response from authorization service - no claims appended to user");
            return Vec::new();
        }
    };

    let mut claims = vec![
        Claim::new(ClaimType::Name, info.name.clone().unwrap_or_default()),
        Claim::optional(ClaimType::Email, info.email.clone()),
        Claim::new(ClaimType::AuthorizedFrom, info.authorized_from.clone()),
        Claim::new(ClaimType::AuthorizedUntil, info.authorized_until.clone()),
    ];

    if let Some(org) = &info.organization {
        claims.extend([
            Claim::optional(ClaimType::OrganizationName, org.name.clone()),
            Claim::optional(ClaimType::OrganizationOrgnr, org.orgnr.clone()),
            Claim::optional(ClaimType::OrganizationContactName, org.contact_name.clone()),
            Claim::optional(ClaimType::OrganizationContactEmail, org.contact_email.clone()),
            Claim::optional(ClaimType::OrganizationContactPhone, org.contact_phone.clone()),
        ]);
    }

    if let Lookup::Found(user_roles) = user_roles {
        claims.extend(
            user_roles
                .services
                .iter()
                .filter(|service| roles::is_role(service))
                .map(|service| Claim::new(ClaimType::Role, service.clone())),
        );
    }

    claims
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baat::types::Organization;

    fn john_doe() -> UserInfoResponse {
        UserInfoResponse {
            user: Some("johndoe".to_string()),
            organization: None,
            name: Some("John Doe".to_string()),
            email: Some("johndoe@example.com".to_string()),
            authorized_from: "20090101".to_string(),
            authorized_until: "20301231".to_string(),
        }
    }

    fn my_company() -> Organization {
        Organization {
            name: Some("My Company".to_string()),
            orgnr: Some("99887766".to_string()),
            contact_name: Some("Jane Doe".to_string()),
            contact_email: None,
            contact_phone: Some("12345678".to_string()),
        }
    }

    fn value_of(claims: &[Claim], claim_type: ClaimType) -> Option<&str> {
        claims
            .iter()
            .find(|c| c.claim_type == claim_type)
            .and_then(|c| c.value())
    }

    fn role_values(claims: &[Claim]) -> Vec<&str> {
        claims
            .iter()
            .filter(|c| c.claim_type == ClaimType::Role)
            .filter_map(|c| c.value())
            .collect()
    }

    #[test]
    fn test_claims_for_user_with_roles() {
        let roles = UserRolesResponse::new([roles::METADATA_ADMIN, roles::METADATA_EDITOR]);
        let claims = build_claims(&Lookup::Found(john_doe()), &Lookup::Found(roles));

        assert_eq!(value_of(&claims, ClaimType::Name), Some("John Doe"));
        assert_eq!(value_of(&claims, ClaimType::Email), Some("johndoe@example.com"));
        assert_eq!(value_of(&claims, ClaimType::AuthorizedFrom), Some("20090101"));
        assert_eq!(value_of(&claims, ClaimType::AuthorizedUntil), Some("20301231"));
        assert_eq!(
            role_values(&claims),
            vec!["nd.metadata_admin", "nd.metadata_editor"]
        );
        assert_eq!(claims.len(), 6);
    }

    #[test]
    fn test_claims_for_user_without_roles() {
        let claims = build_claims(
            &Lookup::Found(john_doe()),
            &Lookup::Found(UserRolesResponse::default()),
        );

        assert_eq!(claims.len(), 4);
        assert_eq!(value_of(&claims, ClaimType::Name), Some("John Doe"));
        assert!(role_values(&claims).is_empty());
    }

    #[test]
    fn test_empty_user_info_yields_no_claims() {
        let roles = UserRolesResponse::new([roles::METADATA_ADMIN]);
        assert!(build_claims(&Lookup::Empty, &Lookup::Found(roles)).is_empty());
        assert!(build_claims(&Lookup::Empty, &Lookup::Empty).is_empty());
    }

    #[test]
    fn test_missing_name_becomes_empty_string() {
        let mut info = john_doe();
        info.name = None;
        let claims = build_claims(&Lookup::Found(info), &Lookup::Empty);

        let name = claims.iter().find(|c| c.claim_type == ClaimType::Name).unwrap();
        assert_eq!(name.value, Some(String::new()));
    }

    #[test]
    fn test_blank_authorization_window_is_kept() {
        let info = UserInfoResponse {
            user: Some("johndoe".to_string()),
            ..Default::default()
        };
        let claims = build_claims(&Lookup::Found(info), &Lookup::Empty);

        assert_eq!(claims.len(), 4);
        assert_eq!(value_of(&claims, ClaimType::AuthorizedFrom), Some(""));
        assert_eq!(value_of(&claims, ClaimType::AuthorizedUntil), Some(""));
        assert_eq!(claims[1].claim_type, ClaimType::Email);
        assert_eq!(claims[1].value, None);
    }

    #[test]
    fn test_organization_claims() {
        let mut info = john_doe();
        info.organization = Some(my_company());
        let claims = build_claims(&Lookup::Found(info), &Lookup::Empty);

        assert_eq!(claims.len(), 9);
        assert_eq!(value_of(&claims, ClaimType::OrganizationName), Some("My Company"));
        assert_eq!(value_of(&claims, ClaimType::OrganizationOrgnr), Some("99887766"));
        assert_eq!(value_of(&claims, ClaimType::OrganizationContactName), Some("Jane Doe"));
        assert_eq!(value_of(&claims, ClaimType::OrganizationContactPhone), Some("12345678"));

        let contact_email = claims
            .iter()
            .find(|c| c.claim_type == ClaimType::OrganizationContactEmail)
            .unwrap();
        assert_eq!(contact_email.value, None);
    }

    #[test]
    fn test_no_organization_claims_without_organization() {
        let claims = build_claims(&Lookup::Found(john_doe()), &Lookup::Empty);
        assert!(claims.iter().all(|c| !matches!(
            c.claim_type,
            ClaimType::OrganizationName
                | ClaimType::OrganizationOrgnr
                | ClaimType::OrganizationContactName
                | ClaimType::OrganizationContactEmail
                | ClaimType::OrganizationContactPhone
        )));
    }

    #[test]
    fn test_roles_without_prefix_are_filtered() {
        let roles = UserRolesResponse::new(["nd.metadata_admin", "other.role"]);
        let claims = build_claims(&Lookup::Found(john_doe()), &Lookup::Found(roles));

        assert_eq!(role_values(&claims), vec!["nd.metadata_admin"]);
    }

    #[test]
    fn test_roles_keep_order_and_duplicates() {
        let roles = UserRolesResponse::new(["nd.b", "x.a", "nd.a", "nd.b"]);
        let claims = build_claims(&Lookup::Found(john_doe()), &Lookup::Found(roles));

        assert_eq!(role_values(&claims), vec!["nd.b", "nd.a", "nd.b"]);
    }

    #[test]
    fn test_claim_order() {
        let mut info = john_doe();
        info.organization = Some(my_company());
        let roles = UserRolesResponse::new([roles::DOK_EDITOR]);
        let claims = build_claims(&Lookup::Found(info), &Lookup::Found(roles));

        let types: Vec<ClaimType> = claims.iter().map(|c| c.claim_type).collect();
        assert_eq!(
            types,
            vec![
                ClaimType::Name,
                ClaimType::Email,
                ClaimType::AuthorizedFrom,
                ClaimType::AuthorizedUntil,
                ClaimType::OrganizationName,
                ClaimType::OrganizationOrgnr,
                ClaimType::OrganizationContactName,
                ClaimType::OrganizationContactEmail,
                ClaimType::OrganizationContactPhone,
                ClaimType::Role,
            ]
        );
    }

    #[test]
    fn test_claim_type_wire_names() {
        assert_eq!(ClaimType::Name.as_str(), "Name");
        assert_eq!(ClaimType::OrganizationOrgnr.to_string(), "OrganizationOrgnr");
        assert_eq!(
            ClaimType::Role.as_str(),
            "http://schemas.microsoft.com/ws/2008/06/identity/claims/role"
        );
        assert_eq!(
            serde_json::to_string(&ClaimType::Role).unwrap(),
            "\"http://schemas.microsoft.com/ws/2008/06/identity/claims/role\""
        );
    }
}
