//! Authenticated identity and claim accessors

use serde::{Deserialize, Serialize};

use crate::claims::{Claim, ClaimType};
use crate::roles;

/// An authenticated user's ordered claim list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    claims: Vec<Claim>,
}

impl Identity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity carrying only the upstream username claim
    pub fn from_username(username: impl Into<String>) -> Self {
        Self::with_claims(vec![Claim::new(ClaimType::Username, username)])
    }

    pub fn with_claims(claims: Vec<Claim>) -> Self {
        Self { claims }
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn add_claim(&mut self, claim: Claim) {
        self.claims.push(claim);
    }

    pub fn add_claims<I: IntoIterator<Item = Claim>>(&mut self, claims: I) {
        self.claims.extend(claims);
    }

    /// First claim of the given type
    pub fn find_first(&self, claim_type: ClaimType) -> Option<&Claim> {
        self.claims.iter().find(|c| c.claim_type == claim_type)
    }

    fn first_value(&self, claim_type: ClaimType) -> Option<&str> {
        self.find_first(claim_type).and_then(Claim::value)
    }

    pub fn username(&self) -> Option<&str> {
        self.first_value(ClaimType::Username)
    }

    pub fn email(&self) -> Option<&str> {
        self.first_value(ClaimType::Email)
    }

    pub fn full_name(&self) -> Option<&str> {
        self.first_value(ClaimType::Name)
    }

    pub fn organization_name(&self) -> Option<&str> {
        self.first_value(ClaimType::OrganizationName)
    }

    pub fn organization_orgnr(&self) -> Option<&str> {
        self.first_value(ClaimType::OrganizationOrgnr)
    }

    /// All role values in claim order
    pub fn roles(&self) -> Vec<&str> {
        self.claims
            .iter()
            .filter(|c| c.claim_type == ClaimType::Role)
            .filter_map(Claim::value)
            .collect()
    }

    pub fn is_in_role(&self, role: &str) -> bool {
        self.roles().contains(&role)
    }

    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        roles.iter().any(|role| self.is_in_role(role))
    }

    pub fn has_metadata_admin_role(&self) -> bool {
        self.is_in_role(roles::METADATA_ADMIN)
    }

    pub fn has_metadata_editor_role(&self) -> bool {
        self.is_in_role(roles::METADATA_EDITOR)
    }

    pub fn has_metadata_manager_role(&self) -> bool {
        self.is_in_role(roles::METADATA_MANAGER)
    }
}
