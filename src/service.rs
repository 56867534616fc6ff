//! Claims enrichment against the authorization service

use tracing;

use crate::baat::client::AuthzApi;
use crate::claims::{build_claims, Claim};
use crate::error::{AuthzError, Result};
use crate::identity::Identity;
use crate::introspection::IntrospectionClient;

/// Retrieves claims for users from the BAAT authorization service
#[derive(Debug, Clone)]
pub struct AuthorizationService<A> {
    api: A,
}

impl<A: AuthzApi> AuthorizationService<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Claims for the user named by the identity's username claim
    pub async fn get_claims(&self, identity: &Identity) -> Result<Vec<Claim>> {
        let username = identity.username().ok_or(AuthzError::MissingUsername)?;
        self.claims_for_username(username).await
    }

    /// Fetch user info and roles concurrently and map them to claims.
    ///
    /// An error raised by the client fails the whole call; `Lookup::Empty`
    /// results do not.
    pub async fn claims_for_username(&self, username: &str) -> Result<Vec<Claim>> {
        let (info, roles) = tokio::join!(self.api.info(username), self.api.roles(username));

        let info = info.map_err(AuthzError::communication)?;
        let roles = roles.map_err(AuthzError::communication)?;

        let claims = build_claims(&info, &roles);
        tracing::debug!("Built {} claims for {}", claims.len(), username);
        Ok(claims)
    }

    /// Append the user's claims to `identity`
    pub async fn enrich(&self, identity: &mut Identity) -> Result<()> {
        let claims = self.get_claims(identity).await?;
        identity.add_claims(claims);
        Ok(())
    }

    /// Build an enriched identity from a bearer token.
    ///
    /// Returns `Ok(None)` when the token does not resolve to a username.
    pub async fn enrich_bearer_token(
        &self,
        introspection: &IntrospectionClient,
        token: &str,
    ) -> Result<Option<Identity>> {
        let Some(username) = introspection.introspect(token).await else {
            return Ok(None);
        };

        let mut identity = Identity::from_username(username);
        self.enrich(&mut identity).await?;
        Ok(Some(identity))
    }
}
