//! Error types for authorization lookups

/// Crate error type
#[derive(Debug, thiserror::Error)]
pub enum AuthzError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Raised when an `AuthzApi` implementation fails instead of degrading to `Lookup::Empty`
    #[error("Error while communicating with authorization service: {0}")]
    Communication(#[source] Box<AuthzError>),

    #[error("Identity has no username claim")]
    MissingUsername,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AuthzError>;

impl AuthzError {
    /// Wrap a client failure as a communication error
    pub fn communication(cause: AuthzError) -> Self {
        AuthzError::Communication(Box::new(cause))
    }
}
