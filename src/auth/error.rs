use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Rejections produced by the role checks
#[derive(Debug, thiserror::Error)]
pub enum AuthorizationError {
    /// No identity was attached to the request
    #[error("Missing authenticated identity")]
    MissingIdentity,

    /// None of the required roles were found on the identity
    #[error("Insufficient role. Required one of: {}", .0.join(", "))]
    InsufficientRole(Vec<String>),
}

impl IntoResponse for AuthorizationError {
    fn into_response(self) -> Response {
        match self {
            AuthorizationError::MissingIdentity => {
                (StatusCode::UNAUTHORIZED, self.to_string()).into_response()
            }
            AuthorizationError::InsufficientRole(_) => {
                (StatusCode::FORBIDDEN, self.to_string()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_identity_error() {
        let err = AuthorizationError::MissingIdentity;
        assert_eq!(err.to_string(), "Missing authenticated identity");
    }

    #[test]
    fn test_insufficient_role_error() {
        let err = AuthorizationError::InsufficientRole(vec![
            "nd.metadata_admin".to_string(),
            "nd.metadata_editor".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Insufficient role. Required one of: nd.metadata_admin, nd.metadata_editor"
        );
    }

    #[test]
    fn test_unauthorized_status() {
        let response = AuthorizationError::MissingIdentity.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_forbidden_status() {
        let response =
            AuthorizationError::InsufficientRole(vec!["nd.dok_admin".to_string()]).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
