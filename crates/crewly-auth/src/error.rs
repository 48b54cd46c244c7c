//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors raised at the authentication boundary.
///
/// All variants map to 401; the distinction exists for logging.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on the request.
    #[error("Missing bearer token")]
    MissingToken,

    /// The token failed signature or standard-claim validation.
    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// The token's role/company claims are internally inconsistent.
    #[error("Invalid claims: {0}")]
    InvalidClaims(#[from] crewly_core::ActorError),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Authentication failed");
        let body = json!({
            "message": "Missing or invalid authentication token",
            "errors": [],
            "kind": "unauthorized",
        });
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(AuthError::MissingToken.to_string(), "Missing bearer token");
    }

    #[test]
    fn test_all_variants_are_unauthorized() {
        let response = AuthError::MissingToken.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
