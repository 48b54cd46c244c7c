//! Error types for the employee administration API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Error type for the employee administration API.
#[derive(Debug, thiserror::Error)]
pub enum ApiEmployeesError {
    /// Rejected input: missing fields, malformed values, taken email,
    /// unknown company.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Target record absent (or hidden by soft deletion).
    #[error("Not found: {0}")]
    NotFound(String),

    /// The actor is authenticated but may not touch this record.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Authentication required, or a role with no access path at all.
    #[error("Authentication required")]
    Unauthorized,

    /// The operation conflicts with the current state of the system.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error.
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Wire format for every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable summary.
    pub message: String,
    /// Per-field details, empty when there are none.
    pub errors: Vec<String>,
    /// Machine-readable error class.
    pub kind: String,
}

impl ApiEmployeesError {
    /// The machine-readable error class for the response body.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ApiEmployeesError::Validation(_) => "validation",
            ApiEmployeesError::NotFound(_) => "not_found",
            ApiEmployeesError::Forbidden(_) => "forbidden",
            ApiEmployeesError::Unauthorized => "unauthorized",
            ApiEmployeesError::Conflict(_) => "conflict",
            ApiEmployeesError::Internal(_) | ApiEmployeesError::Database(_) => "internal",
        }
    }
}

impl IntoResponse for ApiEmployeesError {
    fn into_response(self) -> Response {
        let kind = self.kind().to_string();
        let (status, message) = match &self {
            ApiEmployeesError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiEmployeesError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiEmployeesError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            ApiEmployeesError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Missing or invalid authentication token".to_string(),
            ),
            ApiEmployeesError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            ApiEmployeesError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            ApiEmployeesError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            message,
            errors: Vec::new(),
            kind,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiEmployeesError::NotFound("Employee not found".to_string());
        assert_eq!(err.to_string(), "Not found: Employee not found");

        let err = ApiEmployeesError::Validation("Email has already been taken".to_string());
        assert_eq!(
            err.to_string(),
            "Validation error: Email has already been taken"
        );
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(ApiEmployeesError::Unauthorized.kind(), "unauthorized");
        assert_eq!(
            ApiEmployeesError::Conflict(String::new()).kind(),
            "conflict"
        );
        assert_eq!(
            ApiEmployeesError::Database(sqlx::Error::RowNotFound).kind(),
            "internal"
        );
    }

    #[test]
    fn test_internal_detail_never_leaks() {
        let response =
            ApiEmployeesError::Internal("connection string leaked".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
