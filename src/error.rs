// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::services::AdminDeleteError;

/// HTTP API error carrying one of the four callable error codes.
#[derive(Debug)]
pub enum ApiError {
    // 401 Unauthorized
    Unauthenticated(String),

    // 403 Forbidden
    PermissionDenied(String),

    // 400 Bad Request
    InvalidArgument(String),

    // 500 Internal Server Error
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Unauthenticated(_) => 401,
            ApiError::PermissionDenied(_) => 403,
            ApiError::InvalidArgument(_) => 400,
            ApiError::Internal(_) => 500,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::Unauthenticated(msg) => msg,
            ApiError::PermissionDenied(msg) => msg,
            ApiError::InvalidArgument(msg) => msg,
            ApiError::Internal(msg) => msg,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Unauthenticated(_) => "unauthenticated",
            ApiError::PermissionDenied(_) => "permission-denied",
            ApiError::InvalidArgument(_) => "invalid-argument",
            ApiError::Internal(_) => "internal",
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({
            "error": true,
            "message": self.message(),
            "code": self.error_code()
        })
    }
}

// Static constructor methods
impl ApiError {
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        ApiError::Unauthenticated(message.into())
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        ApiError::PermissionDenied(message.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ApiError::InvalidArgument(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

// Convert service errors to ApiError
impl From<AdminDeleteError> for ApiError {
    fn from(err: AdminDeleteError) -> Self {
        let message = err.to_string();
        match err {
            AdminDeleteError::Unauthenticated => ApiError::Unauthenticated(message),
            AdminDeleteError::PermissionDenied => ApiError::PermissionDenied(message),
            AdminDeleteError::InvalidArgument(_) => ApiError::InvalidArgument(message),
            AdminDeleteError::Internal(_) => ApiError::Internal(message),
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_callable_convention() {
        assert_eq!(ApiError::unauthenticated("x").status_code(), 401);
        assert_eq!(ApiError::permission_denied("x").status_code(), 403);
        assert_eq!(ApiError::invalid_argument("x").status_code(), 400);
        assert_eq!(ApiError::internal("x").status_code(), 500);
    }

    #[test]
    fn service_errors_map_onto_their_codes() {
        let err: ApiError = AdminDeleteError::Unauthenticated.into();
        assert_eq!(err.error_code(), "unauthenticated");
        assert_eq!(err.message(), "User must be authenticated to delete admins");

        let err: ApiError = AdminDeleteError::PermissionDenied.into();
        assert_eq!(err.error_code(), "permission-denied");

        let err: ApiError = AdminDeleteError::InvalidArgument("UID is required".to_string()).into();
        assert_eq!(err.error_code(), "invalid-argument");
        assert_eq!(err.message(), "UID is required");

        let err: ApiError = AdminDeleteError::Internal("boom".to_string()).into();
        assert_eq!(err.error_code(), "internal");
    }

    #[test]
    fn json_body_uses_error_envelope() {
        let body = ApiError::permission_denied("Only admins can delete other admins").to_json();
        assert_eq!(body["error"], true);
        assert_eq!(body["code"], "permission-denied");
        assert_eq!(body["message"], "Only admins can delete other admins");
    }
}
