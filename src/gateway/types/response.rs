//! API Response types and error codes
//!
//! - `ApiResponse<T>`: envelope for health and error bodies
//! - `ApiError`: handler error, rendered as status + envelope
//! - `error_codes`: standard error code constants
//!
//! Account payloads are returned bare (no envelope).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::account::AccountError;

// ============================================================================
// Unified API Response Format
// ============================================================================

/// Response envelope
///
/// - code: 0 = success, non-zero = error code
/// - msg: short message description
/// - data: actual data (success) or absent (error)
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, non-zero for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: error_codes::SUCCESS,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

// ============================================================================
// ApiError
// ============================================================================

/// Error returned from handlers and extractors
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: i32,
    pub msg: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: i32, msg: impl Into<String>) -> Self {
        Self {
            status,
            code,
            msg: msg.into(),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error_codes::INVALID_PARAMETER, msg)
    }

    pub fn account_not_found(id: i64) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            error_codes::ACCOUNT_NOT_FOUND,
            format!("Account {} not found", id),
        )
    }

    pub fn route_not_found(path: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            error_codes::ROUTE_NOT_FOUND,
            format!("No route for {}", path),
        )
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
            msg,
        )
    }

    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            error_codes::SERVICE_UNAVAILABLE,
            msg,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ApiResponse::<()>::error(self.code, self.msg));
        (self.status, body).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(e: AccountError) -> Self {
        match e {
            AccountError::NotFound(id) => {
                tracing::warn!(id, "Account not found");
                ApiError::account_not_found(id)
            }
            AccountError::Validation(v) => ApiError::bad_request(v.to_string()),
            AccountError::DuplicateAccountNumber => {
                tracing::error!("Could not allocate a unique account number");
                ApiError::internal("Could not allocate account number")
            }
            AccountError::Database(db) => {
                // Details stay in the log
                tracing::error!("Account store failure: {}", db);
                ApiError::internal("Internal error")
            }
        }
    }
}

// ============================================================================
// Error Codes
// ============================================================================

/// Standard API error codes
pub mod error_codes {
    // Success
    pub const SUCCESS: i32 = 0;

    // Client errors (1xxx)
    pub const INVALID_PARAMETER: i32 = 1001;

    // Resource errors (4xxx)
    pub const ACCOUNT_NOT_FOUND: i32 = 4001;
    pub const ROUTE_NOT_FOUND: i32 = 4004;

    // Server errors (5xxx)
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const SERVICE_UNAVAILABLE: i32 = 5001;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::ValidationError;

    #[test]
    fn test_account_error_mapping() {
        let e = ApiError::from(AccountError::NotFound(3));
        assert_eq!(e.status, StatusCode::NOT_FOUND);
        assert_eq!(e.code, error_codes::ACCOUNT_NOT_FOUND);

        let e = ApiError::from(AccountError::Validation(ValidationError::Missing("name")));
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.msg, "Missing required field: name");

        let e = ApiError::from(AccountError::DuplicateAccountNumber);
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);

        let e = ApiError::from(AccountError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!e.msg.contains("pool"), "driver details must not leak");
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let json = serde_json::to_value(ApiResponse::<()>::error(4001, "gone")).unwrap();
        assert_eq!(json, serde_json::json!({"code": 4001, "msg": "gone"}));
    }
}
