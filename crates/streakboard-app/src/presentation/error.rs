use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use streakboard_domain::shared::{DomainError, ErrorCode, ErrorSeverity};

/// JSON error body returned by every route
///
/// `error` is what the dashboard shows; `details` carries the underlying
/// cause when `error` is a generic summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiErrorBody {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    /// Numeric error code (2xxx-6xxx range)
    pub code: u16,

    pub severity: ErrorSeverity,

    /// Whether retrying the request may succeed
    pub recoverable: bool,
}

#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    fn from_code(error_code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status: status_for(error_code),
            body: ApiErrorBody {
                error: message.into(),
                details: None,
                code: error_code.code(),
                severity: error_code.severity(),
                recoverable: error_code.is_recoverable(),
            },
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::from_code(ErrorCode::ValidationError, message)
    }

    /// Replace the message with `summary` and keep the original as `details`,
    /// for failures the client can do nothing about
    pub fn with_summary(err: DomainError, summary: &str) -> Self {
        let mut api_err = Self::from(err);
        if api_err.status.is_server_error() {
            let cause = std::mem::replace(&mut api_err.body.error, summary.to_string());
            api_err.body.details = Some(cause);
        }
        api_err
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    if code.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self {
            status: status_for(err.code()),
            body: ApiErrorBody {
                error: err.message().to_string(),
                details: None,
                code: err.code().code(),
                severity: err.severity(),
                recoverable: err.is_recoverable(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.body.code, self.body.error)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_from_domain_error() {
        let api_err: ApiError = DomainError::UserNotFound("Invalid User ID: 3".to_string()).into();

        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_err.body.code, 2001);
        assert_eq!(api_err.body.error, "Invalid User ID: 3");
        assert!(api_err.body.details.is_none());
        assert!(!api_err.body.recoverable);
    }

    #[test]
    fn test_missing_field_is_bad_request() {
        let api_err: ApiError =
            DomainError::MissingField("Missing required fields".to_string()).into();
        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_err.body.code, 6003);
    }

    #[test]
    fn test_repository_error_is_server_error() {
        let api_err: ApiError = DomainError::Repository("disk I/O error".to_string()).into();
        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(api_err.body.recoverable);
    }

    #[test]
    fn test_with_summary_moves_cause_to_details() {
        let api_err = ApiError::with_summary(
            DomainError::Repository("disk I/O error".to_string()),
            "Failed to fetch stats",
        );
        assert_eq!(api_err.body.error, "Failed to fetch stats");
        assert_eq!(api_err.body.details.as_deref(), Some("disk I/O error"));

        // Client errors keep their own message
        let api_err = ApiError::with_summary(
            DomainError::Validation("Invalid month: 13".to_string()),
            "Failed to fetch calendar stats",
        );
        assert_eq!(api_err.body.error, "Invalid month: 13");
        assert!(api_err.body.details.is_none());
    }

    #[test]
    fn test_validation_helper() {
        let api_err = ApiError::validation("Invalid query: month");
        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_err.body.code, 6001);
        assert_eq!(api_err.body.severity, ErrorSeverity::Info);
    }

    #[test]
    fn test_data_unavailable_is_recoverable_server_error() {
        let api_err: ApiError = DomainError::DataUnavailable("pool closed".to_string()).into();
        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_err.body.severity, ErrorSeverity::Warning);
        assert!(api_err.body.recoverable);
    }
}
