//! Error responses returned by the HTTP API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::{DomainError, UserErrorCode};

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub code: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                code: code.into(),
                message: message.into(),
                timestamp: Utc::now(),
                errors: None,
            },
        }
    }

    /// Attach the individual validation messages
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.response.errors = Some(errors);
        self
    }

    /// Request validation failure (`VAL-0001`)
    pub fn validation(errors: Vec<String>) -> Self {
        let code = UserErrorCode::RequestValidation;
        Self::new(StatusCode::BAD_REQUEST, code.code(), code.message()).with_errors(errors)
    }

    pub fn internal() -> Self {
        let code = UserErrorCode::Internal;
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, code.code(), code.message())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { code, message } => {
                Self::new(StatusCode::NOT_FOUND, code, message)
            }
            DomainError::Validation {
                code,
                message,
                details,
            } => Self::new(StatusCode::BAD_REQUEST, code, message).with_errors(details),
            DomainError::InvalidDocument(reason) => {
                Self::new(StatusCode::BAD_REQUEST, reason.code(), reason.to_string())
            }
            DomainError::Conflict { code, message } => {
                Self::new(StatusCode::BAD_REQUEST, code, message)
            }
            DomainError::Persistence { code, message } => {
                error!(error = %message, "Persistence failure");
                Self::new(
                    StatusCode::BAD_REQUEST,
                    code,
                    UserErrorCode::InsertFailed.message(),
                )
            }
            DomainError::Internal { message } => {
                error!(error = %message, "Unexpected failure");
                Self::internal()
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.response.code, self.response.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DocumentRejection;

    #[test]
    fn test_not_found_conversion() {
        let err: ApiError = DomainError::not_found(UserErrorCode::UserNotFound).into();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.response.code, "USER-0007");
        assert!(err.response.errors.is_none());
    }

    #[test]
    fn test_invalid_document_conversion() {
        let err: ApiError = DomainError::from(DocumentRejection::Blank).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.code, "USER-0003");

        let err: ApiError = DomainError::from(DocumentRejection::RepeatedDigits).into();
        assert_eq!(err.response.code, "USER-0004");
    }

    #[test]
    fn test_conflict_and_persistence_are_bad_requests() {
        let conflict: ApiError = DomainError::conflict(UserErrorCode::DuplicateDocument).into();
        assert_eq!(conflict.status, StatusCode::BAD_REQUEST);
        assert_eq!(conflict.response.code, "USER-0006");

        let persistence: ApiError = DomainError::persistence("disk full").into();
        assert_eq!(persistence.status, StatusCode::BAD_REQUEST);
        assert_eq!(persistence.response.code, "USER-0005");
        assert_eq!(persistence.response.message, "Failed to insert the user");
    }

    #[test]
    fn test_internal_hides_details() {
        let err: ApiError = DomainError::internal("pool timed out").into();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.response.code, "INTERNAL-ERROR");
        assert!(!err.response.message.contains("pool"));
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::validation(vec!["email must be a valid address".to_string()]);
        let json = serde_json::to_value(&err.response).unwrap();

        assert_eq!(json["code"], "VAL-0001");
        assert_eq!(json["errors"][0], "email must be a valid address");
        assert!(json["timestamp"].is_string());
    }

    #[test]
    fn test_errors_omitted_when_absent() {
        let err = ApiError::internal();
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(!json.contains("errors"));
    }
}
