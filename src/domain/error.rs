use thiserror::Error;

use super::document::DocumentRejection;
use super::user::UserErrorCode;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { code: String, message: String },

    #[error("Validation error: {message}")]
    Validation {
        code: String,
        message: String,
        details: Vec<String>,
    },

    #[error("Invalid document: {0}")]
    InvalidDocument(DocumentRejection),

    #[error("Conflict: {message}")]
    Conflict { code: String, message: String },

    #[error("Persistence error: {message}")]
    Persistence { code: String, message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(code: UserErrorCode) -> Self {
        Self::NotFound {
            code: code.code().to_string(),
            message: code.message().to_string(),
        }
    }

    pub fn validation(message: impl Into<String>, details: Vec<String>) -> Self {
        Self::Validation {
            code: UserErrorCode::RequestValidation.code().to_string(),
            message: message.into(),
            details,
        }
    }

    pub fn conflict(code: UserErrorCode) -> Self {
        Self::Conflict {
            code: code.code().to_string(),
            message: code.message().to_string(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            code: UserErrorCode::InsertFailed.code().to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Error code reported to clients
    pub fn code(&self) -> &str {
        match self {
            Self::NotFound { code, .. }
            | Self::Validation { code, .. }
            | Self::Conflict { code, .. }
            | Self::Persistence { code, .. } => code,
            Self::InvalidDocument(reason) => reason.code(),
            Self::Internal { .. } => UserErrorCode::Internal.code(),
        }
    }
}

impl From<DocumentRejection> for DomainError {
    fn from(reason: DocumentRejection) -> Self {
        Self::InvalidDocument(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found(UserErrorCode::UserNotFound);
        assert_eq!(error.code(), "USER-0007");
        assert_eq!(
            error.to_string(),
            "Not found: No user found for the given document"
        );
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Invalid input", vec!["email: invalid".to_string()]);
        assert_eq!(error.code(), "VAL-0001");
        assert_eq!(error.to_string(), "Validation error: Invalid input");
    }

    #[test]
    fn test_invalid_document_codes() {
        let blank: DomainError = DocumentRejection::Blank.into();
        assert_eq!(blank.code(), "USER-0003");

        let checksum: DomainError = DocumentRejection::BadCheckDigit1.into();
        assert_eq!(checksum.code(), "USER-0004");
        assert_eq!(
            checksum.to_string(),
            "Invalid document: The document is not a valid CPF"
        );
    }

    #[test]
    fn test_conflict_and_persistence_codes() {
        assert_eq!(
            DomainError::conflict(UserErrorCode::DuplicateDocument).code(),
            "USER-0006"
        );
        assert_eq!(DomainError::persistence("boom").code(), "USER-0005");
        assert_eq!(DomainError::internal("boom").code(), "INTERNAL-ERROR");
    }
}
