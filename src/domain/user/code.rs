//! Error codes reported to API clients

/// Stable error codes of the user registration flows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserErrorCode {
    /// Document missing or blank
    MissingDocument,
    /// Document is not a valid CPF
    InvalidCpf,
    /// Persisting the user failed
    InsertFailed,
    /// A user with the same document already exists
    DuplicateDocument,
    /// No user registered under the document
    UserNotFound,
    /// Request body, headers or fields failed validation
    RequestValidation,
    /// Unexpected failure
    Internal,
}

impl UserErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingDocument => "USER-0003",
            Self::InvalidCpf => "USER-0004",
            Self::InsertFailed => "USER-0005",
            Self::DuplicateDocument => "USER-0006",
            Self::UserNotFound => "USER-0007",
            Self::RequestValidation => "VAL-0001",
            Self::Internal => "INTERNAL-ERROR",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingDocument => "The document is required",
            Self::InvalidCpf => "The document is not a valid CPF",
            Self::InsertFailed => "Failed to insert the user",
            Self::DuplicateDocument => "A user with the same document already exists",
            Self::UserNotFound => "No user found for the given document",
            Self::RequestValidation => "An error occurred while processing the request",
            Self::Internal => "Unexpected error",
        }
    }
}
