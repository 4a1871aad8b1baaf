//! Transaction id carried by the `x-transaction-id` header

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use uuid::Uuid;

use super::error::ApiError;

pub const TRANSACTION_ID_HEADER: &str = "x-transaction-id";

/// Required transaction id; absent or malformed headers are rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionId(pub Uuid);

impl TransactionId {
    /// Read the header, if present and well formed
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get(TRANSACTION_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| Uuid::parse_str(s.trim()).ok())
            .map(Self)
    }

    /// Header value or a freshly generated id
    pub fn or_generate(headers: &HeaderMap) -> Self {
        Self::from_headers(headers).unwrap_or_else(|| Self(Uuid::new_v4()))
    }
}

impl<S> FromRequestParts<S> for TransactionId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers).ok_or_else(|| {
            ApiError::validation(vec![format!(
                "{} header must be a valid UUID",
                TRANSACTION_ID_HEADER
            )])
        })
    }
}
