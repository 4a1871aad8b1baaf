//! HTTP request and response types

pub mod error;
pub mod json;
pub mod transaction;
pub mod user;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use transaction::{TransactionId, TRANSACTION_ID_HEADER};
pub use user::{CreateUserDto, UserResponse};
