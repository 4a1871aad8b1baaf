//! Domain layer - Core business logic and entities

pub mod document;
pub mod error;
pub mod user;

pub use document::{Document, DocumentRejection, ValidationOutcome};
pub use error::DomainError;
pub use user::{Category, User, UserErrorCode, UserRepository};
