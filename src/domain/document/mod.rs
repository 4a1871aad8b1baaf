//! Identity document domain
//!
//! Validation of Brazilian CPF numbers and the `Document` value type that
//! only exists for numbers that passed validation.

mod entity;
mod validator;

pub use entity::Document;
pub use validator::{
    check_digit, normalize, validate, validate_optional, DocumentRejection, ValidationOutcome,
    CPF_LENGTH,
};
