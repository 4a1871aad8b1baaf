//! User domain
//!
//! This module provides domain types and traits for user registration,
//! including the user entity, field validation, error codes and the
//! repository trait.

mod code;
mod entity;
mod repository;
mod validation;

pub use code::UserErrorCode;
pub use entity::{Category, User, UserRecord};
pub use repository::UserRepository;
pub use validation::{
    age_on, validate_birthdate, validate_email, validate_full_name, validate_phone,
    UserValidationError,
};

#[cfg(test)]
pub use repository::MockUserRepository;
