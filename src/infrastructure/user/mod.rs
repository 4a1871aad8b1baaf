//! User infrastructure module
//!
//! This module provides the in-memory and PostgreSQL user repositories and
//! the user service implementing the registration and lookup use cases.

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::{AgePolicy, CreateUserCommand, UserService};
