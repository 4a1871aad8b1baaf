//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

#[cfg(test)]
use mockall::automock;

use super::entity::User;
use crate::domain::document::Document;
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// Implementations report a duplicated document as a conflict with the
/// duplicate-document code and any other write failure as a persistence error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Persist a new user and return the stored version
    async fn insert(&self, user: User) -> Result<User, DomainError>;

    /// Find a user by normalized document
    async fn find_by_document(&self, document: &Document) -> Result<Option<User>, DomainError>;

    /// Count stored users
    async fn count(&self) -> Result<usize, DomainError>;
}
