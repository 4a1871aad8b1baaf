//! Application state for shared services

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{DomainError, User, UserRepository};
use crate::infrastructure::user::{CreateUserCommand, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserServiceTrait>) -> Self {
        Self { user_service }
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(
        &self,
        command: CreateUserCommand,
        transaction_id: Uuid,
    ) -> Result<User, DomainError>;
    async fn find_by_document(
        &self,
        document: &str,
        transaction_id: Uuid,
    ) -> Result<User, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static> UserServiceTrait for UserService<R> {
    async fn create(
        &self,
        command: CreateUserCommand,
        transaction_id: Uuid,
    ) -> Result<User, DomainError> {
        UserService::create(self, command, transaction_id).await
    }

    async fn find_by_document(
        &self,
        document: &str,
        transaction_id: Uuid,
    ) -> Result<User, DomainError> {
        UserService::find_by_document(self, document, transaction_id).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        UserService::count(self).await
    }
}
