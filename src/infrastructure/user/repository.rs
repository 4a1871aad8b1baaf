//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::document::Document;
use crate::domain::user::{User, UserErrorCode, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    /// Index for document -> user ID lookup
    document_index: Arc<RwLock<HashMap<String, Uuid>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            document_index: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository with initial users
    pub fn with_users(users: Vec<User>) -> Self {
        let mut users_map = HashMap::new();
        let mut document_map = HashMap::new();

        for user in users {
            document_map.insert(user.document().as_str().to_string(), user.id());
            users_map.insert(user.id(), user);
        }

        Self {
            users: Arc::new(RwLock::new(users_map)),
            document_index: Arc::new(RwLock::new(document_map)),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let mut document_index = self.document_index.write().await;

        let document = user.document().as_str().to_string();

        if document_index.contains_key(&document) {
            return Err(DomainError::conflict(UserErrorCode::DuplicateDocument));
        }

        if users.contains_key(&user.id()) {
            return Err(DomainError::persistence(format!(
                "User with ID '{}' already exists",
                user.id()
            )));
        }

        document_index.insert(document, user.id());
        users.insert(user.id(), user.clone());

        Ok(user)
    }

    async fn find_by_document(&self, document: &Document) -> Result<Option<User>, DomainError> {
        let id = self
            .document_index
            .read()
            .await
            .get(document.as_str())
            .copied();

        match id {
            Some(id) => Ok(self.users.read().await.get(&id).cloned()),
            None => Ok(None),
        }
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.users.read().await.len())
    }
}
