//! User service implementing the registration and lookup use cases

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::document::Document;
use crate::domain::user::{
    validate_birthdate, validate_email, validate_full_name, validate_phone, Category, User,
    UserErrorCode, UserRepository,
};
use crate::domain::DomainError;

/// Command for registering a new user
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub full_name: String,
    pub document: Option<String>,
    pub email: String,
    pub phone: String,
    pub birthdate: NaiveDate,
    pub category: Category,
}

/// Accepted age range for new users, in completed years
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgePolicy {
    pub min_age: u32,
    pub max_age: u32,
}

impl Default for AgePolicy {
    fn default() -> Self {
        Self {
            min_age: 0,
            max_age: 120,
        }
    }
}

/// User service for registration and lookup
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    age_policy: AgePolicy,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>, age_policy: AgePolicy) -> Self {
        Self {
            repository,
            age_policy,
        }
    }

    /// Register a new user
    pub async fn create(
        &self,
        command: CreateUserCommand,
        transaction_id: Uuid,
    ) -> Result<User, DomainError> {
        info!(%transaction_id, "start - use case - create user");

        let user = self.build_user(command, Utc::now().date_naive())?;
        let created = self.repository.insert(user).await?;

        info!(%transaction_id, user_id = %created.id(), "end - use case - create user");

        Ok(created)
    }

    /// Look up a user by document, accepting any formatting of the number
    pub async fn find_by_document(
        &self,
        raw_document: &str,
        transaction_id: Uuid,
    ) -> Result<User, DomainError> {
        info!(%transaction_id, "start - use case - find user by document");

        let document = Document::parse(raw_document).inspect_err(|reason| {
            warn!(%transaction_id, reason = reason.as_str(), "Rejected document on lookup");
        })?;

        let user = self
            .repository
            .find_by_document(&document)
            .await?
            .ok_or_else(|| DomainError::not_found(UserErrorCode::UserNotFound))?;

        info!(%transaction_id, "end - use case - find user by document");

        Ok(user)
    }

    /// Count registered users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    fn build_user(&self, command: CreateUserCommand, today: NaiveDate) -> Result<User, DomainError> {
        let document = Document::parse(command.document.as_deref().unwrap_or_default())
            .inspect_err(|reason| warn!(reason = reason.as_str(), "Rejected document on create"))?;

        let errors: Vec<String> = [
            validate_full_name(&command.full_name),
            validate_email(&command.email),
            validate_phone(&command.phone),
            validate_birthdate(
                command.birthdate,
                today,
                self.age_policy.min_age,
                self.age_policy.max_age,
            ),
        ]
        .into_iter()
        .filter_map(Result::err)
        .map(|e| e.to_string())
        .collect();

        if !errors.is_empty() {
            return Err(DomainError::validation(
                UserErrorCode::RequestValidation.message(),
                errors,
            ));
        }

        Ok(User::new(
            command.full_name.trim(),
            document,
            command.email.trim(),
            command.phone.trim(),
            command.birthdate,
            command.category,
        ))
    }
}
