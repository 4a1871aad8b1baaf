//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use tracing::{error, warn};

use crate::domain::document::Document;
use crate::domain::user::{Category, User, UserErrorCode, UserRecord, UserRepository};
use crate::domain::DomainError;

const USER_COLUMNS: &str = "id, active, full_name, document, email, phone, birthdate, \
                            category, created_at, updated_at";

/// PostgreSQL implementation of UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: User) -> Result<User, DomainError> {
        let query = format!(
            r#"
            INSERT INTO users (id, active, full_name, document, email, phone, birthdate,
                               category, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(user.id())
            .bind(user.is_active())
            .bind(user.full_name())
            .bind(user.document().as_str())
            .bind(user.email())
            .bind(user.phone())
            .bind(user.birthdate())
            .bind(user.category().as_str())
            .bind(user.created_at())
            .bind(user.updated_at())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    warn!(user_id = %user.id(), "Duplicate document on insert");
                    return DomainError::conflict(UserErrorCode::DuplicateDocument);
                }

                error!(code = UserErrorCode::InsertFailed.code(), error = %e, "Failed to insert user");
                DomainError::persistence(format!("Failed to insert user: {}", e))
            })?;

        row_to_user(&row)
    }

    async fn find_by_document(&self, document: &Document) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE document = $1", USER_COLUMNS);

        let row = sqlx::query(&query)
            .bind(document.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find user by document: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to count users: {}", e)))?;

        Ok(count as usize)
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let document: String = row.get("document");
    let category: String = row.get("category");

    let document = Document::parse(&document).map_err(|e| {
        DomainError::internal(format!("Invalid document in database: {}", e))
    })?;
    let category = category
        .parse::<Category>()
        .map_err(|e| DomainError::internal(format!("Invalid category in database: {}", e)))?;

    Ok(User::restore(UserRecord {
        id: row.get("id"),
        full_name: row.get("full_name"),
        active: row.get("active"),
        document,
        email: row.get("email"),
        phone: row.get("phone"),
        birthdate: row.get("birthdate"),
        category,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }))
}
