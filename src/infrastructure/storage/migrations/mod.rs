//! Database migrations infrastructure

use sqlx::postgres::PgPool;
use tracing::{info, warn};

use crate::domain::DomainError;

/// PostgreSQL migrator tracking applied versions in `_migrations`
#[derive(Debug)]
pub struct PostgresMigrator {
    pool: PgPool,
}

impl PostgresMigrator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn ensure_migrations_table(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS _migrations (
                version BIGINT PRIMARY KEY,
                description TEXT NOT NULL,
                installed_on TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to create migrations table: {}", e)))?;

        Ok(())
    }

    /// Applies a migration unless it was already recorded
    pub async fn run_migration(&self, migration: &Migration) -> Result<(), DomainError> {
        self.ensure_migrations_table().await?;

        let applied: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM _migrations WHERE version = $1)",
        )
        .bind(migration.version)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to check migration status: {}", e)))?;

        if applied {
            return Ok(());
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::internal(format!("Failed to begin migration: {}", e)))?;

        sqlx::raw_sql(&migration.up)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::internal(format!(
                    "Failed to run migration {}: {}",
                    migration.version, e
                ))
            })?;

        sqlx::query("INSERT INTO _migrations (version, description) VALUES ($1, $2)")
            .bind(migration.version)
            .bind(&migration.description)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                DomainError::internal(format!(
                    "Failed to record migration {}: {}",
                    migration.version, e
                ))
            })?;

        tx.commit()
            .await
            .map_err(|e| DomainError::internal(format!("Failed to commit migration: {}", e)))?;

        info!(version = migration.version, description = %migration.description, "Applied migration");

        Ok(())
    }

    /// Returns the latest applied migration version
    pub async fn current_version(&self) -> Result<Option<i64>, DomainError> {
        self.ensure_migrations_table().await?;

        sqlx::query_scalar("SELECT MAX(version) FROM _migrations")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to get migration version: {}", e)))
    }
}

/// Represents a database migration
#[derive(Debug, Clone)]
pub struct Migration {
    pub version: i64,
    pub description: String,
    pub up: String,
}

impl Migration {
    pub fn new(version: i64, description: impl Into<String>, up: impl Into<String>) -> Self {
        Self {
            version,
            description: description.into(),
            up: up.into(),
        }
    }
}

/// Schema of the registration service
pub fn user_migrations() -> Vec<Migration> {
    vec![
        Migration::new(
            1,
            "Create users table",
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id UUID PRIMARY KEY,
                active BOOLEAN NOT NULL DEFAULT TRUE,
                full_name TEXT NOT NULL,
                document CHAR(11) NOT NULL,
                email TEXT NOT NULL,
                phone TEXT NOT NULL,
                birthdate DATE NOT NULL,
                category VARCHAR(32) NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            );
            "#,
        ),
        Migration::new(
            2,
            "Unique document index",
            r#"
            CREATE UNIQUE INDEX IF NOT EXISTS idx_users_document ON users(document);
            "#,
        ),
    ]
}

/// Highest version known to this build
pub fn latest_version() -> Option<i64> {
    user_migrations().iter().map(|m| m.version).max()
}

/// Runs all pending migrations and checks the recorded schema version
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    let migrator = PostgresMigrator::new(pool.clone());

    for migration in user_migrations() {
        migrator.run_migration(&migration).await?;
    }

    let current = migrator.current_version().await?;
    check_schema_version(current, latest_version())?;

    info!(version = ?current, "Database schema up to date");

    Ok(())
}

fn check_schema_version(current: Option<i64>, latest: Option<i64>) -> Result<(), DomainError> {
    match (current, latest) {
        (Some(current), Some(latest)) if current > latest => {
            warn!(current, latest, "Database schema is newer than this build");
            Ok(())
        }
        (current, Some(latest)) if current < Some(latest) => Err(DomainError::internal(format!(
            "Schema version {:?} is behind {} after migrating",
            current, latest
        ))),
        _ => Ok(()),
    }
}
