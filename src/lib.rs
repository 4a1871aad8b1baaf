//! User Registry
//!
//! Registration and lookup of users keyed by their CPF, with:
//! - CPF normalization and check-digit validation
//! - In-memory or PostgreSQL storage
//! - An HTTP API and an offline `validate` command

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use crate::config::AppConfig;

use std::sync::Arc;

use tracing::info;

use crate::api::state::{AppState, UserServiceTrait};
use crate::config::StorageBackend;
use crate::infrastructure::storage::{connect_pool, run_migrations, PostgresConfig};
use crate::infrastructure::user::{
    AgePolicy, InMemoryUserRepository, PostgresUserRepository, UserService,
};

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let age_policy = AgePolicy {
        min_age: config.registration.min_age,
        max_age: config.registration.max_age,
    };

    if age_policy.min_age > age_policy.max_age {
        anyhow::bail!(
            "registration.min_age ({}) exceeds registration.max_age ({})",
            age_policy.min_age,
            age_policy.max_age
        );
    }

    let user_service: Arc<dyn UserServiceTrait> = match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory user storage");
            Arc::new(UserService::new(
                Arc::new(InMemoryUserRepository::new()),
                age_policy,
            ))
        }
        StorageBackend::Postgres => {
            let url = config.storage.resolve_database_url().ok_or_else(|| {
                anyhow::anyhow!("storage.database_url or DATABASE_URL is required for postgres")
            })?;
            let pool = connect_pool(
                &PostgresConfig::new(url).with_max_connections(config.storage.max_connections),
            )
            .await?;

            run_migrations(&pool).await?;
            info!("Using PostgreSQL user storage");

            Arc::new(UserService::new(
                Arc::new(PostgresUserRepository::new(pool)),
                age_policy,
            ))
        }
    };

    Ok(AppState::new(user_service))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_state_uses_memory() {
        let state = create_app_state().await.unwrap();
        assert_eq!(state.user_service.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_rejects_inverted_age_policy() {
        let mut config = AppConfig::default();
        config.registration.min_age = 30;
        config.registration.max_age = 18;

        assert!(create_app_state_with_config(&config).await.is_err());
    }

    #[tokio::test]
    async fn test_postgres_requires_url() {
        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Postgres;
        config.storage.database_url = None;

        if std::env::var("DATABASE_URL").is_err() {
            assert!(create_app_state_with_config(&config).await.is_err());
        }
    }
}
