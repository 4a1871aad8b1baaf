//! Liveness and readiness probes

use std::time::Instant;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::api::types::Json;
use crate::domain::DomainError;

use super::state::AppState;

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    fn status_code(self) -> StatusCode {
        match self {
            Self::Healthy => StatusCode::OK,
            Self::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<ComponentCheck>,
}

/// Probe result of a single dependency
#[derive(Serialize)]
pub struct ComponentCheck {
    pub name: &'static str,
    pub status: HealthStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub latency_ms: u64,
}

impl ComponentCheck {
    fn from_probe<T>(name: &'static str, started: Instant, result: Result<T, DomainError>) -> Self {
        let (status, error) = match result {
            Ok(_) => (HealthStatus::Healthy, None),
            Err(e) => (HealthStatus::Unhealthy, Some(e.to_string())),
        };

        Self {
            name,
            status,
            error,
            latency_ms: started.elapsed().as_millis() as u64,
        }
    }
}

pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION"),
        checks: Vec::new(),
    })
}

/// 503 while the user store cannot answer a count
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let store = ComponentCheck::from_probe("user_store", started, state.user_service.count().await);
    let status = store.status;

    (
        status.status_code(),
        Json(HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: vec![store],
        }),
    )
}

pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}
