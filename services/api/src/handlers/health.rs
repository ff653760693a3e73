use anyhow::Context;
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use liftdesk_core::serde::to_rfc3339_ms;

use crate::error::ApiError;
use crate::state::AppState;

// ── GET /api/health ──────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub timestamp: DateTime<Utc>,
}

/// Enveloped health check. Fails with a 500 when the database is unreachable,
/// which is what uptime monitors key on.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    state.db.ping().await.context("ping database")?;
    Ok(Json(HealthResponse {
        success: true,
        message: "Liftdesk API is running",
        timestamp: Utc::now(),
    }))
}
