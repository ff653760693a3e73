use axum::http::StatusCode;

/// Liveness check for infrastructure probes, served at `GET /healthz`.
/// The enveloped `/api/health` endpoint lives with the service handlers.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
