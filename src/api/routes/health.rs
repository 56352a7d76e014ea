use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::api::state::ReadinessCheck;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub database: String,
}

/// Liveness only; never touches the database.
pub async fn health_check<S: ReadinessCheck>() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        service: S::SERVICE.into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

pub async fn readiness_check<S: ReadinessCheck>(
    State(state): State<S>,
) -> (StatusCode, Json<ReadinessResponse>) {
    match state.check_database().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: "ready".into(),
                database: format!("{}: connected", S::DATABASE),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, database = S::DATABASE, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    status: "not_ready".into(),
                    database: format!("{}: disconnected", S::DATABASE),
                }),
            )
        }
    }
}
