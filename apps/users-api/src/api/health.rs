//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{ApiResponse, HealthCheckFuture, ReadyResponse, run_health_checks};

use crate::state::{AppState, Backend};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// Pings MongoDB when it backs the service; the memory backend is always ready.
async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<ReadyResponse>>) {
    let mut checks: Vec<(&str, HealthCheckFuture<'_>)> = Vec::new();

    if let Backend::MongoDb { client, .. } = &state.backend {
        checks.push((
            "mongodb",
            Box::pin(async move {
                database::mongodb::ping(client)
                    .await
                    .map_err(|e| e.to_string())
            }),
        ));
    }

    run_health_checks(checks).await
}
