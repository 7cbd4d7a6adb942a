use crate::envelope::ApiResponse;
use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use core_config::AppInfo;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use utoipa::ToSchema;

/// Liveness payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub name: String,
    pub version: String,
}

/// Readiness payload: overall flag plus one entry per dependency.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReadyResponse {
    pub ready: bool,
    pub checks: BTreeMap<String, String>,
}

pub type HealthCheckFuture<'a> = Pin<Box<dyn Future<Output = Result<(), String>> + Send + 'a>>;

/// Runs the named checks concurrently and folds them into one readiness report.
///
/// Every check must succeed for a 200; otherwise the report is returned with
/// 503 and `success: false`.
///
/// ```ignore
/// let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
///     "mongodb",
///     Box::pin(async { ping(&db).await.map_err(|e| e.to_string()) }),
/// )];
/// run_health_checks(checks).await
/// ```
pub async fn run_health_checks(
    checks: Vec<(&str, HealthCheckFuture<'_>)>,
) -> (StatusCode, Json<ApiResponse<ReadyResponse>>) {
    let names: Vec<_> = checks.iter().map(|(name, _)| name.to_string()).collect();
    let results = join_all(checks.into_iter().map(|(_, check)| check)).await;

    let mut report = BTreeMap::new();
    let mut ready = true;

    for (name, result) in names.into_iter().zip(results) {
        match result {
            Ok(()) => {
                report.insert(name, "connected".to_string());
            }
            Err(e) => {
                tracing::error!("Readiness check failed: {} error: {:?}", name, e);
                report.insert(name, "disconnected".to_string());
                ready = false;
            }
        }
    }

    let body = ReadyResponse {
        ready,
        checks: report,
    };

    if ready {
        (
            StatusCode::OK,
            Json(ApiResponse::success("Service is ready", body)),
        )
    } else {
        let mut envelope = ApiResponse::success("Service is not ready", body);
        envelope.success = false;
        (StatusCode::SERVICE_UNAVAILABLE, Json(envelope))
    }
}

async fn health_handler(State(app): State<AppInfo>) -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(
        "Service is healthy",
        HealthResponse {
            status: "healthy".to_string(),
            name: app.name.to_string(),
            version: app.version.to_string(),
        },
    ))
}

/// `GET /health` liveness route; always 200 while the process is serving.
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_info)
}
