//! API routes module

pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// All API routes; `axum_helpers::create_router` nests them under `/api`.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/v1/users", users::router(state))
        .merge(health::router(state.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment, Storage};
    use crate::state::Backend;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{AppInfo, cors::CorsConfig, server::ServerConfig};
    use domain_users::RoleCatalog;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn memory_state() -> AppState {
        AppState {
            config: Config {
                app: AppInfo {
                    name: "users_api",
                    version: "0.0.0",
                },
                environment: Environment::Development,
                server: ServerConfig::default(),
                cors: CorsConfig::AnyOrigin,
                storage: Storage::Memory,
                mongodb: None,
                roles: RoleCatalog::default(),
            },
            backend: Backend::Memory,
        }
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_users_are_mounted_under_v1() {
        let app = routes(&memory_state());

        let create = Request::builder()
            .method("POST")
            .uri("/v1/users")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "firstName": "Ana", "role": "ADMIN" }).to_string()))
            .unwrap();
        let (status, body) = send(&app, create).await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["data"]["userId"].as_str().unwrap().to_string();

        let restore = Request::builder()
            .method("PATCH")
            .uri(format!("/v1/users/{id}/restore"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, restore).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["status"], "ACTIVE");
    }

    #[tokio::test]
    async fn test_memory_backend_is_always_ready() {
        let app = routes(&memory_state());

        let request = Request::builder().uri("/ready").body(Body::empty()).unwrap();
        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["ready"], true);
    }
}
