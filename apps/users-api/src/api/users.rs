//! Users API routes
//!
//! Wires the users domain to the configured storage backend.

use axum::Router;
use domain_users::{InMemoryUserRepository, MongoUserRepository, UserService, handlers};

use crate::state::{AppState, Backend};

pub fn router(state: &AppState) -> Router {
    let roles = state.config.roles.clone();

    match &state.backend {
        Backend::MongoDb { db, .. } => {
            let service = UserService::new(MongoUserRepository::new(db.clone())).with_roles(roles);
            handlers::router(service)
        }
        Backend::Memory => {
            let service = UserService::new(InMemoryUserRepository::new()).with_roles(roles);
            handlers::router(service)
        }
    }
}
