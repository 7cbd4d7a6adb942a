use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::MongoUserRepository;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::{AppState, Backend};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!(storage = %config.storage, "Starting {} v{}", config.app.name, config.app.version);

    let backend = match &config.mongodb {
        Some(mongo_config) => {
            info!("Connecting to MongoDB database: {}", mongo_config.database());

            let client = database::mongodb::connect_from_config(mongo_config).await?;
            let db = client.database(mongo_config.database());

            MongoUserRepository::new(db.clone()).init_indexes().await?;

            info!("Successfully connected to MongoDB");
            Backend::MongoDb { client, db }
        }
        None => {
            tracing::warn!("Using in-memory user storage; data is lost on restart");
            Backend::Memory
        }
    };

    if config.roles.is_open() {
        info!("USER_ROLES not set, any non-blank role is accepted");
    }

    let state = AppState { config, backend };

    let api_routes = api::routes(&state);
    let AppState { config, backend } = state;

    let router = create_router::<openapi::ApiDoc>(api_routes, &config.cors)?;

    let app = router.merge(health_router(config.app));

    info!("Starting server with graceful shutdown (30s timeout)");

    create_production_app(
        app,
        &config.server,
        Duration::from_secs(30),
        async move {
            if let Backend::MongoDb { client, .. } = backend {
                info!("Shutting down: closing MongoDB connections");
                client.shutdown().await;
                info!("MongoDB connection closed successfully");
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Users API shutdown complete");
    Ok(())
}
