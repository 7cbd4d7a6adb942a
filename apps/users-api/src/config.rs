use core_config::{
    AppInfo, ConfigError, FromEnv, app_info, cors::CorsConfig, env_list, env_or_default,
    server::ServerConfig,
};
use database::mongodb::MongoConfig;
use domain_users::RoleCatalog;
use std::fmt;
use std::str::FromStr;

pub use core_config::Environment;

/// Where user records are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Storage {
    MongoDb,
    Memory,
}

impl FromStr for Storage {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(Storage::MongoDb),
            "memory" => Ok(Storage::Memory),
            other => Err(ConfigError::ParseError {
                key: "USERS_STORAGE".to_string(),
                details: format!("unknown storage '{}', expected 'mongodb' or 'memory'", other),
            }),
        }
    }
}

impl fmt::Display for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Storage::MongoDb => f.write_str("mongodb"),
            Storage::Memory => f.write_str("memory"),
        }
    }
}

/// Application configuration, composed from the shared config components.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub storage: Storage,
    /// Present only when `storage` is MongoDB
    pub mongodb: Option<MongoConfig>,
    pub roles: RoleCatalog,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let cors = CorsConfig::from_env()?;
        let storage: Storage = env_or_default("USERS_STORAGE", "mongodb").parse()?;

        let mongodb = match storage {
            Storage::MongoDb => Some(MongoConfig::from_env()?),
            Storage::Memory => None,
        };

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            cors,
            storage,
            mongodb,
            roles: RoleCatalog::new(env_list("USER_ROLES")),
        })
    }
}
