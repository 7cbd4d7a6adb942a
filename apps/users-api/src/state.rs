//! Application state management.
//!
//! Holds the configuration and the storage backend chosen at startup.

use mongodb::{Client, Database};

/// Storage backend selected by `USERS_STORAGE`.
#[derive(Clone)]
pub enum Backend {
    /// MongoDB client (cloneable, shares the underlying connection pool)
    MongoDb { client: Client, db: Database },
    /// Process-local store; contents are lost on restart
    Memory,
}

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub backend: Backend,
}
