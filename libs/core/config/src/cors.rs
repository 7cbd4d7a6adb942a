use crate::{env_list, ConfigError, FromEnv};

/// Cross-origin policy for browser clients.
///
/// `CORS_ALLOWED_ORIGIN` takes a comma-separated list of origins. A single
/// `*` (also the default) means any origin is accepted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CorsConfig {
    #[default]
    AnyOrigin,
    Origins(Vec<String>),
}

impl CorsConfig {
    pub fn from_origins<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let origins: Vec<String> = origins.into_iter().map(Into::into).collect();
        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            CorsConfig::AnyOrigin
        } else {
            CorsConfig::Origins(origins)
        }
    }
}

impl FromEnv for CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::from_origins(env_list("CORS_ALLOWED_ORIGIN")))
    }
}
