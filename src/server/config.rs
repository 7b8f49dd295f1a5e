use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Process-wide configuration, loaded once before the listener binds.
///
/// Handed to startup code by reference and never mutated afterwards.
pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Single origin allowed by CORS. `None` allows any origin.
    pub cors_allowed_origin: Option<String>,

    /// Credential forwarded to the flow subsystem.
    pub genai_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = var("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                value: bind_address.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url,
            bind_address,
            cors_allowed_origin: var("CORS_ALLOWED_ORIGIN"),
            genai_api_key: var("GOOGLE_GENAI_API_KEY"),
        })
    }
}
