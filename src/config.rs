//! Runtime configuration, read from the environment (and `.env` when present).

use std::net::SocketAddr;

use secrecy::SecretString;

use crate::ai::relay::DEFAULT_ADVICE_API_URL;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub interactions_database_path: String,
    pub stories_database_path: String,
    pub advice_api_url: String,
    /// Bearer token for the advice endpoint; requests go out unauthenticated without it.
    pub advice_api_token: Option<SecretString>,
    pub templates_glob: String,
    pub assets_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    /// Builds the configuration from `lookup`, which returns the raw value for a key if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bind_addr = var_or("BIND_ADDR", "0.0.0.0:3000");
        let bind_addr: SocketAddr = bind_addr.parse().map_err(|e| ConfigError::Invalid {
            key: "BIND_ADDR",
            message: format!("{} ({})", bind_addr, e),
        })?;

        let advice_api_token = lookup("ADVICE_API_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .map(SecretString::new);

        Ok(Self {
            bind_addr,
            interactions_database_path: var_or("INTERACTIONS_DATABASE_PATH", "user_data.db"),
            stories_database_path: var_or("STORIES_DATABASE_PATH", "upstander_stories.db"),
            advice_api_url: var_or("ADVICE_API_URL", DEFAULT_ADVICE_API_URL),
            advice_api_token,
            templates_glob: var_or("TEMPLATES_GLOB", "templates/**/*"),
            assets_dir: var_or("ASSETS_DIR", "assets"),
        })
    }
}
