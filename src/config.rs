use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_PATH: &str = "data.sqlite";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOKEN not set in environment or .env file")]
    MissingToken,

    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
}

/// Startup settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub data_path: PathBuf,
    pub port: u16,
}

impl Config {
    /// Resolve settings from the process environment.
    ///
    /// Call after `dotenvy::dotenv()` so values from a local `.env` file are
    /// visible; variables already present in the environment win.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token = lookup("TOKEN")
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let data_path = lookup("APP_DATA_PATH")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            token,
            data_path,
            port,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
