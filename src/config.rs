use std::collections::HashMap;
use std::net::IpAddr;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_path: String,
    pub public_dir: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let host = env_map
            .get("HOST")
            .map(|s| s.as_str())
            .unwrap_or("127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|_| {
                ConfigError::InvalidValue("HOST".to_string(), "must be an IP address".to_string())
            })?;

        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("3000")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .unwrap_or_else(|| "data/game_library.db".to_string());
        if database_path.trim().is_empty() {
            return Err(ConfigError::MissingEnv("DATABASE_PATH".to_string()));
        }

        let public_dir = env_map
            .get("PUBLIC_DIR")
            .cloned()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "public".to_string());

        Ok(Config {
            host,
            port,
            database_path,
            public_dir,
        })
    }
}
