use crate::{database::database_name_from_uri, utils::error::AppError};
use std::env;

pub const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017/MeanMapApp";
pub const DEFAULT_DATABASE_NAME: &str = "MeanMapApp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDB,
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_name: String,
    pub store_backend: StoreBackend,
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup (env vars in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::ConfigError(format!("PORT must be a valid port number, got '{}'", raw)))?,
            None => 3000,
        };

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let database_name = database_name_from_uri(&database_url)
            .unwrap_or(DEFAULT_DATABASE_NAME)
            .to_string();

        let store_backend = match lookup("STORE_BACKEND").as_deref().map(str::trim) {
            None | Some("") | Some("mongodb") => StoreBackend::MongoDB,
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(AppError::ConfigError(format!(
                    "STORE_BACKEND must be 'mongodb' or 'memory', got '{}'",
                    other
                )))
            }
        };

        let allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            database_url,
            database_name,
            store_backend,
            allowed_origins,
        })
    }
}
