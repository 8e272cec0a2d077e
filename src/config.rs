use crate::errors::AppError;
use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://employees.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_address: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                AppError::ConfigError(format!(
                    "DATABASE_MAX_CONNECTIONS must be a positive integer, got {:?}",
                    raw
                ))
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_address = lookup("BIND_ADDRESS")
            .filter(|addr| !addr.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Self {
            database_url,
            max_connections,
            bind_address,
        })
    }
}
