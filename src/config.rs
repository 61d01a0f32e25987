// src/config.rs

use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::shared::pagination::{PaginationConfig, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabasePoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub pool: DatabasePoolConfig,
    pub pagination: PaginationConfig,
    pub run_migrations: bool,
}

impl AppConfig {
    #[cfg(not(tarpaulin_include))]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let pool = DatabasePoolConfig {
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 50)?,
            min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", 10)?,
            connect_timeout: Duration::from_secs(parse_or(&lookup, "DB_CONNECT_TIMEOUT_SECS", 5)?),
        };

        let pagination = PaginationConfig {
            default_limit: parse_or(&lookup, "PAGINATION_DEFAULT_LIMIT", DEFAULT_PAGE_LIMIT)?,
            max_limit: parse_or(&lookup, "PAGINATION_MAX_LIMIT", MAX_PAGE_LIMIT)?,
        };

        if pagination.default_limit == 0 || pagination.default_limit > pagination.max_limit {
            return Err(ConfigError::Invalid {
                key: "PAGINATION_DEFAULT_LIMIT",
                value: pagination.default_limit.to_string(),
            });
        }

        Ok(Self {
            database_url,
            pool,
            pagination,
            run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", true)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

/// Loads `.env.{RUST_ENV}` and falls back to `.env`.
#[cfg(not(tarpaulin_include))]
pub fn load_env_files() {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}
