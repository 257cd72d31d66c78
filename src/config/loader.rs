//! Load configuration from environment variables (a `.env` file is read by the binary first).

use crate::config::types::{AppConfig, DatabaseConfig, ServerConfig};
use crate::error::ConfigError;
use std::str::FromStr;

/// Read configuration from the process environment.
pub fn from_env() -> Result<AppConfig, ConfigError> {
    from_lookup(|key| std::env::var(key).ok())
}

/// Read configuration through `lookup`. Empty values count as unset.
pub fn from_lookup<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let server_defaults = ServerConfig::default();
    let db_defaults = DatabaseConfig::default();

    let server = ServerConfig {
        host: get("HOST").unwrap_or(server_defaults.host),
        port: parse_or(get("PORT"), "PORT", server_defaults.port)?,
        body_limit: parse_or(get("BODY_LIMIT_BYTES"), "BODY_LIMIT_BYTES", server_defaults.body_limit)?,
    };
    let database = DatabaseConfig {
        url: get("DATABASE_URL"),
        host: get("DB_HOST").unwrap_or(db_defaults.host),
        port: parse_or(get("DB_PORT"), "DB_PORT", db_defaults.port)?,
        user: get("DB_USER").unwrap_or(db_defaults.user),
        password: get("DB_PASSWORD"),
        database: get("DB_DATABASE").unwrap_or(db_defaults.database),
        max_connections: parse_or(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", db_defaults.max_connections)?,
    };
    Ok(AppConfig { server, database })
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
