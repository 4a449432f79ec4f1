//! Server configuration parsed from environment variables.
//!
//! Variables (all optional; a `.env` file is loaded first when present):
//! - `PORT`: listen port, default 3001
//! - `DATABASE_URL`: selects `PostgreSQL` when set. TLS follows the URL's
//!   `sslmode` parameter (`disable`, `prefer`, `require`, `verify-ca`,
//!   `verify-full`); without it `PGSSLMODE` or `prefer` applies. Hosted
//!   providers usually need `?sslmode=require`.
//! - `NOTES_DB_PATH`: `SQLite` file used otherwise, default `notes.db`
//! - `DB_MAX_CONNECTIONS`: pool size, default 5

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_SQLITE_PATH: &str = "notes.db";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("DATABASE_URL is set but empty")]
    EmptyDatabaseUrl,
}

/// Which database backs the note store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    Postgres { url: String },
    Sqlite { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub database: DatabaseConfig,
    pub db_max_connections: u32,
}

impl Config {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `PORT` is not a valid port number or
    /// `DATABASE_URL` is present but blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let database = match lookup("DATABASE_URL") {
            Some(url) if url.trim().is_empty() => return Err(ConfigError::EmptyDatabaseUrl),
            Some(url) => DatabaseConfig::Postgres { url },
            None => DatabaseConfig::Sqlite {
                path: lookup("NOTES_DB_PATH").map_or_else(|| PathBuf::from(DEFAULT_SQLITE_PATH), PathBuf::from),
            },
        };

        let db_max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS);

        Ok(Self { port, database, db_max_connections })
    }
}
