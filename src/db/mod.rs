//! Database initialization and migration runner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Startup uses this module to open the pool for whichever backend the
//! config selects, apply that backend's embedded migrations, and wrap the
//! pool in the matching [`NoteStore`]. Traffic is only accepted after this
//! succeeds, so handlers never see a half-initialized store.

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::sync::Arc;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::{Config, DatabaseConfig};
use crate::services::notes::{NoteStore, PgNoteStore, SqliteNoteStore};

/// Connect, migrate, and return the note store for `config`.
///
/// # Errors
///
/// Returns an error if the connection or migrations fail.
pub async fn init_store(config: &Config) -> Result<Arc<dyn NoteStore>, sqlx::Error> {
    match &config.database {
        DatabaseConfig::Postgres { url } => {
            let options = pg_options(url)?;
            let ssl_mode = options.get_ssl_mode();
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect_with(options)
                .await?;
            sqlx::migrate!("migrations/postgres").run(&pool).await?;
            info!(?ssl_mode, "connected to postgresql");
            Ok(Arc::new(PgNoteStore::new(pool)))
        }
        DatabaseConfig::Sqlite { path } => {
            let options = SqliteConnectOptions::new().filename(path).create_if_missing(true);
            let pool = SqlitePoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect_with(options)
                .await?;
            migrate_sqlite(&pool).await?;
            info!(path = %path.display(), "connected to sqlite");
            Ok(Arc::new(SqliteNoteStore::new(pool)))
        }
    }
}

/// Parse a Postgres connection URL.
///
/// `sslmode`, `sslrootcert` and the other libpq query parameters are honored.
/// Without `sslmode` the `PGSSLMODE` variable applies, then `prefer`, which
/// tries TLS first and falls back to plaintext.
///
/// # Errors
///
/// Returns [`sqlx::Error::Configuration`] if the URL is malformed.
pub fn pg_options(url: &str) -> Result<PgConnectOptions, sqlx::Error> {
    url.parse()
}

/// Apply the `SQLite` migrations to `pool`.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub async fn migrate_sqlite(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("migrations/sqlite").run(pool).await?;
    Ok(())
}
