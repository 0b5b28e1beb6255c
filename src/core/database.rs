//! Database - Creazione del pool SQLite e applicazione delle migrations

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Apre il pool di connessioni verso `database_url`
///
/// Le foreign key sono sempre attive: la cancellazione di un profilo
/// deve propagarsi ai suoi stati.
///
/// # Arguments
/// * `database_url` - URL SQLite (es. `sqlite:profiles.db?mode=rwc` o `sqlite::memory:`)
/// * `max_connections` - Numero massimo di connessioni nel pool
/// * `max_lifetime` - Durata massima di una connessione, `None` per nessun limite
#[instrument(skip(database_url))]
pub async fn connect(
    database_url: &str,
    max_connections: u32,
    max_lifetime: Option<Duration>,
) -> Result<SqlitePool, sqlx::Error> {
    debug!("Opening SQLite connection pool");
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(max_lifetime)
        .connect_with(options)
        .await?;

    info!("Database pool ready");
    Ok(pool)
}

/// Applica le migrations in `./migrations`
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
