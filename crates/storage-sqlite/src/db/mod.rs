//! Connection pool, migrations and the single-writer actor.

use log::{error, info};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use diesel::connection::{Connection, SimpleConnection};
use diesel::r2d2::{self, ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::errors::{IntoCore, StorageError};
use networth_core::errors::{DatabaseError, Error, Result};

pub mod write_actor;
pub use write_actor::{spawn_writer, WriteHandle};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// File name used when the database path is derived from a data directory.
pub const DB_FILE_NAME: &str = "networth.db";

/// Creates the database file's directory and switches the file to WAL mode.
///
/// Returns the path that should be handed to [`create_pool`].
pub fn init(db_path: &str) -> Result<String> {
    if let Some(db_dir) = Path::new(db_path).parent() {
        if !db_dir.as_os_str().is_empty() && !db_dir.exists() {
            fs::create_dir_all(db_dir).map_err(|e| {
                error!("Failed to create database directory {:?}: {}", db_dir, e);
                Error::Database(DatabaseError::ConnectionFailed(e.to_string()))
            })?;
        }
    }

    let mut conn = SqliteConnection::establish(db_path).map_err(StorageError::from)?;
    conn.batch_execute(
        "
            PRAGMA journal_mode = WAL;
            PRAGMA foreign_keys = ON;
            PRAGMA busy_timeout = 30000;
            PRAGMA synchronous  = NORMAL;
        ",
    )
    .into_core()?;

    Ok(db_path.to_string())
}

/// Resolves the database path: `DATABASE_URL` wins, else `<data_dir>/networth.db`.
pub fn get_db_path(data_dir: &str) -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        Path::new(data_dir)
            .join(DB_FILE_NAME)
            .to_string_lossy()
            .into_owned()
    })
}

pub fn create_pool(db_path: &str) -> Result<Arc<DbPool>> {
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = Pool::builder()
        .max_size(8)
        .min_idle(Some(1))
        .connection_timeout(Duration::from_secs(30))
        .connection_customizer(Box::new(ConnectionCustomizer))
        .build(manager)
        .map_err(|e| Error::Database(DatabaseError::PoolCreationFailed(e.to_string())))?;
    Ok(Arc::new(pool))
}

pub fn run_migrations(pool: &DbPool) -> Result<()> {
    info!("Running database migrations");
    let mut connection = get_connection(pool)?;

    let applied = connection.run_pending_migrations(MIGRATIONS).map_err(|e| {
        error!("Database migration failed: {}", e);
        Error::from(StorageError::MigrationFailed(e.to_string()))
    })?;

    if applied.is_empty() {
        info!("No pending migrations to apply.");
    } else {
        info!("Applied the following migrations:");
        for migration_version in &applied {
            info!("  - {}", migration_version);
        }
    }

    Ok(())
}

pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    pool.get().into_core()
}

#[derive(Debug)]
struct ConnectionCustomizer;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), r2d2::Error> {
        conn.batch_execute(
            "
            PRAGMA foreign_keys = ON;
            PRAGMA busy_timeout = 30000;
            PRAGMA synchronous = NORMAL;
        ",
        )
        .map_err(r2d2::Error::QueryError)
    }
}
