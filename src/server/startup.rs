//! Process initialization run once before the server starts accepting requests.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::server::{config::Config, error::AppError};

/// Opens the SQLite database and brings its schema up to date.
///
/// SQL statement logging is disabled; request spans from the trace layer already cover
/// database work.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connection pool with all migrations applied
/// - `Err(AppError::DbErr)` - Connection or migration failure
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut options = ConnectOptions::new(&config.database_url);
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;

    Migrator::up(&db, None).await?;
    tracing::info!(database_url = %config.database_url, "Database ready");

    Ok(db)
}

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG` when set, falling back to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}
