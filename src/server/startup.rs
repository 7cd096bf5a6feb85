use std::sync::Arc;

use serenity::{all::ApplicationId, http::Http};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    model::role_table::RoleTable,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Loads the role rank table from `ROLE_TABLE_PATH`.
///
/// # Returns
/// - `Ok(RoleTable)` - Parsed table, or an empty table when no path is configured
/// - `Err(AppError::ConfigErr)` - File unreadable or not valid role table JSON
pub async fn load_role_table(config: &Config) -> Result<RoleTable, AppError> {
    let Some(path) = config.role_table_path.as_deref() else {
        tracing::warn!("ROLE_TABLE_PATH not set, every role ranks 0");
        return Ok(RoleTable::default());
    };

    let invalid = |reason: String| ConfigError::RoleTable {
        path: path.to_string(),
        reason,
    };

    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| invalid(e.to_string()))?;
    let table = RoleTable::from_json(&json).map_err(|e| invalid(e.to_string()))?;

    tracing::info!("Loaded role table for {} guilds from {}", table.guild_count(), path);

    Ok(table)
}

/// Creates the Discord REST client used for Guild API calls and command registration.
pub fn setup_discord_http(config: &Config) -> Arc<Http> {
    let http = Http::new(&config.discord_token);
    http.set_application_id(ApplicationId::new(config.discord_application_id));

    Arc::new(http)
}
