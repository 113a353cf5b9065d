//! Init-db command - creates the schema without serving.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the init-db command
pub async fn execute(config: Config) -> AppResult<()> {
    tracing::info!("Creating database schema...");

    let db = Database::connect(&config.database)
        .await
        .map_err(|e| AppError::internal(format!("Database initialization failed: {}", e)))?;
    db.close().await?;

    tracing::info!("Database schema is up to date");
    Ok(())
}
