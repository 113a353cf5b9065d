//! Database connection and initialization.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr,
    EntityTrait, Schema, Statement, TransactionTrait,
};

use super::entities::{AdvertEntity, UserEntity};
use super::session::Session;
use crate::config::DatabaseConfig;

/// Database handle owning the connection pool.
///
/// Constructed once at startup and shared through the application state;
/// handlers only ever see it through [`Session`].
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the connection pool and create any missing tables.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = Self::connect_without_schema(config).await?;
        db.create_schema().await?;

        tracing::info!("Database connected and schema ensured");

        Ok(db)
    }

    /// Open the connection pool only.
    pub async fn connect_without_schema(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url().to_owned());
        options
            .max_connections(config.max_connections)
            .sqlx_logging(config.log_sql);

        let connection = SeaDatabase::connect(options).await?;
        Ok(Self { connection })
    }

    /// Create the `user` and `advert` tables and their indexes if absent.
    ///
    /// `user` goes first since `advert.owner_id` references it.
    pub async fn create_schema(&self) -> Result<(), DbErr> {
        self.create_table(UserEntity).await?;
        self.create_table(AdvertEntity).await?;
        Ok(())
    }

    async fn create_table<E: EntityTrait>(&self, entity: E) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();
        let schema = Schema::new(backend);

        let mut table = schema.create_table_from_entity(entity);
        table.if_not_exists();
        self.connection.execute(backend.build(&table)).await?;

        for mut index in schema.create_index_from_entity(entity) {
            index.if_not_exists();
            self.connection.execute(backend.build(&index)).await?;
        }

        tracing::debug!(table = entity.table_name(), "table ensured");
        Ok(())
    }

    /// Begin a unit of work for one request.
    pub async fn session(&self) -> Result<Session, DbErr> {
        let txn = self.connection.begin().await?;
        Ok(Session::new(txn))
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }

    /// Close the pool; in-flight sessions must already be finished.
    pub async fn close(self) -> Result<(), DbErr> {
        self.connection.close().await?;
        tracing::info!("Database connection closed");
        Ok(())
    }
}
