//! Per-request unit of work.
//!
//! A [`Session`] wraps one database transaction. Every write a handler makes
//! goes through it and becomes durable only on [`Session::commit`]. A session
//! that is dropped without being committed (early return on a validation,
//! not-found or conflict error) rolls its transaction back, so the
//! connection is always released.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseTransaction, DbErr, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait,
};

/// One unit of database work, scoped to a single request.
pub struct Session {
    txn: DatabaseTransaction,
}

impl Session {
    pub(crate) fn new(txn: DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Look up a row by primary key.
    pub async fn get<E>(&self, id: i32) -> Result<Option<E::Model>, DbErr>
    where
        E: EntityTrait,
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    {
        E::find_by_id(id).one(&self.txn).await
    }

    /// Insert a new row and return it as stored, generated columns included.
    pub async fn insert<A>(&self, model: A) -> Result<<A::Entity as EntityTrait>::Model, DbErr>
    where
        A: ActiveModelTrait + ActiveModelBehavior + Send,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        model.insert(&self.txn).await
    }

    /// Write the set columns of an existing row and return it as stored.
    pub async fn update<A>(&self, model: A) -> Result<<A::Entity as EntityTrait>::Model, DbErr>
    where
        A: ActiveModelTrait + ActiveModelBehavior + Send,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        model.update(&self.txn).await
    }

    /// Delete a row by primary key. Returns whether a row was removed.
    pub async fn delete<E>(&self, id: i32) -> Result<bool, DbErr>
    where
        E: EntityTrait,
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    {
        let result = E::delete_by_id(id).exec(&self.txn).await?;
        Ok(result.rows_affected > 0)
    }

    /// Make every write of this session durable.
    pub async fn commit(self) -> Result<(), DbErr> {
        self.txn.commit().await
    }

    /// Discard every write of this session.
    pub async fn rollback(self) -> Result<(), DbErr> {
        self.txn.rollback().await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::ActiveValue::Set;

    use crate::config::DatabaseConfig;
    use crate::infra::entities::{user, UserActiveModel, UserEntity};
    use crate::infra::Database;

    async fn database() -> Database {
        let config = DatabaseConfig::from_url("sqlite::memory:").with_max_connections(1);
        Database::connect(&config).await.unwrap()
    }

    fn new_user(name: &str) -> UserActiveModel {
        UserActiveModel {
            name: Set(name.to_string()),
            password: Set("password123".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn committed_writes_are_visible_to_later_sessions() {
        let db = database().await;

        let session = db.session().await.unwrap();
        let stored = session.insert(new_user("oxana")).await.unwrap();
        session.commit().await.unwrap();

        let session = db.session().await.unwrap();
        let found = session.get::<UserEntity>(stored.id).await.unwrap();
        assert_eq!(found.map(|u| u.name), Some("oxana".to_string()));
    }

    #[tokio::test]
    async fn dropped_session_rolls_back() {
        let db = database().await;

        let session = db.session().await.unwrap();
        let stored = session.insert(new_user("ghost")).await.unwrap();
        drop(session);

        let session = db.session().await.unwrap();
        assert!(session.get::<UserEntity>(stored.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_reports_missing_rows() {
        let db = database().await;

        let session = db.session().await.unwrap();
        let stored: user::Model = session.insert(new_user("temp")).await.unwrap();
        assert!(session.delete::<UserEntity>(stored.id).await.unwrap());
        assert!(!session.delete::<UserEntity>(stored.id).await.unwrap());
        session.rollback().await.unwrap();
    }
}
