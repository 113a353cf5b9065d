//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

use crate::domain::User;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, indexed)]
    pub name: String,
    #[sea_orm(indexed)]
    pub password: String,
    /// Filled in by the database on insert
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub registration_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::advert::Entity")]
    Advert,
}

impl Related<super::advert::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Advert.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain record
impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: model.id,
            name: model.name,
            password: model.password,
            registration_time: model.registration_time,
        }
    }
}

/// Write every mutable column of the record back; the id selects the row
/// and the registration time is never rewritten.
impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        ActiveModel {
            id: Unchanged(user.id),
            name: Set(user.name.clone()),
            password: Set(user.password.clone()),
            registration_time: NotSet,
        }
    }
}
