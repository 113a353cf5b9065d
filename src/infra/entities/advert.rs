//! Advert database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

use crate::domain::Advert;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "advert")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, indexed)]
    pub header: String,
    #[sea_orm(indexed)]
    pub description: String,
    /// Filled in by the database on insert
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTime,
    pub owner_id: Option<i32>,
}

/// Deleting a user orphans its adverts instead of removing them.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Owner,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain record
impl From<Model> for Advert {
    fn from(model: Model) -> Self {
        Advert {
            id: model.id,
            header: model.header,
            description: model.description,
            created_at: model.created_at,
            owner_id: model.owner_id,
        }
    }
}

impl From<&Advert> for ActiveModel {
    fn from(advert: &Advert) -> Self {
        ActiveModel {
            id: Unchanged(advert.id),
            header: Set(advert.header.clone()),
            description: Set(advert.description.clone()),
            created_at: NotSet,
            owner_id: Set(advert.owner_id),
        }
    }
}
