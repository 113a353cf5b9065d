//! Advert domain record.

use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

/// Advert posted by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Advert {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Bicycle for sale")]
    pub header: String,
    #[schema(example = "Barely used, pick up only")]
    pub description: String,
    /// Set by the database when the row is inserted
    pub created_at: NaiveDateTime,
    /// Owning user; `null` once the owner has been deleted
    #[schema(example = 1)]
    pub owner_id: Option<i32>,
}

/// One supplied field of an advert update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvertChange {
    Header(String),
    Description(String),
    /// `None` detaches the advert from its owner
    Owner(Option<i32>),
}

impl Advert {
    /// Apply a single field change.
    pub fn apply(&mut self, change: AdvertChange) {
        match change {
            AdvertChange::Header(header) => self.header = header,
            AdvertChange::Description(description) => self.description = description,
            AdvertChange::Owner(owner_id) => self.owner_id = owner_id,
        }
    }

    /// Apply changes in order; fields without a change are left untouched.
    pub fn apply_all(&mut self, changes: impl IntoIterator<Item = AdvertChange>) {
        for change in changes {
            self.apply(change);
        }
    }
}
