//! User domain record.

use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

/// Registered user.
///
/// The password is stored and returned as given; there is no hashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "oxana")]
    pub name: String,
    #[schema(example = "password123")]
    pub password: String,
    /// Set by the database when the row is inserted
    pub registration_time: NaiveDateTime,
}

/// One supplied field of a user update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserChange {
    Name(String),
    Password(String),
}

impl User {
    /// Apply a single field change.
    pub fn apply(&mut self, change: UserChange) {
        match change {
            UserChange::Name(name) => self.name = name,
            UserChange::Password(password) => self.password = password,
        }
    }

    /// Apply changes in order; fields without a change are left untouched.
    pub fn apply_all(&mut self, changes: impl IntoIterator<Item = UserChange>) {
        for change in changes {
            self.apply(change);
        }
    }
}
