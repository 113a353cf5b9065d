//! Application state shared across handlers.

use axum::extract::FromRef;

use crate::infra::Database;

/// Application state; handlers reach the database only through a
/// per-request [`Session`](crate::infra::Session).
#[derive(Clone)]
pub struct AppState {
    pub database: Database,
}

impl AppState {
    pub fn new(database: Database) -> Self {
        Self { database }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.database.clone()
    }
}
