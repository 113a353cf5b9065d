//! Session extractor - one unit of work per request.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::errors::AppError;
use crate::infra::{Database, Session};

/// Opens a [`Session`] before the handler runs. The handler owns it from then
/// on: committing consumes it, any other exit drops it and rolls back.
#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    Database: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let database = Database::from_ref(state);
        Ok(database.session().await?)
    }
}
