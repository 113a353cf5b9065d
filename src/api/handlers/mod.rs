//! HTTP request handlers.

pub mod advert_handler;
pub mod health_handler;
pub mod user_handler;

pub use advert_handler::advert_routes;
pub use health_handler::health_check;
pub use user_handler::user_routes;

use crate::errors::{AppError, AppResult, Resource};

/// Parse the `{id}` path segment. Only plain decimal digits that fit an id
/// can name a row; anything else is reported as a missing `resource`.
pub(crate) fn record_id(raw: &str, resource: Resource) -> AppResult<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::NotFound(resource));
    }
    raw.parse().map_err(|_| AppError::NotFound(resource))
}
