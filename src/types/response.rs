use serde::Serialize;
use utoipa::ToSchema;

use crate::config::STATUS_DELETED;

/// Id of a newly created record
#[derive(Debug, Serialize, ToSchema)]
pub struct IdResponse {
    #[schema(example = 1)]
    pub id: i32,
}

impl IdResponse {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

/// Status-only response
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    #[schema(example = "deleted")]
    pub status: String,
}

impl StatusResponse {
    /// `{"status": "deleted"}`
    pub fn deleted() -> Self {
        Self {
            status: STATUS_DELETED.to_string(),
        }
    }
}
