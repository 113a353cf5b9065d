//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use utoipa::ToSchema;

/// Resource kinds exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Advert,
}

impl Resource {
    fn name(self) -> &'static str {
        match self {
            Resource::User => "user",
            Resource::Advert => "advert",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// First rule an input body failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationDetail {
    /// Offending field, when it can be determined
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "password")]
    pub field: Option<String>,
    /// Violated rule
    #[schema(example = "length")]
    pub code: String,
    /// Human-readable message
    #[schema(example = "Minimal length of password is 8")]
    pub message: String,
}

impl ValidationDetail {
    pub fn new(field: Option<&str>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.map(str::to_string),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid request body: {}", .0.message)]
    Validation(ValidationDetail),

    #[error("{0} not found")]
    NotFound(Resource),

    #[error("{0} already exists")]
    Conflict(Resource),

    #[error("Database error")]
    Database(#[from] DbErr),

    #[error("Internal server error")]
    Internal(String),
}

/// Error response body, `{"error": <detail>}`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(value_type = Object)]
    pub error: Value,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing detail; internal failures are logged and hidden.
    fn detail(&self) -> Value {
        match self {
            AppError::Validation(detail) => json!(detail),
            AppError::NotFound(_) | AppError::Conflict(_) => Value::String(self.to_string()),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                Value::String("internal server error".to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                Value::String("internal server error".to_string())
            }
        }
    }

    /// Classify a failed write. Unique and foreign-key violations become a
    /// conflict on `resource`; anything else stays a database error.
    pub fn from_write(err: DbErr, resource: Resource) -> Self {
        // Row deleted by a concurrent request between lookup and update.
        if matches!(err, DbErr::RecordNotUpdated) {
            return AppError::NotFound(resource);
        }

        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_))
            | Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                tracing::debug!(%resource, "constraint violation: {}", err);
                AppError::Conflict(resource)
            }
            _ => AppError::Database(err),
        }
    }

    pub fn validation(detail: ValidationDetail) -> Self {
        AppError::Validation(detail)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.detail(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, resource: Resource) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, resource: Resource) -> AppResult<T> {
        self.ok_or(AppError::NotFound(resource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(error: AppError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_names_the_resource() {
        let (status, body) = body_json(AppError::NotFound(Resource::Advert)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "advert not found" }));
    }

    #[tokio::test]
    async fn conflict_maps_to_409() {
        let (status, body) = body_json(AppError::Conflict(Resource::User)).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body, json!({ "error": "user already exists" }));
    }

    #[tokio::test]
    async fn validation_error_is_structured() {
        let detail =
            ValidationDetail::new(Some("password"), "length", "Minimal length of password is 8");
        let (status, body) = body_json(AppError::validation(detail)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "error": {
                    "field": "password",
                    "code": "length",
                    "message": "Minimal length of password is 8"
                }
            })
        );
    }

    #[tokio::test]
    async fn internal_details_are_hidden() {
        let (status, body) = body_json(AppError::Database(DbErr::Custom("boom".into()))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "internal server error" }));
    }

    #[test]
    fn non_constraint_write_errors_stay_database_errors() {
        let err = AppError::from_write(DbErr::RecordNotInserted, Resource::User);
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn vanished_row_on_update_is_not_found() {
        let err = AppError::from_write(DbErr::RecordNotUpdated, Resource::Advert);
        assert!(matches!(err, AppError::NotFound(Resource::Advert)));
    }

    #[test]
    fn missing_option_becomes_not_found() {
        let missing: Option<i32> = None;
        let err = missing.ok_or_not_found(Resource::User).unwrap_err();
        assert!(matches!(err, AppError::NotFound(Resource::User)));
    }
}
