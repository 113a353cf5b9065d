//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use validator::ValidationErrors;

use crate::api::schemas::Schema;
use crate::errors::{AppError, ValidationDetail};

/// JSON extractor that validates the payload against its [`Schema`].
///
/// Any failure, from a missing content type to a too-short password, is
/// reported as a 400 naming the first problem found.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: Schema,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(rejection_detail(&e)))?;

        value
            .validate()
            .map_err(|e| AppError::validation(first_violation::<T>(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Describe a body that could not be deserialized at all.
fn rejection_detail(rejection: &JsonRejection) -> ValidationDetail {
    let message = rejection.body_text();

    match rejection {
        JsonRejection::JsonDataError(_) => match missing_field(&message) {
            Some(field) => {
                ValidationDetail::new(Some(field), "missing", format!("Field required: {field}"))
            }
            None => ValidationDetail::new(None, "type_error", message.as_str()),
        },
        JsonRejection::JsonSyntaxError(_) => {
            ValidationDetail::new(None, "json_invalid", message.as_str())
        }
        JsonRejection::MissingJsonContentType(_) => {
            ValidationDetail::new(None, "content_type", message.as_str())
        }
        _ => ValidationDetail::new(None, "invalid_body", message.as_str()),
    }
}

/// Pull the field name out of serde's "missing field `name`" message.
fn missing_field(message: &str) -> Option<&str> {
    let (_, rest) = message.split_once("missing field `")?;
    rest.split_once('`').map(|(field, _)| field)
}

/// Pick the first failing field in schema declaration order.
fn first_violation<T: Schema>(errors: &ValidationErrors) -> ValidationDetail {
    let field_errors = errors.field_errors();

    T::FIELDS
        .iter()
        .find_map(|field| {
            field_errors
                .get(*field)
                .and_then(|errs| errs.first())
                .map(|error| (*field, error))
        })
        .map(|(field, error)| {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field));
            ValidationDetail::new(Some(field), error.code.to_string(), message)
        })
        .unwrap_or_else(|| ValidationDetail::new(None, "invalid", "Validation failed"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::schemas::{CreateUser, UpdateAdvert};
    use crate::config::MAX_SHORT_TEXT_LENGTH;
    use validator::Validate;

    #[test]
    fn extracts_missing_field_name() {
        let message = "Failed to deserialize the JSON body into the target type: \
                       missing field `password` at line 1 column 17";
        assert_eq!(missing_field(message), Some("password"));
    }

    #[test]
    fn other_messages_have_no_field() {
        assert_eq!(missing_field("invalid type: integer `5`, expected a string"), None);
    }

    #[test]
    fn reports_first_field_in_declaration_order() {
        let request = CreateUser {
            name: "n".repeat(MAX_SHORT_TEXT_LENGTH as usize + 1),
            password: "short".to_string(),
        };
        let errors = request.validate().unwrap_err();

        let detail = first_violation::<CreateUser>(&errors);
        assert_eq!(detail.field.as_deref(), Some("name"));
        assert_eq!(detail.code, "length");
    }

    #[test]
    fn reports_message_of_violated_rule() {
        let request: UpdateAdvert = serde_json::from_value(serde_json::json!({
            "header": "h".repeat(MAX_SHORT_TEXT_LENGTH as usize + 1)
        }))
        .unwrap();
        let errors = request.validate().unwrap_err();

        let detail = first_violation::<UpdateAdvert>(&errors);
        assert_eq!(detail.field.as_deref(), Some("header"));
        assert_eq!(detail.message, "Header must be at most 100 characters");
    }
}
