//! User request schemas.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::Schema;
use crate::domain::UserChange;

/// User creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    /// Unique user name
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    #[schema(example = "oxana", max_length = 100)]
    pub name: String,
    /// User password (minimum 8 characters)
    #[validate(length(min = 8, message = "Minimal length of password is 8"))]
    #[schema(example = "password123", min_length = 8)]
    pub password: String,
}

impl Schema for CreateUser {
    const FIELDS: &'static [&'static str] = &["name", "password"];
}

/// Partial user update; absent fields are left untouched
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    /// New user name
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    #[schema(example = "oxana")]
    pub name: Option<String>,
    /// New password (minimum 8 characters)
    #[validate(length(min = 8, message = "Minimal length of password is 8"))]
    #[schema(example = "newpassword1", min_length = 8)]
    pub password: Option<String>,
}

impl Schema for UpdateUser {
    const FIELDS: &'static [&'static str] = &["name", "password"];
}

impl UpdateUser {
    /// The fields supplied in the request, in declaration order.
    pub fn changes(self) -> Vec<UserChange> {
        [
            self.name.map(UserChange::Name),
            self.password.map(UserChange::Password),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_SHORT_TEXT_LENGTH, MIN_PASSWORD_LENGTH};
    use serde_json::json;

    fn update(body: serde_json::Value) -> UpdateUser {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn short_password_fails_on_create() {
        let request = CreateUser {
            name: "oxana".to_string(),
            password: "short".to_string(),
        };

        let errors = request.validate().unwrap_err();
        let field_errors = errors.field_errors();
        let password_errors = field_errors["password"];
        assert_eq!(password_errors[0].code, "length");
        assert_eq!(
            password_errors[0].message.as_deref(),
            Some("Minimal length of password is 8")
        );
    }

    #[test]
    fn eight_character_password_is_accepted() {
        let request = CreateUser {
            name: "oxana".to_string(),
            password: "x".repeat(MIN_PASSWORD_LENGTH as usize),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn overlong_name_is_rejected() {
        let request = CreateUser {
            name: "n".repeat(MAX_SHORT_TEXT_LENGTH as usize + 1),
            password: "password123".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn empty_name_is_accepted() {
        let request = CreateUser {
            name: String::new(),
            password: "password123".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn null_name_is_not_a_change() {
        let request = update(json!({ "name": null, "password": "newpassword1" }));

        assert!(request.validate().is_ok());
        assert_eq!(
            request.changes(),
            vec![UserChange::Password("newpassword1".to_string())]
        );
    }

    #[test]
    fn short_password_fails_on_update() {
        let request = update(json!({ "password": "1234567" }));
        assert!(request.validate().is_err());
    }

    #[test]
    fn empty_update_is_valid_and_changes_nothing() {
        let request = update(json!({}));

        assert!(request.validate().is_ok());
        assert!(request.changes().is_empty());
    }

    #[test]
    fn only_supplied_fields_become_changes() {
        let request = update(json!({ "password": "newpassword1" }));

        assert_eq!(
            request.changes(),
            vec![UserChange::Password("newpassword1".to_string())]
        );
    }

    #[test]
    fn missing_required_field_fails_to_deserialize() {
        let result = serde_json::from_value::<CreateUser>(json!({ "name": "oxana" }));
        assert!(result.is_err());
    }
}
