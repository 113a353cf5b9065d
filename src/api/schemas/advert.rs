//! Advert request schemas.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::{double_option, Schema};
use crate::domain::AdvertChange;

/// Advert creation request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateAdvert {
    /// Unique advert header
    #[validate(length(max = 100, message = "Header must be at most 100 characters"))]
    #[schema(example = "Bicycle for sale", max_length = 100)]
    pub header: String,
    /// Advert body
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    #[schema(example = "Barely used, pick up only", max_length = 1000)]
    pub description: String,
    /// Id of the owning user
    #[schema(example = 1)]
    pub owner_id: i32,
}

impl Schema for CreateAdvert {
    const FIELDS: &'static [&'static str] = &["header", "description", "owner_id"];
}

/// Partial advert update; absent fields are left untouched
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateAdvert {
    /// New header
    #[validate(length(max = 100, message = "Header must be at most 100 characters"))]
    pub header: Option<String>,
    /// New description
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
    /// New owner; `null` detaches the advert from its owner
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>, example = 2)]
    pub owner_id: Option<Option<i32>>,
}

impl Schema for UpdateAdvert {
    const FIELDS: &'static [&'static str] = &["header", "description", "owner_id"];
}

impl UpdateAdvert {
    /// The fields supplied in the request, in declaration order.
    pub fn changes(self) -> Vec<AdvertChange> {
        [
            self.header.map(AdvertChange::Header),
            self.description.map(AdvertChange::Description),
            self.owner_id.map(AdvertChange::Owner),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_DESCRIPTION_LENGTH;
    use serde_json::json;

    fn update(body: serde_json::Value) -> UpdateAdvert {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn absent_owner_is_not_a_change() {
        let request = update(json!({ "header": "h2" }));
        assert_eq!(request.changes(), vec![AdvertChange::Header("h2".to_string())]);
    }

    #[test]
    fn explicit_null_owner_clears_it() {
        let request = update(json!({ "owner_id": null }));
        assert_eq!(request.changes(), vec![AdvertChange::Owner(None)]);
    }

    #[test]
    fn owner_id_is_reapplied_when_supplied() {
        let request = update(json!({ "owner_id": 4 }));
        assert_eq!(request.changes(), vec![AdvertChange::Owner(Some(4))]);
    }

    #[test]
    fn overlong_description_is_rejected() {
        let request = CreateAdvert {
            header: "h1".to_string(),
            description: "x".repeat(MAX_DESCRIPTION_LENGTH as usize + 1),
            owner_id: 1,
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("description"));
    }

    #[test]
    fn empty_header_and_description_are_accepted() {
        let request = CreateAdvert {
            header: String::new(),
            description: String::new(),
            owner_id: 1,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn null_text_fields_are_not_changes() {
        let request = update(json!({ "header": null, "description": null }));

        assert!(request.validate().is_ok());
        assert!(request.changes().is_empty());
    }

    #[test]
    fn owner_id_must_be_an_integer() {
        let result = serde_json::from_value::<CreateAdvert>(json!({
            "header": "h1",
            "description": "d1",
            "owner_id": "one"
        }));
        assert!(result.is_err());
    }
}
