//! Request schemas - the accepted shape of every write operation.
//!
//! Each schema is deserialized and validated by
//! [`ValidatedJson`](crate::api::extractors::ValidatedJson) before a handler
//! runs. Update schemas turn into the list of fields the client actually sent.

mod advert;
mod user;

use serde::de::{Deserialize, DeserializeOwned, Deserializer};
use validator::Validate;

pub use advert::{CreateAdvert, UpdateAdvert};
pub use user::{CreateUser, UpdateUser};

/// A validated request body.
pub trait Schema: DeserializeOwned + Validate {
    /// Field names in declaration order; the first one failing validation is
    /// the one reported.
    const FIELDS: &'static [&'static str];
}

/// Distinguish an explicit `null` (`Some(None)`) from an absent field (`None`).
/// Use together with `#[serde(default)]`.
pub(crate) fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
