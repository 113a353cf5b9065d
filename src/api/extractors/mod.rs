//! Custom request extractors.

mod session;
mod validated_json;

pub use validated_json::ValidatedJson;
