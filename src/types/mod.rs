//! Shared response types.

mod response;

pub use response::{IdResponse, StatusResponse};
