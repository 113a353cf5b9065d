//! API layer - HTTP handlers, extractors and routes
//!
//! Request bodies are parsed and validated by [`extractors::ValidatedJson`];
//! each handler gets its own database session through the
//! [`Session`](crate::infra::Session) extractor.

pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod schemas;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
