//! Adverts API - users and the adverts they post, over HTTP
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User and advert records, partial-update changes
//! - **infra**: Database handle, SeaORM entities, per-request session
//! - **api**: HTTP handlers, extractors, request schemas and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Create the schema and start the server
//! cargo run -- serve
//!
//! # Only create the schema
//! cargo run -- init-db
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Advert, User};
pub use errors::{AppError, AppResult};
pub use infra::Database;
