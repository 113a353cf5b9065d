//! CLI module - Command-line interface for the application.
//!
//! - `serve` - Start the HTTP server
//! - `init-db` - Create the database schema

pub mod args;

pub use args::{Cli, Commands};
