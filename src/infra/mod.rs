//! Infrastructure layer - External systems integration
//!
//! - Database handle and schema creation
//! - SeaORM entities
//! - Per-request session (unit of work)

pub mod db;
pub mod entities;
pub mod session;

pub use db::Database;
pub use session::Session;
