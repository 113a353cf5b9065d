//! CLI command implementations.

pub mod init_db;
pub mod serve;
