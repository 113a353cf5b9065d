//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// Database
// =============================================================================

/// Default PostgreSQL host (for development)
pub const DEFAULT_POSTGRES_HOST: &str = "127.0.0.1";

/// Default PostgreSQL port
pub const DEFAULT_POSTGRES_PORT: u16 = 5432;

/// Default PostgreSQL user (for development)
pub const DEFAULT_POSTGRES_USER: &str = "postgres";

/// Default PostgreSQL password (for development)
pub const DEFAULT_POSTGRES_PASSWORD: &str = "postgres";

/// Default database name
pub const DEFAULT_POSTGRES_DB: &str = "adverts";

/// Default upper bound on pooled connections
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum length of user names and advert headers
pub const MAX_SHORT_TEXT_LENGTH: u64 = 100;

/// Maximum advert description length
pub const MAX_DESCRIPTION_LENGTH: u64 = 1000;

// =============================================================================
// Responses
// =============================================================================

/// Status reported after a successful delete
pub const STATUS_DELETED: &str = "deleted";
