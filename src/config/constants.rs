//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Message returned by the root endpoint
pub const ROOT_MESSAGE: &str = "SaaS Backend Running";

// =============================================================================
// Environment
// =============================================================================

/// Connection string for the document store
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

/// Database name inside the document store
pub const ENV_DATABASE_NAME: &str = "DATABASE_NAME";

/// Password hashing scheme for new registrations
pub const ENV_PASSWORD_SCHEME: &str = "PASSWORD_SCHEME";

// =============================================================================
// Database
// =============================================================================

/// Error text reported when no store connection is configured
pub const DATABASE_NOT_AVAILABLE: &str =
    "Database not available. Check DATABASE_URL and DATABASE_NAME environment variables.";

/// Reserved key holding the store-assigned identifier
pub const DOCUMENT_ID_KEY: &str = "_id";

/// Timestamp fields stamped on every inserted document
pub const CREATED_AT_KEY: &str = "created_at";
pub const UPDATED_AT_KEY: &str = "updated_at";

// =============================================================================
// Blog
// =============================================================================

/// Maximum number of posts returned by the blog listing
pub const BLOG_LIST_LIMIT: i64 = 20;

// =============================================================================
// Contact
// =============================================================================

/// Status marker returned for accepted contact messages
pub const CONTACT_STATUS_RECEIVED: &str = "received";

// =============================================================================
// Authentication & Security
// =============================================================================

/// Random salt length in bytes (hex encoded to twice as many characters)
pub const SALT_BYTES: usize = 8;

/// Separator between salt and digest in a stored password hash
pub const PASSWORD_HASH_SEPARATOR: char = '$';

/// Stand-in for a user document missing its password hash
pub const EMPTY_PASSWORD_HASH: &str = "$";

// =============================================================================
// Diagnostics
// =============================================================================

/// Number of collection names included in the diagnostics report
pub const DIAGNOSTIC_COLLECTION_LIMIT: usize = 10;

/// Error messages in the diagnostics report are cut to this many characters
pub const DIAGNOSTIC_ERROR_MAX_CHARS: usize = 50;
