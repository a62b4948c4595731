//! Client-wide constants
//!
//! Centralized location for wire limits, default endpoints and the names of
//! the environment variables the client reads.

// Remote API
pub const DEFAULT_BASE_URL: &str = "https://api.korapay.com";
pub const CLIENT_NAME: &str = "korapay-client";
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

// Credential environment variables
pub const ENV_PUBLIC_KEY: &str = "KORAPAY_PUBLIC_KEY";
pub const ENV_SECRET_KEY: &str = "KORAPAY_SECRET_KEY";
pub const ENV_ENCRYPTION_KEY: &str = "KORAPAY_ENCRYPTION_KEY";

// Client configuration environment variables
pub const ENV_BASE_URL: &str = "KORAPAY_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "KORAPAY_TIMEOUT_SECS";

// Metadata limits
pub const MAX_METADATA_FIELDS: usize = 5;
pub const MAX_METADATA_KEY_LENGTH: usize = 20;
