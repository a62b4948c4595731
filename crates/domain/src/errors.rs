//! Error types used throughout the client
//!
//! Transport and protocol failures are errors; business outcomes reported by
//! the remote API (`status: false`) are not. Those come back as a normal
//! [`Response`](crate::Response).

use std::fmt;

use thiserror::Error;

use crate::types::CredentialKind;

/// Boxed cause carried by [`KorapayError::Client`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A single rejected parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Dotted path of the offending field (`customer.email`)
    pub field: String,
    /// Human-readable reason
    pub reason: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { field: field.into(), reason: reason.into() }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Main error type for the Korapay client
#[derive(Error, Debug)]
pub enum KorapayError {
    /// A credential was neither passed explicitly nor found in the environment.
    #[error(
        "Client could not find any {credential} key. Provide it on instantiation of the client \
         or set the {env_var} environment variable"
    )]
    MissingCredential { credential: CredentialKind, env_var: &'static str },

    /// Caller input violated a parameter model; raised before any network I/O.
    #[error("Invalid parameters: {}", join_violations(.violations))]
    ParameterValidation { violations: Vec<FieldViolation> },

    /// The encryption key is absent or malformed.
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// An HTTP method with no handler was requested.
    #[error("HTTP request method not recognized or supported: {0}")]
    UnsupportedMethod(String),

    /// Transport failure or a response body that is not JSON.
    #[error("{message}")]
    Client {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Client configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl KorapayError {
    /// Build a `Client` error without an underlying cause.
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client { message: message.into(), source: None }
    }

    /// Build a `Client` error wrapping the transport failure that caused it.
    pub fn client_with_source(
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Client { message: message.into(), source: Some(source.into()) }
    }

    /// Build a `ParameterValidation` error for one field.
    pub fn invalid_parameter(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ParameterValidation { violations: vec![FieldViolation::new(field, reason)] }
    }

    /// Names of the rejected fields, if this is a validation error.
    pub fn invalid_fields(&self) -> Vec<&str> {
        match self {
            Self::ParameterValidation { violations } => {
                violations.iter().map(|v| v.field.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Result type alias for Korapay operations
pub type Result<T> = std::result::Result<T, KorapayError>;
