//! Primitives shared across the Korapay client crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: field validators and the [`ValidationError`] accumulator
//! - `crypto`: AES-256-GCM payload envelopes used for card charges

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod validation;

// Crypto tier
// -----------------------------------------------------------------
#[cfg(feature = "crypto")]
pub mod crypto;

#[cfg(feature = "crypto")]
pub use crypto::{CryptoError, PayloadCipher};
#[cfg(feature = "foundation")]
pub use validation::{
    EmailValidator, FieldError, FieldValidator, StringValidator, UrlValidator, ValidationError,
    ValidationResult, Validator,
};
