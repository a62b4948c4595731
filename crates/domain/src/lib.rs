//! # Korapay Domain
//!
//! Value types and models shared by every layer of the Korapay client.
//!
//! This crate contains:
//! - Closed enumerations used on the wire (currency, country, channel, ...)
//! - Caller-facing value types (`Card`, `Customer`, `PayoutOrder`, ...)
//! - The uniform [`Response`] returned by every API call
//! - The [`KorapayError`] taxonomy and [`Result`] alias
//! - [`ClientConfig`], the serializable client settings
//!
//! ## Architecture
//! - No dependencies on other Korapay crates
//! - No I/O; pure data and serde wiring

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::ClientConfig;
pub use errors::*;
pub use types::*;
