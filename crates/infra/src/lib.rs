//! # Korapay Infrastructure
//!
//! The concrete, I/O-performing side of the Korapay client.
//!
//! This crate contains:
//! - reqwest-backed implementations of the transport ports
//! - Configuration loading (environment, `.env`, TOML/JSON files)
//! - [`KorapayClient`] and [`AsyncKorapayClient`], the public entry points
//!
//! ## Architecture
//! - Implements traits defined in `korapay-core`
//! - Contains all "impure" code (network, filesystem, process environment)
//!
//! ```no_run
//! use korapay_infra::{Country, KorapayApi, KorapayClient};
//!
//! let client = KorapayClient::from_env()?;
//! let banks = client.get_banks(Country::Nigeria)?;
//! if banks.is_success() {
//!     println!("{:?}", banks.data);
//! }
//! # Ok::<(), korapay_infra::KorapayError>(())
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use client::{AsyncKorapayClient, KorapayClient, KorapayClientBuilder};
pub use errors::InfraError;
pub use http::{BlockingHttpTransport, HttpTransport, HttpTransportBuilder};
pub use korapay_core::{
    BulkPayoutParams, ChargeViaBankTransferParams, ChargeViaCardParams,
    ChargeViaMobileMoneyParams, CreateVirtualBankAccountParams, CredentialResolver,
    InitiateChargeParams, KorapayApi, PayoutToBankAccountParams, PayoutToMobileMoneyParams,
};
pub use korapay_domain::{
    constants, Amount, Authorization, Avs, BankAccount, Card, ClientConfig, Country,
    CredentialKind, Credentials, Currency, Customer, Decimal, FieldViolation, HttpMethod,
    KorapayError, Metadata, MobileMoneyOperator, PaymentChannel, PayoutOrder, PayoutType,
    Response, Result,
};
