//! # Korapay Core
//!
//! Request construction for the Korapay API, with no I/O of its own.
//!
//! This crate contains:
//! - Parameter models that validate caller input and reshape it into wire
//!   documents
//! - The operation table and one pure builder per operation
//! - Request preparation (origin, headers, bearer token) and response
//!   normalization
//! - Transport ports and the [`KorapayApi`] operation set shared by the
//!   blocking and async clients
//!
//! ## Architecture Principles
//! - Depends only on `korapay-common` and `korapay-domain`
//! - The HTTP call happens behind [`Transport`] / [`AsyncTransport`]
//! - Everything before the call is synchronous and deterministic, apart
//!   from the random nonce of card encryption

pub mod api;
pub mod credentials;
pub mod dispatch;
pub mod operations;
pub mod params;
pub mod ports;
pub mod request;
pub mod response;

pub use api::KorapayApi;
pub use credentials::CredentialResolver;
pub use dispatch::Dispatcher;
pub use operations::{ApiRequest, ClientMethod};
pub use params::{
    BulkPayoutParams, ChargeViaBankTransferParams, ChargeViaCardParams,
    ChargeViaMobileMoneyParams, CreateVirtualBankAccountParams, InitiateChargeParams,
    OperationParams, PayoutToBankAccountParams, PayoutToMobileMoneyParams, Validate,
};
pub use ports::{AsyncTransport, Transport};
pub use request::HttpRequest;
pub use response::RawResponse;
