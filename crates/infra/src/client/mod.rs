//! Concrete Korapay clients
//!
//! [`KorapayClient`] blocks the calling thread; [`AsyncKorapayClient`]
//! returns futures. Both get every operation from
//! [`KorapayApi`](korapay_core::KorapayApi) and differ only in how a built
//! request is executed.

mod async_client;
mod blocking;
mod builder;

pub use async_client::AsyncKorapayClient;
pub use blocking::KorapayClient;
pub use builder::KorapayClientBuilder;
