//! Transport ports
//!
//! The only side effect in the client is the HTTP call. Infrastructure
//! provides it through one of these traits; every HTTP status code is a
//! successful transport result, only network-level failures are errors.

use async_trait::async_trait;
use korapay_domain::Result;

use crate::request::HttpRequest;
use crate::response::RawResponse;

/// Blocking HTTP transport; occupies the calling thread until the response
/// arrives.
pub trait Transport: Send + Sync {
    /// Send one request.
    ///
    /// # Errors
    /// Returns [`KorapayError::Client`](korapay_domain::KorapayError::Client)
    /// wrapping the cause for connection, DNS, TLS and timeout failures.
    fn send(&self, request: HttpRequest) -> Result<RawResponse>;
}

/// Non-blocking HTTP transport; the returned future is the only suspension
/// point of an operation.
#[async_trait]
pub trait AsyncTransport: Send + Sync {
    /// Send one request. Errors as for [`Transport::send`].
    async fn send(&self, request: HttpRequest) -> Result<RawResponse>;
}
