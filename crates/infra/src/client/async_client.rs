use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;
use korapay_core::{ApiRequest, AsyncTransport, CredentialResolver, Dispatcher, KorapayApi};
use korapay_domain::{ClientConfig, Credentials, Response, Result};

use super::KorapayClientBuilder;
use crate::http::HttpTransport;

/// Async Korapay client.
///
/// Same operations and error semantics as
/// [`KorapayClient`](super::KorapayClient); each call returns a `'static`
/// future, so it can be spawned without borrowing the client. Parameter
/// validation still happens when the method is called, before the future is
/// polled, but its error is only observed by awaiting.
pub struct AsyncKorapayClient<T = HttpTransport> {
    dispatcher: Dispatcher,
    transport: Arc<T>,
}

impl AsyncKorapayClient {
    /// Build a client from explicit keys, falling back to the
    /// `KORAPAY_*_KEY` environment variables for any that are `None`.
    pub fn new(
        public_key: Option<&str>,
        secret_key: Option<&str>,
        encryption_key: Option<&str>,
    ) -> Result<Self> {
        let mut builder = KorapayClientBuilder::new().resolver(CredentialResolver::from_env());
        if let Some(key) = public_key {
            builder = builder.public_key(key);
        }
        if let Some(key) = secret_key {
            builder = builder.secret_key(key);
        }
        if let Some(key) = encryption_key {
            builder = builder.encryption_key(key);
        }
        builder.build_async()
    }

    pub fn from_env() -> Result<Self> {
        Self::new(None, None, None)
    }

    pub fn builder() -> KorapayClientBuilder {
        KorapayClientBuilder::new()
    }
}

impl<T: AsyncTransport> AsyncKorapayClient<T> {
    pub(crate) fn from_parts(dispatcher: Dispatcher, transport: T) -> Self {
        Self { dispatcher, transport: Arc::new(transport) }
    }

    pub fn config(&self) -> &ClientConfig {
        self.dispatcher.config()
    }
}

impl<T: AsyncTransport + 'static> KorapayApi for AsyncKorapayClient<T> {
    type Output = BoxFuture<'static, Result<Response>>;

    fn credentials(&self) -> &Credentials {
        self.dispatcher.credentials()
    }

    fn execute(&self, request: Result<ApiRequest>) -> Self::Output {
        let dispatcher = self.dispatcher.clone();
        let transport = Arc::clone(&self.transport);
        Box::pin(async move { dispatcher.dispatch_async(transport.as_ref(), request?).await })
    }
}

impl<T> Clone for AsyncKorapayClient<T> {
    fn clone(&self) -> Self {
        Self { dispatcher: self.dispatcher.clone(), transport: Arc::clone(&self.transport) }
    }
}

impl<T> fmt::Debug for AsyncKorapayClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncKorapayClient")
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}
