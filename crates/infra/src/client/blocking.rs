use std::fmt;
use std::sync::Arc;

use korapay_core::{ApiRequest, CredentialResolver, Dispatcher, KorapayApi, Transport};
use korapay_domain::{ClientConfig, Credentials, Response, Result};

use super::KorapayClientBuilder;
use crate::http::BlockingHttpTransport;

/// Blocking Korapay client.
///
/// Every operation from [`KorapayApi`] returns `Result<Response>`. A
/// `status: false` reply from the API is an `Ok` response; only transport
/// failures, unparseable bodies and invalid parameters are errors. Clones
/// share credentials, configuration and the transport.
pub struct KorapayClient<T = BlockingHttpTransport> {
    dispatcher: Dispatcher,
    transport: Arc<T>,
}

impl KorapayClient {
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
        builder.build()
    }

    /// Build a client entirely from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(None, None, None)
    }

    pub fn builder() -> KorapayClientBuilder {
        KorapayClientBuilder::new()
    }
}

impl<T: Transport> KorapayClient<T> {
    pub(crate) fn from_parts(dispatcher: Dispatcher, transport: T) -> Self {
        Self { dispatcher, transport: Arc::new(transport) }
    }

    pub fn config(&self) -> &ClientConfig {
        self.dispatcher.config()
    }
}

impl<T: Transport> KorapayApi for KorapayClient<T> {
    type Output = Result<Response>;

    fn credentials(&self) -> &Credentials {
        self.dispatcher.credentials()
    }

    fn execute(&self, request: Result<ApiRequest>) -> Self::Output {
        self.dispatcher.dispatch(self.transport.as_ref(), request?)
    }
}

impl<T> Clone for KorapayClient<T> {
    fn clone(&self) -> Self {
        Self { dispatcher: self.dispatcher.clone(), transport: Arc::clone(&self.transport) }
    }
}

impl<T> fmt::Debug for KorapayClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KorapayClient").field("dispatcher", &self.dispatcher).finish_non_exhaustive()
    }
}
