//! Request dispatch
//!
//! Attaches credentials, hands the request to a transport and normalizes
//! whatever comes back. Nothing here retries.

use std::sync::Arc;

use korapay_domain::{ClientConfig, Credentials, KorapayError, Response, Result};
use tracing::{debug, instrument, warn};

use crate::operations::ApiRequest;
use crate::ports::{AsyncTransport, Transport};
use crate::request::{self, HttpRequest};
use crate::response::{self, RawResponse};

/// Shared per-client state: immutable after construction, cheap to clone.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    credentials: Arc<Credentials>,
    config: Arc<ClientConfig>,
}

impl Dispatcher {
    pub fn new(credentials: Credentials, config: ClientConfig) -> Self {
        Self { credentials: Arc::new(credentials), config: Arc::new(config) }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn prepare(&self, request: ApiRequest) -> HttpRequest {
        request::prepare(request, &self.credentials, &self.config)
    }

    /// Send `request` through a blocking transport.
    #[instrument(
        skip_all,
        fields(operation = request.label(), method = %request.method, endpoint = %request.endpoint)
    )]
    pub fn dispatch<T>(&self, transport: &T, request: ApiRequest) -> Result<Response>
    where
        T: Transport + ?Sized,
    {
        let prepared = self.prepare(request);
        debug!("sending request");
        let raw = transport.send(prepared).map_err(log_transport_failure)?;
        finish(raw)
    }

    /// Send `request` through an async transport.
    #[instrument(
        skip_all,
        fields(operation = request.label(), method = %request.method, endpoint = %request.endpoint)
    )]
    pub async fn dispatch_async<T>(&self, transport: &T, request: ApiRequest) -> Result<Response>
    where
        T: AsyncTransport + ?Sized,
    {
        let prepared = self.prepare(request);
        debug!("sending request");
        let raw = transport.send(prepared).await.map_err(log_transport_failure)?;
        finish(raw)
    }
}

fn log_transport_failure(err: KorapayError) -> KorapayError {
    warn!(error = %err, "transport failure");
    err
}

fn finish(raw: RawResponse) -> Result<Response> {
    debug!(status_code = raw.status_code, "response received");
    response::normalize(raw)
}
