use korapay_core::{HttpRequest, RawResponse, Transport};
use korapay_domain::{ClientConfig, KorapayError, Result};
use reqwest::blocking::Client as BlockingClient;
use tracing::debug;

use super::client::HttpTransportBuilder;
use super::to_reqwest_method;
use crate::errors::InfraError;

/// Blocking HTTP transport. Must not be driven from inside an async runtime
/// thread; use [`HttpTransport`](super::HttpTransport) there.
#[derive(Debug, Clone)]
pub struct BlockingHttpTransport {
    client: BlockingClient,
}

impl BlockingHttpTransport {
    pub fn new() -> Result<Self> {
        Self::from_builder(HttpTransportBuilder::default())
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::from_builder(HttpTransportBuilder::default().timeout(config.timeout()))
    }

    /// Build from the shared transport settings.
    pub fn from_builder(settings: HttpTransportBuilder) -> Result<Self> {
        // reqwest's blocking client applies a 30s timeout unless told otherwise
        let mut builder = BlockingClient::builder().timeout(settings.timeout);
        if settings.no_proxy {
            builder = builder.no_proxy();
        }

        let client = builder.build().map_err(|err| KorapayError::from(InfraError::from(err)))?;
        Ok(Self { client })
    }
}

impl Transport for BlockingHttpTransport {
    fn send(&self, request: HttpRequest) -> Result<RawResponse> {
        let method = to_reqwest_method(request.method);
        let mut builder = self.client.request(method.clone(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().map_err(InfraError::from)?;
        let status = response.status();
        debug!(%method, url = %request.url, %status, "received HTTP response");

        let body = response.bytes().map_err(InfraError::from)?;
        Ok(RawResponse::new(status.as_u16(), body.to_vec()))
    }
}
