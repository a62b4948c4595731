use std::time::Duration;

use async_trait::async_trait;
use korapay_core::{AsyncTransport, HttpRequest, RawResponse};
use korapay_domain::{ClientConfig, KorapayError, Result};
use reqwest::Client as ReqwestClient;
use tracing::debug;

use super::to_reqwest_method;
use crate::errors::InfraError;

/// Async HTTP transport. One request per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: ReqwestClient,
}

impl HttpTransport {
    /// Start building a new transport.
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::default()
    }

    /// Transport with default settings (no timeout).
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Transport honoring the timeout in `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::builder().timeout(config.timeout()).build()
    }
}

#[async_trait]
impl AsyncTransport for HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse> {
        let method = to_reqwest_method(request.method);
        let mut builder = self.client.request(method.clone(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(InfraError::from)?;
        let status = response.status();
        debug!(%method, url = %request.url, %status, "received HTTP response");

        let body = response.bytes().await.map_err(InfraError::from)?;
        Ok(RawResponse::new(status.as_u16(), body.to_vec()))
    }
}

/// Builder for [`HttpTransport`] and
/// [`BlockingHttpTransport`](super::BlockingHttpTransport).
#[derive(Debug, Default, Clone)]
pub struct HttpTransportBuilder {
    pub(crate) timeout: Option<Duration>,
    pub(crate) no_proxy: bool,
}

impl HttpTransportBuilder {
    /// Total time allowed per request; `None` waits indefinitely.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Ignore system proxy settings.
    pub fn no_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }

    pub fn build(self) -> Result<HttpTransport> {
        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if self.no_proxy {
            builder = builder.no_proxy();
        }

        let client = builder.build().map_err(|err| KorapayError::from(InfraError::from(err)))?;
        Ok(HttpTransport { client })
    }
}
