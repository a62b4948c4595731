//! Shared fixtures for `korapay-core` integration tests.
//!
//! [`CapturingClient`] implements the operation set without a transport:
//! every call returns the fully prepared HTTP request, so tests can assert
//! on exactly what would go over the wire.

use korapay_core::{ApiRequest, Dispatcher, HttpRequest, KorapayApi};
use korapay_domain::{ClientConfig, Credentials, Result};

pub const PUBLIC_KEY: &str = "pk_test_capture";
pub const SECRET_KEY: &str = "sk_test_capture";
pub const ENCRYPTION_KEY: &str = "0123456789abcdef0123456789abcdef";
pub const BASE_URL: &str = "https://sandbox.invalid";

pub struct CapturingClient {
    dispatcher: Dispatcher,
}

impl CapturingClient {
    pub fn new() -> Self {
        Self {
            dispatcher: Dispatcher::new(
                Credentials::new(PUBLIC_KEY, SECRET_KEY, ENCRYPTION_KEY),
                ClientConfig::default().with_base_url(BASE_URL),
            ),
        }
    }
}

impl Default for CapturingClient {
    fn default() -> Self {
        Self::new()
    }
}

impl KorapayApi for CapturingClient {
    type Output = Result<HttpRequest>;

    fn credentials(&self) -> &Credentials {
        self.dispatcher.credentials()
    }

    fn execute(&self, request: Result<ApiRequest>) -> Self::Output {
        request.map(|request| self.dispatcher.prepare(request))
    }
}

pub fn bearer(key: &str) -> String {
    format!("Bearer {key}")
}
