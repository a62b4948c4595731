//! Request preparation: URL, headers and body policy

use std::fmt;

use korapay_domain::constants::{CLIENT_NAME, CLIENT_VERSION};
use korapay_domain::{ClientConfig, Credentials, HttpMethod};
use serde_json::Value;

use crate::operations::ApiRequest;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const USER_AGENT: &str = "User-Agent";
pub const AUTHORIZATION: &str = "Authorization";

/// A request ready for the transport: absolute URL, headers and body.
#[derive(Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(k, v)| {
                let value = if *k == AUTHORIZATION { "Bearer [REDACTED]" } else { v.as_str() };
                (*k, value)
            })
            .collect();
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("has_body", &self.body.is_some())
            .finish()
    }
}

/// `<client>-<version> Rust (<os>; <arch>)`, plus any configured suffix.
pub fn user_agent(config: &ClientConfig) -> String {
    let base = format!(
        "{CLIENT_NAME}-{CLIENT_VERSION} Rust ({}; {})",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    match config.user_agent_suffix.as_deref().filter(|s| !s.is_empty()) {
        Some(suffix) => format!("{base} {suffix}"),
        None => base,
    }
}

/// Attach the origin, headers and bearer token to a built request.
///
/// The public key authenticates public lookups; everything else uses the
/// secret key. Bodies are dropped for methods that cannot carry one.
pub fn prepare(
    request: ApiRequest,
    credentials: &Credentials,
    config: &ClientConfig,
) -> HttpRequest {
    let token =
        if request.use_public_auth { credentials.public_key() } else { credentials.secret_key() };
    let body = if request.method.allows_body() { request.body } else { None };

    HttpRequest {
        method: request.method,
        url: config.url_for(&request.endpoint),
        headers: vec![
            (CONTENT_TYPE, "application/json".to_string()),
            (USER_AGENT, user_agent(config)),
            (AUTHORIZATION, format!("Bearer {token}")),
        ],
        body,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::operations::ClientMethod;

    fn credentials() -> Credentials {
        Credentials::new("pk_test_public", "sk_test_secret", "0123456789abcdef0123456789abcdef")
    }

    #[test]
    fn secret_key_is_the_default_bearer() {
        let request = ApiRequest::for_method(ClientMethod::GetBalances);
        let prepared = prepare(request, &credentials(), &ClientConfig::default());

        assert_eq!(prepared.url, "https://api.korapay.com/merchant/api/v1/balances");
        assert_eq!(prepared.header("authorization"), Some("Bearer sk_test_secret"));
        assert_eq!(prepared.header("content-type"), Some("application/json"));
    }

    #[test]
    fn public_lookups_use_public_key() {
        let request = ApiRequest::with_segment(ClientMethod::GetBanks, "NG");
        let prepared = prepare(request, &credentials(), &ClientConfig::default());
        assert_eq!(prepared.header("Authorization"), Some("Bearer pk_test_public"));
    }

    #[test]
    fn bodyless_methods_drop_the_body() {
        for method in [HttpMethod::Get, HttpMethod::Delete, HttpMethod::Options, HttpMethod::Head] {
            let request = ApiRequest::raw(method, "/x", Some(json!({"k": "v"})), false);
            assert!(prepare(request, &credentials(), &ClientConfig::default()).body.is_none());
        }

        let request = ApiRequest::raw(HttpMethod::Put, "/x", Some(json!({"k": "v"})), false);
        assert!(prepare(request, &credentials(), &ClientConfig::default()).body.is_some());
    }

    #[test]
    fn user_agent_names_client_and_platform() {
        let agent = user_agent(&ClientConfig::default().with_user_agent_suffix("shop/1.2"));
        assert!(agent.starts_with(&format!("korapay-client-{CLIENT_VERSION} Rust (")));
        assert!(agent.ends_with(" shop/1.2"));
    }

    #[test]
    fn debug_redacts_bearer_token() {
        let request = ApiRequest::for_method(ClientMethod::GetBalances);
        let prepared = prepare(request, &credentials(), &ClientConfig::default());
        assert!(!format!("{prepared:?}").contains("sk_test_secret"));
    }
}
