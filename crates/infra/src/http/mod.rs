//! reqwest-backed implementations of the transport ports

mod blocking;
mod client;

pub use blocking::BlockingHttpTransport;
pub use client::{HttpTransport, HttpTransportBuilder};

use korapay_domain::HttpMethod;
use reqwest::Method;

pub(crate) fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
        HttpMethod::Options => Method::OPTIONS,
        HttpMethod::Head => Method::HEAD,
    }
}
