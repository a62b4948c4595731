//! HTTP verbs understood by the dispatcher

use crate::errors::KorapayError;
use crate::impl_wire_value_conversions;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Head,
}

impl_wire_value_conversions!(HttpMethod {
    Get => "GET",
    Post => "POST",
    Put => "PUT",
    Patch => "PATCH",
    Delete => "DELETE",
    Options => "OPTIONS",
    Head => "HEAD",
});

impl HttpMethod {
    /// Parse a verb, failing with [`KorapayError::UnsupportedMethod`] for
    /// anything outside the supported set.
    pub fn parse(method: &str) -> Result<Self, KorapayError> {
        method.parse().map_err(|_| KorapayError::UnsupportedMethod(method.to_string()))
    }

    /// Whether requests with this method may carry a JSON body.
    ///
    /// GET, DELETE, OPTIONS and HEAD never send one, even when a body is
    /// supplied.
    pub const fn allows_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}
