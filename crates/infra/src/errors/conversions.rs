//! Conversions from external infrastructure errors into client errors.

use korapay_domain::KorapayError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the client error.
#[derive(Debug)]
pub struct InfraError(pub KorapayError);

impl From<InfraError> for KorapayError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<KorapayError> for InfraError {
    fn from(value: KorapayError) -> Self {
        InfraError(value)
    }
}

trait IntoKorapayError {
    fn into_korapay(self) -> KorapayError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → KorapayError */
/* -------------------------------------------------------------------------- */

impl IntoKorapayError for HttpError {
    fn into_korapay(self) -> KorapayError {
        let summary = if self.is_timeout() {
            "HTTP request timed out"
        } else if self.is_connect() {
            "HTTP connection failure"
        } else if self.is_builder() {
            "HTTP request could not be built"
        } else if self.is_body() || self.is_decode() {
            "HTTP response body could not be read"
        } else {
            "HTTP request failed"
        };

        KorapayError::client_with_source(format!("{summary}: {self}"), self)
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_korapay())
    }
}

/* -------------------------------------------------------------------------- */
/* dotenvy::Error → KorapayError */
/* -------------------------------------------------------------------------- */

impl IntoKorapayError for dotenvy::Error {
    fn into_korapay(self) -> KorapayError {
        KorapayError::Config(format!("Failed to load .env file: {self}"))
    }
}

impl From<dotenvy::Error> for InfraError {
    fn from(value: dotenvy::Error) -> Self {
        InfraError(value.into_korapay())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
