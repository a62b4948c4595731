use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized result of any client operation.
///
/// Business failures reported by the remote API (non-2xx status codes with a
/// JSON body) arrive here with `status == false`; they are never surfaced as
/// errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub status_code: u16,
    pub status: bool,
    pub message: String,
    pub data: Option<Value>,
}

impl Response {
    /// True when the HTTP status was 2xx and the API reported success.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code) && self.status
    }

    /// Deserialize the `data` payload into a caller-chosen type.
    pub fn data_as<T: DeserializeOwned>(&self) -> Option<serde_json::Result<T>> {
        self.data.clone().map(serde_json::from_value)
    }
}
