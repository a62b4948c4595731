//! Response normalization
//!
//! Transport and protocol failures become errors. Anything that parses as
//! JSON becomes a [`Response`], including business failures such as a 409
//! with `status: false`.

use korapay_domain::{KorapayError, Response, Result};
use serde_json::Value;
use tracing::warn;

/// Status code and body exactly as the transport received them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status_code: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status_code: u16, body: impl Into<Vec<u8>>) -> Self {
        Self { status_code, body: body.into() }
    }
}

/// Map a raw transport result onto the uniform [`Response`].
///
/// # Errors
/// Returns [`KorapayError::Client`] when the body is not valid JSON. The
/// message carries the status code and the body text.
pub fn normalize(raw: RawResponse) -> Result<Response> {
    let value: Value = serde_json::from_slice(&raw.body).map_err(|e| {
        let content = String::from_utf8_lossy(&raw.body);
        warn!(status_code = raw.status_code, "response body is not valid JSON");
        KorapayError::client_with_source(
            format!(
                "Unable to parse server response as json data: status_code: {} content: {}",
                raw.status_code, content
            ),
            e,
        )
    })?;

    let Value::Object(mut fields) = value else {
        return Ok(Response {
            status_code: raw.status_code,
            status: false,
            message: String::new(),
            data: None,
        });
    };

    Ok(Response {
        status_code: raw.status_code,
        status: fields.get("status").and_then(Value::as_bool).unwrap_or(false),
        message: fields.get("message").and_then(Value::as_str).unwrap_or_default().to_string(),
        data: fields.remove("data").filter(|data| !data.is_null()),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn business_failure_is_data_not_error() {
        let response =
            normalize(RawResponse::new(409, r#"{"status":false,"message":"conflict"}"#)).unwrap();
        assert_eq!(
            response,
            Response { status_code: 409, status: false, message: "conflict".into(), data: None }
        );
    }

    #[test]
    fn non_json_body_is_a_client_error() {
        let err = normalize(RawResponse::new(200, "Welcome")).unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, KorapayError::Client { .. }));
        assert!(message.contains("200"));
        assert!(message.contains("Welcome"));
    }

    #[test]
    fn data_passes_through() {
        let body = json!({"status": true, "message": "Successful", "data": [{"code": "033"}]});
        let response = normalize(RawResponse::new(200, body.to_string())).unwrap();
        assert!(response.is_success());
        assert_eq!(response.data, Some(json!([{"code": "033"}])));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let response = normalize(RawResponse::new(502, "{}")).unwrap();
        assert!(!response.status);
        assert_eq!(response.message, "");
        assert_eq!(response.data, None);
    }

    #[test]
    fn non_object_json_takes_defaults() {
        let response = normalize(RawResponse::new(200, "[1, 2]")).unwrap();
        assert_eq!(response.status_code, 200);
        assert!(!response.status);
        assert_eq!(response.data, None);
    }

    #[test]
    fn mistyped_fields_fall_back_to_defaults() {
        let response =
            normalize(RawResponse::new(200, r#"{"status":"yes","message":42,"data":null}"#)).unwrap();
        assert!(!response.status);
        assert_eq!(response.message, "");
        assert_eq!(response.data, None);
    }
}
