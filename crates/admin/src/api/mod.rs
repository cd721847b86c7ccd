//! REST client for the remote shop API.
//!
//! Three transport helpers sit under every resource call:
//!
//! - [`ApiClient::get`] - URL-only JSON GET
//! - [`ApiClient::send`] - JSON body with an explicit method (POST, PUT, DELETE)
//! - [`ApiClient::send_multipart`] - multipart body, used for file upload
//!
//! A 2xx response yields the decoded body. Any other status is normalized
//! into [`ApiError::Status`] carrying exactly one message. A request that
//! never gets a response surfaces as [`ApiError::Http`]; turning that into a
//! user-facing message is left to the caller.
//!
//! # API Reference
//!
//! - Base URL: `API_BASE_URL` (default `http://localhost:3000/api`)
//! - Success bodies are the raw entity or list, no envelope
//! - Error bodies carry a `message` field or are themselves the message

mod cart;
mod categories;
mod products;
mod users;

pub use users::CSV_FIELD;

use std::sync::Arc;

use reqwest::{Method, StatusCode, multipart::Form};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use url::Url;

/// Errors that can occur when talking to the shop API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be built or sent, or no response arrived
    /// (invalid multipart part, connection refused, DNS, reset...).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A 2xx body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The configured base URL is unusable.
    #[error("Invalid API base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// HTTP status of a normalized failure, if the API answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Shop API client.
///
/// Cheap to clone; all clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new client rooted at `base_url` (e.g. `http://localhost:3000/api`).
    ///
    /// # Errors
    ///
    /// Returns error if the URL does not parse or the HTTP client fails to build.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))?;
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner { client, base_url }),
        })
    }

    /// The base URL every resource path is appended to.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}{path}",
            self.inner.base_url.as_str().trim_end_matches('/')
        )
    }

    /// Execute a JSON GET request.
    #[instrument(skip(self))]
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.inner.client.get(self.url(path)).send().await?;
        handle_response(response).await
    }

    /// Execute a request with a JSON body and the given method.
    #[instrument(skip(self, body))]
    pub(crate) async fn send<T: DeserializeOwned, B: Serialize + Sync + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .inner
            .client
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        handle_response(response).await
    }

    /// Execute a multipart POST request.
    ///
    /// The content type (with its boundary) is set by the multipart encoder;
    /// the body is never JSON-serialized.
    #[instrument(skip(self, form))]
    pub(crate) async fn send_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, ApiError> {
        let response = self
            .inner
            .client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        handle_response(response).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Decode a 2xx body or normalize any other status into [`ApiError::Status`].
async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if status.is_success() {
        debug!(status = status.as_u16(), len = bytes.len(), "API response");
        return decode_body(&bytes);
    }

    let message = error_message(status, &bytes);
    warn!(status = status.as_u16(), message = %message, "API returned an error");
    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Decode a success body. An empty body decodes as JSON `null`.
fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return serde_json::from_value(Value::Null).map_err(|e| ApiError::Decode(e.to_string()));
    }
    serde_json::from_slice(bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Extract the single error message carried by a failed response.
///
/// Order: the JSON `message` field (a list of strings is joined with `, `),
/// a JSON string body, any other JSON body, a non-empty text body, then the
/// status' canonical reason.
fn error_message(status: StatusCode, bytes: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(bytes) {
        return match value {
            Value::Object(ref map) => map
                .get("message")
                .and_then(message_field)
                .unwrap_or_else(|| value.to_string()),
            Value::String(message) => message,
            Value::Null => status_reason(status),
            other => other.to_string(),
        };
    }

    let text = String::from_utf8_lossy(bytes);
    let text = text.trim();
    if text.is_empty() {
        status_reason(status)
    } else {
        text.to_string()
    }
}

/// Render a `message` field, or `None` when it is null, false, zero or empty.
fn message_field(message: &Value) -> Option<String> {
    match message {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) if number.as_i64() == Some(0) => None,
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .map(|item| match item {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                })
                .collect();
            Some(parts.join(", "))
        }
        other => Some(other.to_string()),
    }
}

fn status_reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| format!("HTTP {}", status.as_u16()), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_message_field() {
        let message = error_message(
            StatusCode::BAD_REQUEST,
            br#"{"message":"name already exists","code":17}"#,
        );
        assert_eq!(message, "name already exists");
    }

    #[test]
    fn test_error_message_joins_message_list() {
        let message = error_message(
            StatusCode::BAD_REQUEST,
            br#"{"message":["name must be longer than or equal to 5 characters","price must be a number"],"error":"Bad Request","statusCode":400}"#,
        );
        assert_eq!(
            message,
            "name must be longer than or equal to 5 characters, price must be a number"
        );
    }

    #[test]
    fn test_error_message_renders_non_string_message() {
        let message = error_message(
            StatusCode::BAD_REQUEST,
            br#"{"message":{"field":"name"}}"#,
        );
        assert_eq!(message, r#"{"field":"name"}"#);
    }

    #[test]
    fn test_error_message_ignores_empty_message() {
        for body in [
            &br#"{"message":null,"code":9}"#[..],
            br#"{"message":"","code":9}"#,
        ] {
            let message = error_message(StatusCode::BAD_REQUEST, body);
            assert!(message.contains(r#""code":9"#), "{message}");
        }
    }

    #[test]
    fn test_error_message_uses_string_body() {
        let message = error_message(StatusCode::CONFLICT, br#""duplicated email""#);
        assert_eq!(message, "duplicated email");
    }

    #[test]
    fn test_error_message_falls_back_to_json_body() {
        let message = error_message(StatusCode::UNPROCESSABLE_ENTITY, br#"{"errors":["a"]}"#);
        assert_eq!(message, r#"{"errors":["a"]}"#);
    }

    #[test]
    fn test_error_message_plain_text_and_empty() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, b"upstream down\n"),
            "upstream down"
        );
        assert_eq!(
            error_message(StatusCode::NOT_FOUND, b""),
            "Not Found".to_string()
        );
    }

    #[test]
    fn test_decode_empty_body_as_null() {
        let value: Value = decode_body(b"").unwrap();
        assert_eq!(value, Value::Null);

        let err = decode_body::<Vec<Value>>(b"  ").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:3000/api/").unwrap();
        assert_eq!(client.url("/users"), "http://localhost:3000/api/users");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ApiClient::new("not a url").unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn test_status_display_is_the_message() {
        let err = ApiError::Status {
            status: 400,
            message: "bad things".to_string(),
        };
        assert_eq!(err.to_string(), "bad things");
        assert_eq!(err.status(), Some(400));
    }
}
