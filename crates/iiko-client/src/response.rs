//! HTTP responses returned by a transport.

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::error::{Error, ErrorKind, Result};
use crate::security;

/// Longest body excerpt carried in an error message.
const ERROR_BODY_LIMIT: usize = 256;

/// Raw response as produced by a [`Transport`](crate::Transport).
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Wrapper around a raw response with decoding helpers.
///
/// Status codes are not interpreted until [`Response::error_for_status`]
/// is called.
#[derive(Debug, Clone)]
pub struct Response {
    inner: HttpResponse,
}

impl Response {
    pub fn new(inner: HttpResponse) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.inner.status)
    }

    /// Get a header value (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner
            .headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Body bytes.
    pub fn bytes(&self) -> &Bytes {
        &self.inner.body
    }

    /// Body decoded as UTF-8.
    pub fn text(&self) -> Result<String> {
        String::from_utf8(self.inner.body.to_vec()).map_err(|e| {
            Error::with_source(
                ErrorKind::Other("Failed to decode response as UTF-8".to_string()),
                e,
            )
        })
    }

    /// Deserialize the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.inner.body).map_err(Into::into)
    }

    /// Turn a non-success status into [`ErrorKind::Http`].
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }
        Err(Error::new(ErrorKind::Http {
            status: self.status(),
            message: self.error_message(),
        }))
    }

    /// Short, redacted excerpt of the body for error messages.
    pub fn error_message(&self) -> String {
        let body = String::from_utf8_lossy(&self.inner.body);
        let body = body.trim();
        let excerpt: String = body.chars().take(ERROR_BODY_LIMIT).collect();
        security::redact(&excerpt)
    }

    /// Get access to the raw response.
    pub fn into_inner(self) -> HttpResponse {
        self.inner
    }
}

impl From<HttpResponse> for Response {
    fn from(inner: HttpResponse) -> Self {
        Self::new(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_helpers() {
        let response = Response::new(HttpResponse::new(200, "ok"));
        assert!(response.is_success());
        assert_eq!(response.text().unwrap(), "ok");

        let response = Response::new(HttpResponse::new(401, "denied"));
        assert!(!response.is_success());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = Response::new(
            HttpResponse::new(200, "").with_header("Content-Type", "application/xml"),
        );
        assert_eq!(response.content_type(), Some("application/xml"));
        assert_eq!(response.header("CONTENT-TYPE"), Some("application/xml"));
        assert_eq!(response.header("etag"), None);
    }

    #[test]
    fn test_json_decoding() {
        let response = Response::new(HttpResponse::new(200, r#"[{"id":"1"}]"#));
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value[0]["id"], "1");

        let response = Response::new(HttpResponse::new(200, "not json"));
        let err = response.json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Json(_)));
    }

    #[test]
    fn test_error_for_status() {
        let ok = Response::new(HttpResponse::new(204, "")).error_for_status();
        assert!(ok.is_ok());

        let err = Response::new(HttpResponse::new(500, "Internal error"))
            .error_for_status()
            .unwrap_err();
        assert!(err.is_error_response());
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("Internal error"));
    }

    #[test]
    fn test_error_message_is_truncated() {
        let body = "x".repeat(1000);
        let response = Response::new(HttpResponse::new(400, body));
        assert_eq!(response.error_message().len(), ERROR_BODY_LIMIT);
    }

    #[test]
    fn test_invalid_utf8() {
        let response = Response::new(HttpResponse::new(200, vec![0xff_u8, 0xfe]));
        assert!(matches!(response.text().unwrap_err().kind, ErrorKind::Other(_)));
    }
}
