//! The transport seam and its blocking reqwest implementation.

use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{HttpRequest, RequestBody};
use crate::response::HttpResponse;
use crate::security;

/// Executes one HTTP round trip.
///
/// Implementations block until the response body has been read or the
/// request's timeout expires. They report network-layer failures as
/// [`ErrorKind::Timeout`] / [`ErrorKind::Connection`] and return every
/// HTTP status, success or not, as an [`HttpResponse`].
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse>;
}

/// Blocking HTTP transport backed by `reqwest::blocking::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    inner: reqwest::blocking::Client,
    config: ClientConfig,
}

impl ReqwestTransport {
    /// Create a new transport with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(config.compression)
            .deflate(config.compression)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new transport with default configuration.
    pub fn default_transport() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let mut req = self
            .inner
            .request(request.method.to_reqwest(), &request.url)
            .timeout(request.timeout);

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(ref body) = request.body {
            req = match body {
                RequestBody::Json(value) => req.json(value),
                RequestBody::Xml(text) | RequestBody::Text(text) => req.body(text.clone()),
            };
        }

        if self.config.enable_tracing {
            debug!(
                method = request.method.as_str(),
                url = %security::redact(&request.url),
                timeout_ms = request.timeout.as_millis() as u64,
                "Sending request"
            );
        }

        let response = req.send()?;
        let status = response.status().as_u16();

        if self.config.enable_tracing {
            let content_length = response.content_length();
            if response.status().is_success() {
                debug!(status, content_length, "Response received");
            } else {
                info!(status, content_length, "Non-success response");
            }
        }

        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes()?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
