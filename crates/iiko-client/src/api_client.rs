//! Authorized dispatch shared by the server and cloud sessions.
//!
//! `ApiClient` knows the base URL, the per-call timeout and the name of the
//! query parameter that carries the session token. It does not own a token:
//! sessions pass theirs (or `None`) on every call.
//!
//! ## Security
//!
//! - Tokens are never written to tracing output; URLs are redacted first
//! - Sensitive parameters are skipped in tracing spans

use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{instrument, warn};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::params::Params;
use crate::request::{HttpRequest, Method, RequestBody};
use crate::response::Response;
use crate::transport::{ReqwestTransport, Transport};

/// Name of the query parameter carrying the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenParam {
    /// `key=<token>`: the server API and the early cloud API.
    Key,
    /// `access_token=<token>`: the current cloud API.
    AccessToken,
}

impl TokenParam {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenParam::Key => "key",
            TokenParam::AccessToken => "access_token",
        }
    }
}

/// Low-level client: URL composition plus one transport round trip per call.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    timeout: Duration,
    token_param: TokenParam,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("token_param", &self.token_param)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client backed by a default [`ReqwestTransport`].
    pub fn new(base_url: impl Into<String>, token_param: TokenParam) -> Result<Self> {
        Self::with_config(base_url, token_param, ClientConfig::default())
    }

    /// Create a client backed by a [`ReqwestTransport`] built from `config`.
    pub fn with_config(
        base_url: impl Into<String>,
        token_param: TokenParam,
        config: ClientConfig,
    ) -> Result<Self> {
        let timeout = config.timeout;
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(base_url, token_param, Arc::new(transport)).with_timeout(timeout))
    }

    /// Create a client over any transport, with the default timeout.
    pub fn with_transport(
        base_url: impl Into<String>,
        token_param: TokenParam,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
            timeout: crate::DEFAULT_TIMEOUT,
            token_param,
        }
    }

    /// Set the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Point the client at a new base URL.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub fn token_param(&self) -> TokenParam {
        self.token_param
    }

    pub fn set_token_param(&mut self, token_param: TokenParam) {
        self.token_param = token_param;
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    // =========================================================================
    // URL composition
    // =========================================================================

    /// Base URL joined with a relative path.
    ///
    /// A leading `/` on `path` is dropped: the base URL already ends with one.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// URL without a token parameter (login, server info).
    pub fn public_url(&self, path: &str, params: &Params) -> String {
        let url = self.url(path);
        if params.is_empty() {
            url
        } else {
            format!("{}?{}", url, params.to_query_string())
        }
    }

    /// `base + path + "?" + token_param + "=" + token`, then caller parameters.
    ///
    /// With no token the parameter key is still present, with an empty value.
    pub fn authorized_url(&self, path: &str, token: Option<&str>, params: &Params) -> String {
        let token = token.map(urlencoding::encode).unwrap_or_default();
        let mut url = format!("{}?{}={}", self.url(path), self.token_param.as_str(), token);
        if !params.is_empty() {
            url.push('&');
            url.push_str(&params.to_query_string());
        }
        url
    }

    pub fn public_request(&self, method: Method, path: &str, params: &Params) -> HttpRequest {
        HttpRequest::new(method, self.public_url(path, params), self.timeout)
    }

    pub fn authorized_request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        params: &Params,
    ) -> HttpRequest {
        HttpRequest::new(method, self.authorized_url(path, token, params), self.timeout)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Execute a request and wrap the raw response. Any status is `Ok`.
    pub fn send(&self, request: &HttpRequest) -> Result<Response> {
        self.transport.execute(request).map(Response::new)
    }

    /// Authorized GET. The response is returned unmodified for any status.
    ///
    /// Without a token the request is still sent (with an empty token
    /// value) and the call reports [`ErrorKind::NotAuthenticated`], unless
    /// the transport itself failed.
    #[instrument(skip(self, token, params), fields(path = %path))]
    pub fn get(&self, path: &str, token: Option<&str>, params: &Params) -> Result<Response> {
        let request = self.authorized_request(Method::Get, path, token, params);
        self.dispatch(&request, token)
    }

    /// Authorized POST with a body. Same status semantics as [`ApiClient::get`].
    #[instrument(skip(self, token, params, body), fields(path = %path))]
    pub fn post(
        &self,
        path: &str,
        token: Option<&str>,
        params: &Params,
        body: RequestBody,
    ) -> Result<Response> {
        let request = self
            .authorized_request(Method::Post, path, token, params)
            .with_body(body);
        self.dispatch(&request, token)
    }

    fn dispatch(&self, request: &HttpRequest, token: Option<&str>) -> Result<Response> {
        let response = self.send(request)?;
        if token.is_none_or_empty() {
            warn!(status = response.status(), "Request dispatched without a session token");
            return Err(Error::new(ErrorKind::NotAuthenticated));
        }
        Ok(response)
    }

    // =========================================================================
    // Decoding helpers
    // =========================================================================

    /// Authorized GET, non-success status as [`ErrorKind::Http`], JSON body.
    pub fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        params: &Params,
    ) -> Result<T> {
        self.get(path, token, params)?.error_for_status()?.json()
    }

    /// Authorized GET, non-success status as [`ErrorKind::Http`], text body.
    pub fn get_text(&self, path: &str, token: Option<&str>, params: &Params) -> Result<String> {
        self.get(path, token, params)?.error_for_status()?.text()
    }

    /// Authorized POST of a JSON body, JSON response.
    pub fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        token: Option<&str>,
        params: &Params,
        body: &B,
    ) -> Result<T> {
        let body = RequestBody::Json(serde_json::to_value(body)?);
        self.post(path, token, params, body)?
            .error_for_status()?
            .json()
    }
}

trait TokenExt {
    fn is_none_or_empty(&self) -> bool;
}

impl TokenExt for Option<&str> {
    fn is_none_or_empty(&self) -> bool {
        self.map(str::is_empty).unwrap_or(true)
    }
}
