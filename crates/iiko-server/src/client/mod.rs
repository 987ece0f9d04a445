//! iikoServer session: token lifecycle and authorized dispatch.
//!
//! Endpoint wrappers live in the submodules, one per API area, each adding
//! an `impl ServerSession` block.

use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info, instrument, warn};

use iiko_auth::{ServerCredentials, SessionToken};
use iiko_client::{
    ApiClient, ClientConfig, Endpoint, Error, ErrorKind, Method, Params, RequestBody, Response,
    Result, TokenParam, Transport, SERVER_PATH_PREFIX,
};

use crate::{AUTH_PATH, LOGOUT_PATH};

mod cash;
mod corporation;
mod documents;
mod edi;
mod employees;
mod events;
mod products;
mod reports;
mod server_info;
mod suppliers;

pub use server_info::{server_info, server_version};

/// A session with one iikoServer.
///
/// Holds at most one token, and with it at most one license seat. The seat
/// is released by [`logout`](Self::logout), by [`close`](Self::close), before
/// a new [`authenticate`](Self::authenticate), and when the session is
/// dropped.
///
/// # Example
///
/// ```rust,no_run
/// use iiko_server::{Endpoint, Params, ServerCredentials, ServerSession};
///
/// # fn main() -> Result<(), iiko_server::Error> {
/// let credentials = ServerCredentials::from_env()?;
/// let mut session = ServerSession::new(&Endpoint::from_env("IIKO_SERVER")?, credentials)?;
///
/// session.authenticate()?;
/// let stores = session.get_text("api/corporation/stores", &Params::new())?;
/// println!("{stores}");
/// // seat released here
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ServerSession {
    client: ApiClient,
    credentials: ServerCredentials,
    token: Option<SessionToken>,
}

impl ServerSession {
    /// Create a session over a default blocking reqwest transport.
    pub fn new(endpoint: &Endpoint, credentials: ServerCredentials) -> Result<Self> {
        Self::with_config(endpoint, credentials, ClientConfig::default())
    }

    /// Create a session with custom HTTP configuration.
    pub fn with_config(
        endpoint: &Endpoint,
        credentials: ServerCredentials,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = ApiClient::with_config(
            endpoint.base_url(SERVER_PATH_PREFIX),
            TokenParam::Key,
            config,
        )?;
        Ok(Self::from_client(client, credentials))
    }

    /// Create a session over any transport.
    pub fn with_transport(
        endpoint: &Endpoint,
        credentials: ServerCredentials,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let client = ApiClient::with_transport(
            endpoint.base_url(SERVER_PATH_PREFIX),
            TokenParam::Key,
            transport,
        );
        Self::from_client(client, credentials)
    }

    /// Create a session from an existing client. The server only accepts
    /// `key=<token>`, so the client's token parameter is reset to
    /// [`TokenParam::Key`].
    pub fn from_client(mut client: ApiClient, credentials: ServerCredentials) -> Self {
        client.set_token_param(TokenParam::Key);
        Self {
            client,
            credentials,
            token: None,
        }
    }

    /// Start with a token obtained elsewhere. It counts as a held seat and
    /// is released like one. An empty token is ignored.
    pub fn with_token(mut self, token: impl Into<SessionToken>) -> Self {
        self.token = Some(token.into()).filter(|token| !token.is_empty());
        self
    }

    /// Set the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client.set_timeout(timeout);
        self
    }

    pub fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn timeout(&self) -> Duration {
        self.client.timeout()
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.client.set_timeout(timeout);
    }

    /// `http://host:port/resto/`
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn credentials(&self) -> &ServerCredentials {
        &self.credentials
    }

    /// Get the underlying client.
    pub fn inner(&self) -> &ApiClient {
        &self.client
    }

    fn token_str(&self) -> Option<&str> {
        self.token.as_ref().map(SessionToken::as_str)
    }

    // =========================================================================
    // Token lifecycle
    // =========================================================================

    /// Log in and hold the returned token.
    ///
    /// A token already held is released first, so the session never holds
    /// two seats. On failure the session is left without a token.
    #[instrument(skip(self), fields(login = %self.credentials.login()))]
    pub fn authenticate(&mut self) -> Result<&SessionToken> {
        if self.token.is_some() {
            debug!("Releasing held token before logging in again");
            if let Err(err) = self.logout() {
                warn!(error = %err, "Logout before re-authentication failed");
            }
        }

        let params = Params::new()
            .with("login", self.credentials.login())
            .with("pass", self.credentials.password_hash().as_str());
        let request = self.client.public_request(Method::Get, AUTH_PATH, &params);
        let response = self.client.send(&request)?;

        let status = response.status();
        if status != 200 {
            warn!(status, "Server rejected login");
            return Err(Error::new(ErrorKind::Authentication {
                status,
                message: response.error_message(),
            }));
        }

        let body = response.text()?;
        if body.is_empty() {
            warn!("Server answered login with an empty token");
            return Err(Error::new(ErrorKind::Authentication {
                status,
                message: "empty token".to_string(),
            }));
        }

        info!("Authenticated with iiko server");
        Ok(self.token.insert(SessionToken::new(body)))
    }

    /// Release the held token.
    ///
    /// Returns `Ok(false)` without a network call when no token is held.
    /// Otherwise the token is cleared before the call completes, whatever
    /// its outcome; the error, if any, is still returned.
    #[instrument(skip(self))]
    pub fn logout(&mut self) -> Result<bool> {
        let Some(token) = self.token.take() else {
            return Ok(false);
        };

        let response = self
            .client
            .get(LOGOUT_PATH, Some(token.as_str()), &Params::new())?;
        response.error_for_status()?;

        info!("Logged out, license seat released");
        Ok(true)
    }

    /// Release the seat (if held) and report the outcome.
    pub fn close(mut self) -> Result<()> {
        self.logout().map(|_| ())
    }

    // =========================================================================
    // Authorized dispatch
    // =========================================================================

    /// Authorized GET with `key=<token>`. Any status is returned as-is.
    pub fn get(&self, path: &str, params: &Params) -> Result<Response> {
        self.client.get(path, self.token_str(), params)
    }

    /// Authorized POST with `key=<token>`. Any status is returned as-is.
    pub fn post(&self, path: &str, params: &Params, body: RequestBody) -> Result<Response> {
        self.client.post(path, self.token_str(), params, body)
    }

    /// Authorized GET decoded as JSON.
    pub fn get_json<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<T> {
        self.client.get_json(path, self.token_str(), params)
    }

    /// Authorized GET decoded as text (most endpoints answer with XML).
    pub fn get_text(&self, path: &str, params: &Params) -> Result<String> {
        self.client.get_text(path, self.token_str(), params)
    }

    /// Authorized POST of a JSON body, decoded as JSON.
    pub fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        params: &Params,
        body: &B,
    ) -> Result<T> {
        self.client.post_json(path, self.token_str(), params, body)
    }
}

impl Drop for ServerSession {
    fn drop(&mut self) {
        if self.token.is_none() {
            return;
        }
        debug!("Session dropped while holding a token");
        if let Err(err) = self.logout() {
            warn!(error = %err, "Failed to release license seat on drop");
        }
    }
}
