//! iikoBiz session: access-token login and authorized dispatch.

use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{info, instrument, warn};

use iiko_auth::{CloudCredentials, SessionToken};
use iiko_client::{
    ApiClient, ClientConfig, Endpoint, Error, ErrorKind, Method, Params, RequestBody, Response,
    Result, Transport, CLOUD_PATH_PREFIX,
};

use crate::mode::CloudMode;
use crate::AUTH_PATH;

mod delivery;
mod events;
mod geography;
mod organization;

/// A session with the iikoBiz cloud API.
#[derive(Debug)]
pub struct CloudSession {
    client: ApiClient,
    credentials: CloudCredentials,
    mode: CloudMode,
    token: Option<SessionToken>,
}

impl CloudSession {
    /// Create a session over a default blocking reqwest transport.
    pub fn new(endpoint: &Endpoint, credentials: CloudCredentials, mode: CloudMode) -> Result<Self> {
        Self::with_config(endpoint, credentials, mode, ClientConfig::default())
    }

    /// Create a session with custom HTTP configuration.
    pub fn with_config(
        endpoint: &Endpoint,
        credentials: CloudCredentials,
        mode: CloudMode,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = ApiClient::with_config(
            endpoint.base_url(CLOUD_PATH_PREFIX),
            mode.token_param,
            config,
        )?;
        Ok(Self::from_parts(client, credentials, mode))
    }

    /// Create a session over any transport.
    pub fn with_transport(
        endpoint: &Endpoint,
        credentials: CloudCredentials,
        mode: CloudMode,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let client = ApiClient::with_transport(
            endpoint.base_url(CLOUD_PATH_PREFIX),
            mode.token_param,
            transport,
        );
        Self::from_parts(client, credentials, mode)
    }

    fn from_parts(client: ApiClient, credentials: CloudCredentials, mode: CloudMode) -> Self {
        Self {
            client,
            credentials,
            mode,
            token: None,
        }
    }

    /// Start with a token obtained elsewhere. An empty token is ignored.
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

    pub fn mode(&self) -> CloudMode {
        self.mode
    }

    pub fn timeout(&self) -> Duration {
        self.client.timeout()
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.client.set_timeout(timeout);
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Point the session at another deployment. The held token is kept.
    pub fn set_endpoint(&mut self, endpoint: &Endpoint) {
        self.client.set_base_url(endpoint.base_url(CLOUD_PATH_PREFIX));
    }

    pub fn credentials(&self) -> &CloudCredentials {
        &self.credentials
    }

    /// Get the underlying client.
    pub fn inner(&self) -> &ApiClient {
        &self.client
    }

    fn token_str(&self) -> Option<&str> {
        self.token.as_ref().map(SessionToken::as_str)
    }

    /// Obtain a token and hold it, replacing any previous one.
    ///
    /// On failure the previously held token, if any, is kept.
    #[instrument(skip(self), fields(user_id = %self.credentials.user_id()))]
    pub fn authenticate(&mut self) -> Result<&SessionToken> {
        let params = Params::new()
            .with("user_id", self.credentials.user_id())
            .with("user_secret", self.credentials.user_secret());
        let request = self.client.public_request(Method::Get, AUTH_PATH, &params);
        let response = self.client.send(&request)?;

        let status = response.status();
        if status != 200 {
            warn!(status, "Cloud login rejected");
            return Err(Error::new(ErrorKind::Authentication {
                status,
                message: response.error_message(),
            }));
        }

        let body = response.text()?;
        let token = if self.mode.strip_token_quotes {
            SessionToken::strip_quotes(&body)
        } else {
            SessionToken::new(body)
        };
        if token.is_empty() {
            warn!("Cloud login answered with an empty token");
            return Err(Error::new(ErrorKind::Authentication {
                status,
                message: "empty token".to_string(),
            }));
        }

        info!("Authenticated with iikoBiz");
        Ok(self.token.insert(token))
    }

    /// Authorized GET. Any status is returned as-is.
    pub fn get(&self, path: &str, params: &Params) -> Result<Response> {
        self.client.get(path, self.token_str(), params)
    }

    /// Authorized POST. Any status is returned as-is.
    pub fn post(&self, path: &str, params: &Params, body: RequestBody) -> Result<Response> {
        self.client.post(path, self.token_str(), params, body)
    }

    /// Authorized GET decoded as JSON.
    pub fn get_json<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<T> {
        self.client.get_json(path, self.token_str(), params)
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

#[cfg(test)]
mod tests {
    use super::*;
    use iiko_client::mock::{MockReply, MockTransport};

    fn session(transport: &Arc<MockTransport>, mode: CloudMode) -> CloudSession {
        CloudSession::with_transport(
            &Endpoint::new("cloud", 9900),
            CloudCredentials::new("bob", "s3cr3t"),
            mode,
            transport.clone(),
        )
    }

    #[test]
    fn test_access_token_mode() {
        let transport = Arc::new(
            MockTransport::new()
                .route("api/0/auth/access_token", MockReply::ok("\"abc\""))
                .route("api/0/organization/list", MockReply::ok("[]")),
        );
        let mut session = session(&transport, CloudMode::access_token());

        assert_eq!(session.authenticate().unwrap().as_str(), "abc");
        session.get("api/0/organization/list", &Params::new()).unwrap();

        assert_eq!(
            transport.urls(),
            vec![
                "http://cloud:9900/api/0/auth/access_token?user_id=bob&user_secret=s3cr3t",
                "http://cloud:9900/api/0/organization/list?access_token=abc",
            ]
        );
    }

    #[test]
    fn test_legacy_key_mode_keeps_body() {
        let transport = Arc::new(
            MockTransport::new().route("api/0/auth/access_token", MockReply::ok("\"abc\"")),
        );
        let mut session = session(&transport, CloudMode::legacy_key());

        assert_eq!(session.authenticate().unwrap().as_str(), "\"abc\"");
        session.get("api/0/organization/list", &Params::new()).unwrap();
        assert_eq!(
            transport.urls()[1],
            "http://cloud:9900/api/0/organization/list?key=%22abc%22"
        );
    }

    #[test]
    fn test_failed_login_keeps_prior_token() {
        let transport = Arc::new(
            MockTransport::new().route("api/0/auth/access_token", MockReply::status(401, "denied")),
        );
        let mut session = session(&transport, CloudMode::access_token()).with_token("old");

        let err = session.authenticate().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Authentication { status: 401, .. }));
        assert_eq!(session.token().map(SessionToken::as_str), Some("old"));

        transport.set_route("api/0/auth/access_token", MockReply::Timeout);
        let err = session.authenticate().unwrap_err();
        assert!(err.is_no_response());
        assert_eq!(session.token().map(SessionToken::as_str), Some("old"));
    }

    #[test]
    fn test_reauthenticate_overwrites_without_release() {
        let transport = Arc::new(
            MockTransport::new().route("api/0/auth/access_token", MockReply::ok("\"new\"")),
        );
        let mut session = session(&transport, CloudMode::access_token()).with_token("old");

        session.authenticate().unwrap();
        assert_eq!(session.token().map(SessionToken::as_str), Some("new"));
        assert_eq!(transport.requests().len(), 1);

        drop(session);
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_set_endpoint() {
        let transport = Arc::new(MockTransport::new());
        let mut session = session(&transport, CloudMode::access_token()).with_token("t");
        assert_eq!(session.base_url(), "http://cloud:9900/");

        session.set_endpoint(&Endpoint::iiko_biz());
        assert_eq!(session.base_url(), "https://iiko.biz:9900/");
        session.get("api/0/organization/list", &Params::new()).unwrap();
        assert_eq!(
            transport.urls()[0],
            "https://iiko.biz:9900/api/0/organization/list?access_token=t"
        );
    }

    #[test]
    fn test_dispatch_without_token() {
        let transport = Arc::new(MockTransport::new());
        let session = session(&transport, CloudMode::access_token());

        let err = session.get("api/0/organization/list", &Params::new()).unwrap_err();
        assert!(err.is_not_authenticated());
        assert_eq!(transport.requests()[0].query_value("access_token"), Some(""));
    }

    #[test]
    fn test_empty_preset_token_is_ignored() {
        let transport = Arc::new(MockTransport::new());
        let session = session(&transport, CloudMode::access_token()).with_token("");
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let transport = Arc::new(MockTransport::new());
        let session = session(&transport, CloudMode::access_token()).with_token("tok-secret");
        let debug = format!("{session:?}");
        assert!(!debug.contains("tok-secret"));
        assert!(!debug.contains("s3cr3t"));
    }
}
