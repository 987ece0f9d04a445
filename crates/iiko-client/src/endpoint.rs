//! Address resolution: host and port to a base URL.
//!
//! Host and port are not validated here. A malformed host turns into a
//! malformed URL and fails in the transport as [`ErrorKind::InvalidUrl`]
//! or [`ErrorKind::Connection`].
//!
//! [`ErrorKind::InvalidUrl`]: crate::ErrorKind::InvalidUrl
//! [`ErrorKind::Connection`]: crate::ErrorKind::Connection

use crate::error::{Error, ErrorKind, Result};

/// Path prefix of the on-premises server API.
pub const SERVER_PATH_PREFIX: &str = "resto/";

/// Path prefix of the cloud API.
pub const CLOUD_PATH_PREFIX: &str = "";

/// Port used when none is given (or zero).
pub const DEFAULT_PORT: u16 = 80;

/// URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    #[default]
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// Remote host and port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    scheme: Scheme,
    host: String,
    port: u16,
}

impl Endpoint {
    /// Create a plain-HTTP endpoint. A missing or zero port means 80.
    pub fn new(host: impl Into<String>, port: impl Into<Option<u16>>) -> Self {
        let port = match port.into() {
            Some(0) | None => DEFAULT_PORT,
            Some(port) => port,
        };
        Self {
            scheme: Scheme::Http,
            host: host.into(),
            port,
        }
    }

    /// The public iikoBiz cloud endpoint (`https://iiko.biz:9900`).
    pub fn iiko_biz() -> Self {
        Self::new("iiko.biz", 9900).with_https()
    }

    /// Switch the endpoint to HTTPS.
    pub fn with_https(mut self) -> Self {
        self.scheme = Scheme::Https;
        self
    }

    /// Read `<PREFIX>_HOST` and the optional `<PREFIX>_PORT`.
    ///
    /// `<PREFIX>_HTTPS=1` (or `true`) switches the scheme.
    pub fn from_env(prefix: &str) -> Result<Self> {
        let host_var = format!("{prefix}_HOST");
        let host = std::env::var(&host_var).map_err(|_| {
            Error::new(ErrorKind::Config(format!(
                "Environment variable not set: {host_var}"
            )))
        })?;

        let port_var = format!("{prefix}_PORT");
        let port = match std::env::var(&port_var) {
            Ok(raw) => Some(raw.trim().parse::<u16>().map_err(|e| {
                Error::with_source(
                    ErrorKind::Config(format!("{port_var} is not a valid port: {raw}")),
                    e,
                )
            })?),
            Err(_) => None,
        };

        let endpoint = Self::new(host, port);
        let https = std::env::var(format!("{prefix}_HTTPS"))
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(if https { endpoint.with_https() } else { endpoint })
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Compose `scheme://host:port/<prefix>`.
    pub fn base_url(&self, prefix: &str) -> String {
        format!(
            "{}://{}:{}/{}",
            self.scheme.as_str(),
            self.host,
            self.port,
            prefix
        )
    }
}
