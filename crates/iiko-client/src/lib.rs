//! # iiko-client
//!
//! Core HTTP plumbing shared by the iikoServer and iikoBiz clients.
//!
//! This crate provides:
//! - A [`Transport`] seam with a blocking reqwest implementation
//! - Address resolution from host and port ([`Endpoint`])
//! - Authorized dispatch: token query parameter plus caller parameters ([`ApiClient`])
//! - Typed errors separating "no response", "error response" and
//!   "not authenticated"
//! - Token and secret redaction for logs and error messages
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Session Layer                            │
//! │  (iiko-server ServerSession, iiko-cloud CloudSession)       │
//! │  - Owns credentials and the session token                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        ApiClient                            │
//! │  - Base URL, timeout, token parameter name                  │
//! │  - Builds authorized / public requests                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Transport (trait)                          │
//! │  - ReqwestTransport (blocking reqwest)                      │
//! │  - MockTransport (feature `test-util`)                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use iiko_client::{ApiClient, Endpoint, Params, TokenParam, SERVER_PATH_PREFIX};
//!
//! # fn main() -> Result<(), iiko_client::Error> {
//! let endpoint = Endpoint::new("192.168.0.10", 8080);
//! let client = ApiClient::new(endpoint.base_url(SERVER_PATH_PREFIX), TokenParam::Key)?;
//!
//! let response = client.get(
//!     "api/products",
//!     Some("token-from-login"),
//!     &Params::new().with("includeDeleted", false),
//! )?;
//! println!("{}", response.status());
//! # Ok(())
//! # }
//! ```

mod api_client;
mod config;
mod endpoint;
mod error;
mod params;
mod request;
mod response;
pub mod security;
mod transport;

#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use api_client::{ApiClient, TokenParam};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use endpoint::{Endpoint, Scheme, CLOUD_PATH_PREFIX, SERVER_PATH_PREFIX};
pub use error::{Error, ErrorKind, Result};
pub use params::{ParamValue, Params};
pub use request::{HttpRequest, Method, RequestBody};
pub use response::{HttpResponse, Response};
pub use transport::{ReqwestTransport, Transport};

/// Default per-request timeout applied by every session.
pub const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(4);

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("iiko-api/", env!("CARGO_PKG_VERSION"));
