//! # iiko-cloud
//!
//! Client for the iikoBiz cloud API.
//!
//! Deployments disagree on how the token travels: the current API expects
//! `access_token=<token>` and answers login with a quoted JSON string,
//! while early deployments expect `key=<token>` and the body verbatim.
//! [`CloudMode`] makes that choice explicit; there is no default.
//!
//! Cloud tokens have no release step. They expire on the server side, and
//! authenticating again simply replaces the held value.
//!
//! ## Example
//!
//! ```rust,no_run
//! use iiko_cloud::{CloudCredentials, CloudMode, CloudSession, Endpoint};
//!
//! # fn main() -> Result<(), iiko_cloud::Error> {
//! let mut session = CloudSession::new(
//!     &Endpoint::iiko_biz(),
//!     CloudCredentials::from_env()?,
//!     CloudMode::access_token(),
//! )?;
//!
//! session.authenticate()?;
//! let organizations = session.organizations()?;
//! println!("{organizations:#}");
//! # Ok(())
//! # }
//! ```

mod client;
mod mode;
pub mod query;

pub use client::CloudSession;
pub use mode::CloudMode;
pub use query::{format_request_timeout, DeliveryOrdersQuery, DEFAULT_REQUEST_TIMEOUT};

pub use iiko_auth::{CloudCredentials, SessionToken};
pub use iiko_client::{
    ClientConfig, Endpoint, Error, ErrorKind, Params, Response, Result, TokenParam,
};

/// Login path.
pub const AUTH_PATH: &str = "api/0/auth/access_token";
