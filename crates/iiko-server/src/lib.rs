//! # iiko-server
//!
//! Client for the iikoServer REST API (`http://host:port/resto/`).
//!
//! ## License seats
//!
//! Every token issued by `api/auth` occupies one license seat on the server
//! until `api/logout` is called with it. [`ServerSession`] holds at most one
//! token and releases it on every exit path:
//!
//! - [`ServerSession::authenticate`] logs out a held token before logging in again
//! - [`ServerSession::logout`] clears the token even when the server is unreachable
//! - [`ServerSession::close`] releases and reports the outcome
//! - dropping the session releases a token that is still held
//!
//! ## Example
//!
//! ```rust,no_run
//! use iiko_server::{Endpoint, ServerCredentials, ServerSession};
//!
//! # fn main() -> Result<(), iiko_server::Error> {
//! let endpoint = Endpoint::new("192.168.0.10", 8080);
//! let credentials = ServerCredentials::from_plaintext("admin", "secret");
//!
//! let mut session = ServerSession::new(&endpoint, credentials)?;
//! println!("iiko {}", session.version()?);
//!
//! session.authenticate()?;
//! let employees = session.employees()?;
//! println!("{}", employees.text()?);
//!
//! session.close()?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod corporation;
pub mod dates;
pub mod documents;
pub mod edi;
pub mod events;
pub mod products;
pub mod reports;
pub mod suppliers;
mod version;

pub use client::{server_info, server_version, ServerSession};
pub use version::parse_version;

pub use iiko_auth::{PasswordHash, ServerCredentials, SessionToken};
pub use iiko_client::{ClientConfig, Endpoint, Error, ErrorKind, Params, Response, Result};

/// Login path, relative to the `resto/` base.
pub const AUTH_PATH: &str = "api/auth";

/// Seat release path.
pub const LOGOUT_PATH: &str = "api/logout";

/// Server description document (XML).
pub const SERVER_INFO_PATH: &str = "get_server_info.jsp";
