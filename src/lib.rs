//! # iiko-api
//!
//! Blocking client library for the two iiko REST APIs: the on-premises
//! iikoServer API and the iikoBiz cloud API.
//!
//! ## Security
//!
//! - Tokens, password hashes and user secrets are redacted in Debug output
//! - URLs are redacted before they reach tracing output or error messages
//! - Server passwords are only ever sent as SHA-1 hashes
//! - The server-info document is parsed without DTD or entity expansion
//!
//! ## Crates
//!
//! - **iiko-client** - Transport, address resolution, authorized dispatch, typed errors
//! - **iiko-auth** - Credentials, password hashing, session tokens
//! - **iiko-server** - iikoServer session (license-seat lifecycle) and endpoints
//! - **iiko-cloud** - iikoBiz session and endpoints
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use iiko_api::{Endpoint, ServerCredentials, ServerSession};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let endpoint = Endpoint::new("192.168.0.10", 8080);
//!     let credentials = ServerCredentials::from_plaintext("admin", "secret");
//!
//!     let mut session = ServerSession::new(&endpoint, credentials)?;
//!     session.authenticate()?;
//!
//!     let products = session.products(false)?.error_for_status()?;
//!     println!("{}", products.text()?);
//!
//!     // the license seat is released when `session` goes out of scope
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use iiko_auth as auth;
#[cfg(feature = "client")]
pub use iiko_client as client;
#[cfg(feature = "cloud")]
pub use iiko_cloud as cloud;
#[cfg(feature = "server")]
pub use iiko_server as server;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use iiko_auth::{hash_password, CloudCredentials, PasswordHash, ServerCredentials, SessionToken};
#[cfg(feature = "client")]
pub use iiko_client::{ClientConfig, Endpoint, Error, ErrorKind, Params, Response, Result};
#[cfg(feature = "cloud")]
pub use iiko_cloud::{CloudMode, CloudSession};
#[cfg(feature = "server")]
pub use iiko_server::ServerSession;
