//! # iiko-auth
//!
//! Credential types for the two iiko APIs.
//!
//! ## Security
//!
//! - Secrets, password hashes and session tokens are redacted in Debug output
//! - Plaintext server passwords are hashed on construction and never stored
//! - Error messages name the missing variable, never its value
//!
//! ## Example
//!
//! ```rust
//! use iiko_auth::{hash_password, PasswordHash, ServerCredentials};
//!
//! assert_eq!(hash_password(""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
//!
//! let creds = ServerCredentials::new("admin", PasswordHash::from_plaintext("secret"));
//! assert_eq!(creds.login(), "admin");
//! assert!(!format!("{creds:?}").contains(creds.password_hash().as_str()));
//! ```

mod credentials;
mod error;
mod password;
mod token;

pub use credentials::{CloudCredentials, ServerCredentials};
pub use error::{Error, ErrorKind, Result};
pub use password::{hash_password, PasswordHash};
pub use token::SessionToken;

/// Server login.
pub const ENV_SERVER_LOGIN: &str = "IIKO_SERVER_LOGIN";

/// Server password, already hashed (40 hex digits).
pub const ENV_SERVER_PASSWORD_HASH: &str = "IIKO_SERVER_PASSWORD_HASH";

/// Server password in plaintext; hashed as soon as it is read.
pub const ENV_SERVER_PASSWORD: &str = "IIKO_SERVER_PASSWORD";

/// Cloud API user id.
pub const ENV_BIZ_USER_ID: &str = "IIKO_BIZ_USER_ID";

/// Cloud API user secret.
pub const ENV_BIZ_USER_SECRET: &str = "IIKO_BIZ_USER_SECRET";
