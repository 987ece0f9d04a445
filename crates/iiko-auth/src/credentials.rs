//! Credential types for the server and cloud APIs.
//!
//! All credential types implement custom Debug to redact sensitive data.

use tracing::debug;

use crate::error::{Error, ErrorKind, Result};
use crate::password::PasswordHash;
use crate::{
    ENV_BIZ_USER_ID, ENV_BIZ_USER_SECRET, ENV_SERVER_LOGIN, ENV_SERVER_PASSWORD,
    ENV_SERVER_PASSWORD_HASH,
};

/// Login and hashed password for an on-premises server.
#[derive(Clone)]
pub struct ServerCredentials {
    login: String,
    password_hash: PasswordHash,
}

impl std::fmt::Debug for ServerCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerCredentials")
            .field("login", &self.login)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

impl ServerCredentials {
    pub fn new(login: impl Into<String>, password_hash: PasswordHash) -> Self {
        Self {
            login: login.into(),
            password_hash,
        }
    }

    /// Hash `password` and build credentials from it.
    pub fn from_plaintext(login: impl Into<String>, password: &str) -> Self {
        Self::new(login, PasswordHash::from_plaintext(password))
    }

    /// Load credentials from environment variables.
    ///
    /// Required:
    /// - `IIKO_SERVER_LOGIN`
    /// - `IIKO_SERVER_PASSWORD_HASH` or `IIKO_SERVER_PASSWORD` (hashed on read)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let login = lookup(ENV_SERVER_LOGIN)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::new(ErrorKind::EnvVar(ENV_SERVER_LOGIN.to_string())))?;

        let password_hash = match lookup(ENV_SERVER_PASSWORD_HASH) {
            Some(hex) => PasswordHash::from_hex(&hex)?,
            None => lookup(ENV_SERVER_PASSWORD)
                .map(|p| {
                    debug!("Hashing plaintext password from {}", ENV_SERVER_PASSWORD);
                    PasswordHash::from_plaintext(&p)
                })
                .ok_or_else(|| {
                    Error::new(ErrorKind::EnvVar(format!(
                        "{ENV_SERVER_PASSWORD_HASH} or {ENV_SERVER_PASSWORD}"
                    )))
                })?,
        };

        Ok(Self::new(login, password_hash))
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}

/// User id and secret for the cloud API.
#[derive(Clone)]
pub struct CloudCredentials {
    user_id: String,
    user_secret: String,
}

impl std::fmt::Debug for CloudCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudCredentials")
            .field("user_id", &self.user_id)
            .field("user_secret", &"[REDACTED]")
            .finish()
    }
}

impl CloudCredentials {
    pub fn new(user_id: impl Into<String>, user_secret: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            user_secret: user_secret.into(),
        }
    }

    /// Load credentials from `IIKO_BIZ_USER_ID` and `IIKO_BIZ_USER_SECRET`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let user_id = lookup(ENV_BIZ_USER_ID)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::new(ErrorKind::EnvVar(ENV_BIZ_USER_ID.to_string())))?;
        let user_secret = lookup(ENV_BIZ_USER_SECRET)
            .ok_or_else(|| Error::new(ErrorKind::EnvVar(ENV_BIZ_USER_SECRET.to_string())))?;

        Ok(Self::new(user_id, user_secret))
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn user_secret(&self) -> &str {
        &self.user_secret
    }
}
