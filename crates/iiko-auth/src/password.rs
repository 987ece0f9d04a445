//! Server password hashing.
//!
//! The server API never receives a plaintext password: `pass=` carries the
//! lowercase hex SHA-1 of the UTF-8 bytes.

use sha1::{Digest, Sha1};

use crate::error::{Error, ErrorKind, Result};

/// Lowercase hex SHA-1 of the UTF-8 encoding of `plaintext`.
#[must_use]
pub fn hash_password(plaintext: &str) -> String {
    format!("{:x}", Sha1::digest(plaintext.as_bytes()))
}

/// A hashed server password (40 lowercase hex digits).
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PasswordHash").field(&"[REDACTED]").finish()
    }
}

impl PasswordHash {
    /// Hash a plaintext password.
    pub fn from_plaintext(plaintext: &str) -> Self {
        Self(hash_password(plaintext))
    }

    /// Accept an already computed hash. Uppercase hex is normalized.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::new(ErrorKind::InvalidCredentials(
                "password hash must be 40 hex digits".to_string(),
            )));
        }
        Ok(Self(hex.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
