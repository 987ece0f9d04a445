//! Session tokens.

/// An opaque session token as returned by a login call.
///
/// The value is redacted in Debug output; use [`SessionToken::as_str`] to
/// attach it to a request.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}

impl SessionToken {
    /// Wrap a token body verbatim.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Wrap a token body after removing the `"` characters around it.
    ///
    /// The cloud login answers with a JSON string literal (`"abc"`).
    pub fn strip_quotes(body: &str) -> Self {
        Self(body.trim().trim_matches('"').to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<String> for SessionToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for SessionToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}
