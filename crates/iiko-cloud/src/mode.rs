//! Token transport mode.

use iiko_client::TokenParam;

/// How a deployment expects the token: the query parameter that carries it
/// and whether the login body is a quoted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloudMode {
    pub token_param: TokenParam,
    pub strip_token_quotes: bool,
}

impl CloudMode {
    pub fn new(token_param: TokenParam, strip_token_quotes: bool) -> Self {
        Self {
            token_param,
            strip_token_quotes,
        }
    }

    /// `access_token=<token>`, quotes stripped from the login body.
    pub fn access_token() -> Self {
        Self::new(TokenParam::AccessToken, true)
    }

    /// `key=<token>`, login body kept verbatim.
    pub fn legacy_key() -> Self {
        Self::new(TokenParam::Key, false)
    }
}
