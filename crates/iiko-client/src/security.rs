//! Security utilities shared by the iiko API crates.
//!
//! ## Secret Redaction
//!
//! Session tokens, password hashes and user secrets travel as query
//! parameters. Any URL or message that may reach a log or an error MUST be
//! passed through [`redact`] first:
//!
//! ```rust
//! use iiko_client::security::redact;
//!
//! let logged = redact("http://h:8080/resto/api/logout?key=3f1c");
//! assert_eq!(logged, "http://h:8080/resto/api/logout?key=[REDACTED]");
//! ```
//!
//! ## URL Parameter Encoding
//!
//! User-provided values placed in URL paths MUST be encoded:
//!
//! ```rust
//! use iiko_client::security::url;
//!
//! // CORRECT
//! let path = format!("api/suppliers/{}/pricelist", url::encode_param("A/12"));
//! assert_eq!(path, "api/suppliers/A%2F12/pricelist");
//! ```

use std::sync::OnceLock;

use regex_lite::Regex;

/// Query parameter names whose values are never logged.
const SECRET_PARAMS: &str = "key|access_token|pass|password|user_secret";

fn secret_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(&format!(r"(?i)\b({SECRET_PARAMS})=([^&\s]+)"))
            .unwrap_or_else(|e| panic!("secret redaction pattern is invalid: {e}"))
    })
}

/// Replace the values of secret-bearing query parameters with `[REDACTED]`.
#[must_use]
pub fn redact(text: &str) -> String {
    secret_pattern()
        .replace_all(text, "${1}=[REDACTED]")
        .into_owned()
}

/// URL encoding utilities.
pub mod url {
    /// Percent-encode a value for use as a path segment or query value.
    #[must_use]
    pub fn encode_param(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }

    /// Returns true if `value` is a non-empty path segment that cannot
    /// escape its position in the path (no `/`, `?`, `#`, `..`).
    pub fn is_safe_segment(value: &str) -> bool {
        !value.is_empty()
            && value != "."
            && value != ".."
            && !value.chars().any(|c| matches!(c, '/' | '\\' | '?' | '#') || c.is_control())
    }
}

/// XML escaping utilities for request bodies.
pub mod xml {
    /// Escape a string value for use in XML text content or attributes.
    #[must_use]
    pub fn escape(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len() + 16);
        for ch in value.chars() {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_tokens_and_secrets() {
        assert_eq!(
            redact("http://h:8080/resto/api/employees?key=tok123&x=1"),
            "http://h:8080/resto/api/employees?key=[REDACTED]&x=1"
        );
        assert_eq!(
            redact("/api/0/auth/access_token?user_id=bob&user_secret=s3cr3t"),
            "/api/0/auth/access_token?user_id=bob&user_secret=[REDACTED]"
        );
        assert_eq!(
            redact("api/auth?login=admin&pass=da39a3ee5e6b4b0d3255bfef95601890afd80709"),
            "api/auth?login=admin&pass=[REDACTED]"
        );
        assert_eq!(
            redact("api/0/organization/list?access_token=abc"),
            "api/0/organization/list?access_token=[REDACTED]"
        );
    }

    #[test]
    fn test_redact_leaves_other_params() {
        assert_eq!(redact("api/products?includeDeleted=true"), "api/products?includeDeleted=true");
        assert_eq!(redact("api/x?monkey=1"), "api/x?monkey=1");
        assert_eq!(redact("api/x?key="), "api/x?key=");
    }

    mod url_tests {
        use super::super::url::*;

        #[test]
        fn test_encode_param() {
            assert_eq!(encode_param("simple"), "simple");
            assert_eq!(encode_param("has space"), "has%20space");
            assert_eq!(encode_param("path/traversal"), "path%2Ftraversal");
            assert_eq!(encode_param("../../etc/passwd"), "..%2F..%2Fetc%2Fpasswd");
        }

        #[test]
        fn test_is_safe_segment() {
            assert!(is_safe_segment("0c2b8f4e-2a1f-4c64-b4a3-5c9e8bd2f5a1"));
            assert!(is_safe_segment("S-001"));

            assert!(!is_safe_segment(""));
            assert!(!is_safe_segment(".."));
            assert!(!is_safe_segment("a/b"));
            assert!(!is_safe_segment("a?key=1"));
            assert!(!is_safe_segment("a#frag"));
            assert!(!is_safe_segment("a\nb"));
        }
    }

    mod xml_tests {
        use super::super::xml::*;

        #[test]
        fn test_escape() {
            assert_eq!(escape("hello"), "hello");
            assert_eq!(escape("<tag>"), "&lt;tag&gt;");
            assert_eq!(escape("&amp;"), "&amp;amp;");
            assert_eq!(escape("\"quoted\""), "&quot;quoted&quot;");
            assert_eq!(escape("it's"), "it&apos;s");
        }
    }
}
