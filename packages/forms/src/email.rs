//! Syntactic email address check.
//!
//! This is the pragmatic check a browser would do on an `<input type="email">`,
//! plus a required dot in the domain. It does not follow the full RFC 5322
//! grammar (no quoted local parts, no IP literals).

use regex::Regex;
use std::sync::LazyLock;

/// Longest address accepted, from the SMTP path limit.
pub const MAX_EMAIL_LENGTH: usize = 254;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*\.[a-zA-Z]{2,63}$",
    )
    .expect("email pattern is a valid regex")
});

/// Returns true if `value` looks like `local-part@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.len() > MAX_EMAIL_LENGTH {
        return false;
    }

    EMAIL_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        assert!(is_valid_email("mingfai@live.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
        assert!(is_valid_email("o'brien@example.ie"));
        assert!(is_valid_email("x@sub-domain.example.org"));
    }

    #[test]
    fn test_rejects_missing_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user.example.com"));
    }

    #[test]
    fn test_requires_dotted_domain() {
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("user@.example.com"));
        assert!(!is_valid_email("user@example.c"));
    }

    #[test]
    fn test_rejects_whitespace() {
        assert!(!is_valid_email(" user@example.com"));
        assert!(!is_valid_email("user@example.com "));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("user@exa mple.com"));
        assert!(!is_valid_email("user@example.com\n"));
    }

    #[test]
    fn test_rejects_bad_domain_labels() {
        assert!(!is_valid_email("user@-example.com"));
        assert!(!is_valid_email("user@example-.com"));
        assert!(!is_valid_email("user@exa_mple.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
    }

    #[test]
    fn test_rejects_overlong_address() {
        let local = "a".repeat(64);
        let domain = format!("{}.com", "b".repeat(MAX_EMAIL_LENGTH));
        assert!(!is_valid_email(&format!("{local}@{domain}")));
    }
}
