//! Syntactic email validation.
//!
//! The importing platform runs its own stricter check; this only filters out
//! obviously malformed addresses. Borderline addresses are rejected rather
//! than accepted.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("Invalid email regex")
});

/// Whether `value`, trimmed, looks like `local@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && EMAIL_PATTERN.is_match(trimmed)
}

/// Key used to compare emails case-insensitively.
pub fn email_key(value: &str) -> String {
    value.trim().to_lowercase()
}
