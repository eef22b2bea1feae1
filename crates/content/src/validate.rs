//! Shared validation helpers for form input.
//!
//! All helpers trim their input. Failures are recorded into the caller's
//! [`FieldErrors`]; the returned value is still usable so a single pass can
//! collect every failing field instead of stopping at the first.

use vitrine_core::FieldErrors;

/// Require at least `min` characters after trimming.
pub fn require_min(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    min: usize,
    message: &str,
) -> String {
    let trimmed = value.trim();
    if trimmed.chars().count() < min {
        errors.push(field, message);
    }
    trimmed.to_string()
}

/// Require a non-empty value after trimming.
pub fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) -> String {
    require_min(errors, field, value, 1, message)
}

/// Empty input becomes `None`; anything else is kept verbatim (trimmed).
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

/// Empty input becomes `None`; anything else must be an absolute http(s) URL.
pub fn optional_url(errors: &mut FieldErrors, field: &'static str, value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !is_http_url(trimmed) {
        errors.push(field, "Invalid URL");
        return None;
    }
    Some(trimmed.to_string())
}

/// Empty input becomes `None`; anything else must look like an email address.
pub fn optional_email(errors: &mut FieldErrors, field: &'static str, value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if !is_email(trimmed) {
        errors.push(field, "Invalid email address");
        return None;
    }
    Some(trimmed.to_string())
}

/// Require a value that looks like an email address.
pub fn require_email(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) -> String {
    let trimmed = value.trim();
    if !is_email(trimmed) {
        errors.push(field, message);
    }
    trimmed.to_string()
}

/// Require an integer within `min..=max`.
pub fn require_range(
    errors: &mut FieldErrors,
    field: &'static str,
    value: i32,
    min: i32,
    max: i32,
    message: &str,
) -> i32 {
    if value < min || value > max {
        errors.push(field, message);
    }
    value
}

/// Split a comma-separated field into trimmed, non-empty entries.
pub fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(rest) => !rest.is_empty() && !rest.contains(char::is_whitespace),
        None => false,
    }
}

pub fn is_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_min_records_error_for_short_values() {
        let mut errors = FieldErrors::new();
        require_min(&mut errors, "message", "too short", 10, "Message must be at least 10 characters");
        assert!(errors.field("message").is_some());
    }

    #[test]
    fn require_min_counts_chars_after_trimming() {
        let mut errors = FieldErrors::new();
        let value = require_min(&mut errors, "name", "  ab  ", 2, "Name is required");
        assert!(errors.is_empty());
        assert_eq!(value, "ab");
    }

    #[test]
    fn optional_url_accepts_empty_and_rejects_non_http() {
        let mut errors = FieldErrors::new();
        assert_eq!(optional_url(&mut errors, "link", "  "), None);
        assert!(errors.is_empty());

        assert_eq!(
            optional_url(&mut errors, "link", "https://example.com/p"),
            Some("https://example.com/p".to_string())
        );
        assert!(errors.is_empty());

        assert_eq!(optional_url(&mut errors, "link", "ftp://example.com"), None);
        assert_eq!(errors.field("link").unwrap(), ["Invalid URL"]);
    }

    #[test]
    fn email_shape_checks() {
        assert!(is_email("admin@example.com"));
        assert!(!is_email("admin@example"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("admin example@ex.com"));
        assert!(!is_email("plainaddress"));
    }

    #[test]
    fn split_csv_trims_and_drops_empties() {
        assert_eq!(split_csv("Rust, axum , ,sqlx,"), ["Rust", "axum", "sqlx"]);
        assert!(split_csv("  ").is_empty());
    }
}
