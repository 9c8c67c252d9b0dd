//! Helper functions and utilities
//!
//! This module contains common validation and formatting helpers used
//! throughout the client.

/// Validate email format (basic validation, the server owns the real check)
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.') && email.len() > 5
}

/// Validate phone number format (basic validation)
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    phone
        .chars()
        .all(|c| c.is_ascii_digit() || c == '+' || c == '-' || c == ' ')
        && digits >= 10
}

/// Normalize a phone number to the configured country prefix used by the
/// hosted checkout prefill
pub fn normalize_phone(phone: &str, country_code: &str) -> String {
    let trimmed = phone.trim();
    if trimmed.is_empty() || trimmed.starts_with(country_code) {
        trimmed.to_string()
    } else {
        format!("{}{}", country_code, trimmed)
    }
}

/// Truncate text to a maximum length with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Check that a submission string looks like something the backend accepts
///
/// Submissions are free-form (drive links, repo URLs, plain codes); the
/// only client-side rule is a sanity cap so a pasted essay does not go out.
pub fn is_reasonable_submission(submission: &str) -> bool {
    submission.len() <= 2048
}
