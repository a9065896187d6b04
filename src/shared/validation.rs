//! Field Validation
//!
//! Rules applied to request payloads before they reach a store. Lengths are
//! counted in characters, not bytes, so a title of five accented letters is
//! as valid as five ASCII ones.

use crate::shared::error::ValidationError;

/// Minimum post title length after trimming
pub const TITLE_MIN_CHARS: usize = 5;
/// Maximum post title length after trimming
pub const TITLE_MAX_CHARS: usize = 100;
/// Minimum post body length
pub const CONTENT_MIN_CHARS: usize = 10;
/// Minimum password length at registration
pub const PASSWORD_MIN_CHARS: usize = 6;

/// Check a post title and body
///
/// The title is checked after trimming surrounding whitespace, which is also
/// the form in which it is stored.
pub fn validate_post(title: &str, content: &str) -> Result<(), ValidationError> {
    let mut errors = ValidationError::new();
    let title = title.trim();

    if title.is_empty() {
        errors.push("title", "Title is required");
    }
    let title_len = title.chars().count();
    if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&title_len) {
        errors.push(
            "title",
            format!(
                "Title must be between {} and {} characters",
                TITLE_MIN_CHARS, TITLE_MAX_CHARS
            ),
        );
    }

    if content.trim().is_empty() {
        errors.push("content", "Content is required");
    }
    if content.chars().count() < CONTENT_MIN_CHARS {
        errors.push(
            "content",
            format!("Content must be at least {} characters", CONTENT_MIN_CHARS),
        );
    }

    errors.into_result()
}

/// Check a registration payload
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), ValidationError> {
    let mut errors = ValidationError::new();

    if username.trim().is_empty() {
        errors.push("username", "Username is required");
    }
    if !looks_like_email(email) {
        errors.push("email", "Please include a valid email");
    }
    if password.chars().count() < PASSWORD_MIN_CHARS {
        errors.push(
            "password",
            format!(
                "Please enter a password with {} or more characters",
                PASSWORD_MIN_CHARS
            ),
        );
    }

    errors.into_result()
}

/// Check a login payload
pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    let mut errors = ValidationError::new();

    if !looks_like_email(email) {
        errors.push("email", "Please include a valid email");
    }
    if password.is_empty() {
        errors.push("password", "Password is required");
    }

    errors.into_result()
}

/// Basic `local@domain.tld` shape check
pub fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty() && !name.starts_with('.'),
        None => false,
    }
}
