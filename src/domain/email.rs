//! Email address shape check.

use once_cell::sync::Lazy;
use regex::Regex;

/// Loose `local@domain.tld` shape: non-whitespace runs around `@` and a dot.
static EMAIL_SHAPE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("Failed to compile email shape regex"));

/// Whether `email` contains a `<local>@<domain>.<tld>` run of
/// non-whitespace characters.
///
/// The check is loose on purpose and shared by the store and the client
/// form, so both sides accept exactly the same addresses.
///
/// # Example
///
/// ```
/// use connectify::domain::is_valid_email;
///
/// assert!(is_valid_email("ada@example.com"));
/// assert!(!is_valid_email("ada@example"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE_REGEX.is_match(email)
}
