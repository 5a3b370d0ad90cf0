//! Field rules for the registration form.
//!
//! Every function is pure and cheap, so callers evaluate them on each read
//! instead of caching a result that could go stale.

pub const USER_MIN_LEN: usize = 3;
pub const PASS_MIN_LEN: usize = 6;

pub const USER_TOO_SHORT: &str = "Muy corto";
pub const PASS_TOO_SHORT: &str = "Mínimo 6 caracteres";

/// Length in UTF-16 code units, the unit browser form fields report.
/// Characters outside the BMP (emoji) count as two.
fn field_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Empty input shows no message; it only fails [`is_form_valid`].
pub fn user_error(user: &str) -> Option<&'static str> {
    let len = field_len(user);
    (len > 0 && len < USER_MIN_LEN).then_some(USER_TOO_SHORT)
}

pub fn pass_error(pass: &str) -> Option<&'static str> {
    let len = field_len(pass);
    (len > 0 && len < PASS_MIN_LEN).then_some(PASS_TOO_SHORT)
}

pub fn is_form_valid(user: &str, pass: &str) -> bool {
    field_len(user) >= USER_MIN_LEN && field_len(pass) >= PASS_MIN_LEN
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
