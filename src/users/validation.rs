use std::ops::RangeInclusive;

use lazy_static::lazy_static;
use regex::Regex;

use super::dto::SignupRequest;
use crate::error::FieldErrors;

pub const NAME_LEN: RangeInclusive<usize> = 1..=35;
pub const USERNAME_LEN: RangeInclusive<usize> = 4..=30;
pub const EMAIL_LEN: RangeInclusive<usize> = 3..=256;
/// bcrypt ignores input past 72 bytes.
pub const PASSWORD_LEN: RangeInclusive<usize> = 6..=72;

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Collects every field failure of a signup request.
pub fn validate_signup(req: &SignupRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if !NAME_LEN.contains(&char_len(&req.first_name)) {
        errors.add("firstName", "First Name is required and must be at most 35 characters");
    }
    if !NAME_LEN.contains(&char_len(&req.last_name)) {
        errors.add("lastName", "Last Name is required and must be at most 35 characters");
    }

    if !USERNAME_LEN.contains(&char_len(&req.username)) {
        errors.add("username", "Username must be between 4 and 30 characters");
    } else if is_valid_email(&req.username) {
        errors.add("username", "Username cannot be an email.");
    }

    if !EMAIL_LEN.contains(&char_len(&req.email)) || !is_valid_email(&req.email) {
        errors.add("email", "Invalid email");
    }

    if !PASSWORD_LEN.contains(&req.password.len()) {
        errors.add("password", "Password must be between 6 and 72 characters");
    }

    errors
}
