//! Registration form validation
//!
//! Mirrors the backend's rules so bad input is caught before any HTTP
//! round trip. Failures come back as the same field -> message shape the
//! backend returns on HTTP 400, so both sources render identically.

use std::sync::OnceLock;

use regex::Regex;

use crate::protocol::{FieldErrorBody, RegisterRequest};

/// Ordered field -> message map; iteration order is form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn push(&mut self, field: &str, message: &str) {
        self.entries.push((field.to_string(), message.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }
}

impl From<FieldErrorBody> for FieldErrors {
    fn from(body: FieldErrorBody) -> Self {
        let mut errors = FieldErrors::default();
        for (field, message) in body.errors {
            errors.push(&field, &message);
        }
        errors
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[\w\.-]+@[\w\.-]+\.\w+$").expect("static email pattern"))
}

/// Password rule: at least 6 characters, one uppercase letter, one
/// character outside [A-Za-z0-9]. Expressed as explicit checks; the
/// backend's lookahead regex has no `regex`-crate equivalent.
pub fn password_is_strong(password: &str) -> bool {
    password.chars().count() >= 6
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| !c.is_alphanumeric())
}

/// Validate a registration form. Every failing field is reported at once,
/// in form order.
pub fn validate_registration(form: &RegisterRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    let full_name = form.full_name.trim();
    if full_name.is_empty() {
        errors.push("fullName", "Full Name is required");
    } else if !full_name.chars().all(|c| c.is_alphabetic() || c == ' ') {
        errors.push("fullName", "Full Name must contain only letters and spaces");
    }

    if !email_pattern().is_match(form.email.trim()) {
        errors.push("email", "Invalid email format");
    }

    if form.username.trim().is_empty() {
        errors.push("username", "Username is required");
    }

    if !password_is_strong(&form.password) {
        errors.push(
            "password",
            "Password must be at least 6 characters, contain 1 uppercase letter, and 1 special character",
        );
    }

    if form.password != form.confirm_password {
        errors.push("confirmPassword", "Passwords do not match");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
