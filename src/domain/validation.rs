//! Login and registration form validation
//!
//! Errors carry an i18n message key (under `validation.`) so the form can
//! render them in the active locale.

use once_cell::sync::Lazy;
use regex::Regex;

pub const PASSWORD_MIN_LEN: usize = 8;
pub const NAME_MAX_LEN: usize = 100;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-() ]{7,20}$").expect("valid phone regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Terms,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    /// Message key, e.g. `validation.email_invalid`
    pub key: &'static str,
}

impl FieldError {
    fn new(field: Field, key: &'static str) -> Self {
        Self { field, key }
    }
}

/// Raw login form input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Raw registration form input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

pub fn validate_email(email: &str) -> Option<FieldError> {
    let email = email.trim();
    if email.is_empty() {
        Some(FieldError::new(Field::Email, "validation.email_required"))
    } else if !EMAIL_RE.is_match(email) {
        Some(FieldError::new(Field::Email, "validation.email_invalid"))
    } else {
        None
    }
}

/// Strength rules only apply on registration; login just requires a value.
pub fn validate_password(password: &str, check_strength: bool) -> Option<FieldError> {
    if password.is_empty() {
        return Some(FieldError::new(Field::Password, "validation.password_required"));
    }
    if !check_strength {
        return None;
    }
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Some(FieldError::new(Field::Password, "validation.password_too_short"));
    }
    let has_letter = password.chars().any(|c| c.is_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return Some(FieldError::new(Field::Password, "validation.password_weak"));
    }
    None
}

pub fn validate_login(form: &LoginForm) -> Vec<FieldError> {
    [validate_email(&form.email), validate_password(&form.password, false)]
        .into_iter()
        .flatten()
        .collect()
}

pub fn validate_register(form: &RegisterForm) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let name = form.name.trim();
    if name.is_empty() {
        errors.push(FieldError::new(Field::Name, "validation.name_required"));
    } else if name.chars().count() > NAME_MAX_LEN {
        errors.push(FieldError::new(Field::Name, "validation.name_too_long"));
    }

    errors.extend(validate_email(&form.email));

    let phone = form.phone.trim();
    if !phone.is_empty() && !PHONE_RE.is_match(phone) {
        errors.push(FieldError::new(Field::Phone, "validation.phone_invalid"));
    }

    errors.extend(validate_password(&form.password, true));

    if form.confirm_password != form.password {
        errors.push(FieldError::new(Field::ConfirmPassword, "validation.passwords_mismatch"));
    }

    if !form.accept_terms {
        errors.push(FieldError::new(Field::Terms, "validation.terms_required"));
    }

    errors
}

/// First error for a field, for inline display
pub fn error_for(errors: &[FieldError], field: Field) -> Option<&'static str> {
    errors.iter().find(|e| e.field == field).map(|e| e.key)
}
