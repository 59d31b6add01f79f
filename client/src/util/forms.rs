//! Client-side form validation for the auth and contact pages.
//!
//! Validators are pure: they take the submitted values and return every
//! field error at once so a page can mark all invalid inputs in one pass.
//! The server still has the final say.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{ContactRequest, RegisterRequest, UserType};

pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const LOGIN_PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
pub const RESET_PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";
pub const RESET_PASSWORD_WEAK: &str = "Password must include uppercase, lowercase, number, and special character";
pub const CONFIRM_MISSING: &str = "Please confirm your password!";
pub const RESET_MISMATCH: &str = "The two passwords do not match!";
pub const FORM_HAS_ERRORS: &str = "Please fix the errors in the form.";

const PASSWORD_SPECIALS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

/// Field-level validation failures, in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: Vec<(&'static str, &'static str)>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// First error for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.fields.iter().find(|(f, _)| *f == field).map(|(_, msg)| *msg)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    fn add(&mut self, field: &'static str, message: &'static str) {
        self.fields.push((field, message));
    }

    fn check(&mut self, ok: bool, field: &'static str, message: &'static str) {
        if !ok {
            self.add(field, message);
        }
    }
}

/// Loose `something@domain.tld` check; no whitespace anywhere.
pub fn is_valid_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// At least 8 characters drawn from letters, digits and `@$!%*?&`, with one
/// of each class.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(&c))
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(&c))
}

/// Kenyan mobile/landline style: `07` or `01` followed by eight digits.
pub fn is_valid_contact_number(raw: &str) -> bool {
    let number = raw.trim();
    number.len() == 10
        && (number.starts_with("07") || number.starts_with("01"))
        && number.chars().all(|c| c.is_ascii_digit())
}

/// KRA PIN: `A` or `P`, nine digits, then one letter.
pub fn is_valid_kra_pin(raw: &str) -> bool {
    let pin: Vec<char> = raw.trim().chars().collect();
    pin.len() == 11
        && matches!(pin[0], 'A' | 'P')
        && pin[1..10].iter().all(char::is_ascii_digit)
        && pin[10].is_ascii_alphabetic()
}

pub fn validate_login(email: &str, password: &str) -> FormErrors {
    let mut errors = FormErrors::default();
    errors.check(is_valid_email(email), "email", INVALID_EMAIL);
    errors.check(password.chars().count() >= 6, "password", LOGIN_PASSWORD_TOO_SHORT);
    errors
}

pub fn validate_forgot(email: &str) -> FormErrors {
    let mut errors = FormErrors::default();
    errors.check(is_valid_email(email), "email", INVALID_EMAIL);
    errors
}

pub fn validate_reset(password: &str, confirm: &str) -> FormErrors {
    let mut errors = FormErrors::default();
    if password.chars().count() < 8 {
        errors.add("password", RESET_PASSWORD_TOO_SHORT);
    } else if !is_strong_password(password) {
        errors.add("password", RESET_PASSWORD_WEAK);
    }
    if confirm.is_empty() {
        errors.add("confirm_password", CONFIRM_MISSING);
    } else if confirm != password {
        errors.add("confirm_password", RESET_MISMATCH);
    }
    errors
}

pub fn validate_register(form: &RegisterRequest) -> FormErrors {
    let mut errors = FormErrors::default();
    errors.check(!form.company_name.trim().is_empty(), "company_name", "Please input company name");
    errors.check(is_valid_email(&form.email), "email", "Please enter a valid email");
    errors.check(
        is_valid_contact_number(&form.contact_number),
        "contact_number",
        "Phone number must be in the format 0712345678",
    );
    errors.check(!form.sector.trim().is_empty(), "sector", "Please select sector type");
    if form.user_type == UserType::Tenderer {
        if form.kra_pin.trim().is_empty() {
            errors.add("kra_pin", "KRA PIN is required for Tenderers");
        } else if !is_valid_kra_pin(&form.kra_pin) {
            errors.add("kra_pin", "Invalid KRA PIN format. e.g AP123456789A");
        }
    }
    errors.check(!form.location.trim().is_empty(), "location", "Please enter your location");
    errors.check(
        form.industries.iter().any(|i| !i.trim().is_empty()),
        "industries",
        "Please enter at least one industry",
    );
    errors.check(form.password.chars().count() >= 8, "password", "Password must be at least 8 characters");
    errors.check(form.password == form.confirm_password, "confirm_password", "Passwords do not match");
    errors
}

pub fn validate_contact(form: &ContactRequest) -> FormErrors {
    let mut errors = FormErrors::default();
    errors.check(!form.name.trim().is_empty(), "name", "Please enter your name");
    errors.check(is_valid_email(&form.email), "email", INVALID_EMAIL);
    errors.check(!form.subject.trim().is_empty(), "subject", "Please enter a subject");
    errors.check(!form.message.trim().is_empty(), "message", "Please write a message");
    errors
}
