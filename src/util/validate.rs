//! Client-side form field validation.
//!
//! Validation never fails as an error; it returns a `FormErrors` value whose
//! populated fields are rendered inline next to their inputs.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const NAME_REQUIRED: &str = "Name is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_POLICY: &str =
    "Password must be at least 8 characters, include 1 letter, 1 number, and 1 special character.";

const PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// Per-field error messages plus the general API-error slot.
///
/// `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub api: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none() && self.password.is_none() && self.api.is_none()
    }
}

/// Validate the signup form fields.
pub fn validate_signup(email: &str, name: &str, password: &str) -> FormErrors {
    FormErrors {
        email: email_error(email),
        name: name.is_empty().then(|| NAME_REQUIRED.to_owned()),
        password: password_error(password),
        api: None,
    }
}

/// Validate the signin form fields. Only presence is required of the password
/// so accounts created under an older policy can still sign in.
pub fn validate_signin(email: &str, password: &str) -> FormErrors {
    FormErrors {
        email: email_error(email),
        name: None,
        password: password.is_empty().then(|| PASSWORD_REQUIRED.to_owned()),
        api: None,
    }
}

fn email_error(email: &str) -> Option<String> {
    if email.is_empty() {
        Some(EMAIL_REQUIRED.to_owned())
    } else if !is_valid_email(email) {
        Some(EMAIL_INVALID.to_owned())
    } else {
        None
    }
}

fn password_error(password: &str) -> Option<String> {
    if password.is_empty() {
        Some(PASSWORD_REQUIRED.to_owned())
    } else if !meets_password_policy(password) {
        Some(PASSWORD_POLICY.to_owned())
    } else {
        None
    }
}

/// `local@domain.tld`: one `@`, no whitespace, non-empty local part, and a
/// `.` in the domain with at least one character on each side.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// At least 8 characters drawn from letters, digits and `@$!%*?&`, with at
/// least one of each class.
pub fn meets_password_policy(password: &str) -> bool {
    let allowed = |c: char| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c);
    password.chars().count() >= PASSWORD_MIN_LEN
        && password.chars().all(allowed)
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}
