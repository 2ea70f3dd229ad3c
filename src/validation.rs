use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

// something@something.tld with no whitespace; looser than full RFC parsing.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

/// Characters that count as "special" for password strength.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

pub fn email_format(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(rule_error("email_required", "Email is required."));
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(rule_error("email_format", "Invalid email format."));
    }
    Ok(())
}

pub fn password_strength(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(rule_error("password_required", "Password is required."));
    }
    let length = password.chars().count();
    if !(8..=16).contains(&length) {
        return Err(rule_error(
            "password_length",
            "Password must be 8-16 characters long.",
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(rule_error(
            "password_uppercase",
            "Password must contain at least one uppercase letter.",
        ));
    }
    if !password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
        return Err(rule_error(
            "password_special",
            "Password must contain at least one special character.",
        ));
    }
    Ok(())
}

pub fn name_length(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(rule_error("name_required", "Name is required."));
    }
    let length = name.chars().count();
    if length < 20 {
        return Err(rule_error(
            "name_min",
            "Name must be at least 20 characters long.",
        ));
    }
    if length > 60 {
        return Err(rule_error(
            "name_max",
            "Name must be no more than 60 characters long.",
        ));
    }
    Ok(())
}

pub fn address_length(address: &str) -> Result<(), ValidationError> {
    if address.is_empty() {
        return Err(rule_error("address_required", "Address is required."));
    }
    if address.chars().count() > 400 {
        return Err(rule_error(
            "address_max",
            "Address must be no more than 400 characters long.",
        ));
    }
    Ok(())
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}
