// ============================================================================
// VALIDATION - Validación local de email/password (antes de llamar al API)
// ============================================================================

use regex::Regex;

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[a-zA-Z0-9._%-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex");
    // El crate regex no soporta look-ahead: una regex por clase de carácter
    static ref HAS_DIGIT: Regex = Regex::new(r"[0-9]").expect("digit regex");
    static ref HAS_LOWER: Regex = Regex::new(r"[a-z]").expect("lowercase regex");
    static ref HAS_UPPER: Regex = Regex::new(r"[A-Z]").expect("uppercase regex");
}

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Email ID is not valid.")]
    InvalidEmail,
    #[error("Password is not valid.")]
    InvalidPassword,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && HAS_DIGIT.is_match(password)
        && HAS_LOWER.is_match(password)
        && HAS_UPPER.is_match(password)
}

/// Devuelve la primera regla que falla (email antes que password), o None si todo es válido.
pub fn check_valid_data(email: &str, password: &str) -> Option<ValidationError> {
    if !is_valid_email(email) {
        return Some(ValidationError::InvalidEmail);
    }
    if !is_valid_password(password) {
        return Some(ValidationError::InvalidPassword);
    }
    None
}
