//! Password policy and Argon2id hashing.
//!
//! The policy mirrors common identity-store defaults: at least six
//! characters including a digit, a lower-case letter, an upper-case letter,
//! and a non-alphanumeric character. Hashes are PHC strings so parameters
//! travel with the stored value.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use std::fmt;

/// Minimum password length, in characters.
pub const PASSWORD_MIN_LEN: usize = 6;

/// A single rule a candidate password failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordPolicyViolation {
    /// Shorter than [`PASSWORD_MIN_LEN`].
    TooShort,
    /// No ASCII digit.
    RequiresDigit,
    /// No lower-case letter.
    RequiresLower,
    /// No upper-case letter.
    RequiresUpper,
    /// No character outside letters and digits.
    RequiresNonAlphanumeric,
}

impl PasswordPolicyViolation {
    /// Stable snake-case code for error details.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::TooShort => "password_too_short",
            Self::RequiresDigit => "password_requires_digit",
            Self::RequiresLower => "password_requires_lower",
            Self::RequiresUpper => "password_requires_upper",
            Self::RequiresNonAlphanumeric => "password_requires_non_alphanumeric",
        }
    }
}

impl fmt::Display for PasswordPolicyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(
                f,
                "passwords must be at least {PASSWORD_MIN_LEN} characters"
            ),
            Self::RequiresDigit => write!(f, "passwords must have at least one digit"),
            Self::RequiresLower => write!(f, "passwords must have at least one lowercase letter"),
            Self::RequiresUpper => write!(f, "passwords must have at least one uppercase letter"),
            Self::RequiresNonAlphanumeric => {
                write!(f, "passwords must have at least one non alphanumeric character")
            }
        }
    }
}

/// Check `password` against the policy, reporting every failed rule.
///
/// # Examples
/// ```
/// use booknest::domain::password::{PasswordPolicyViolation, check_password_policy};
///
/// assert!(check_password_policy("Passw0rd!").is_ok());
/// let violations = check_password_policy("abc").unwrap_err();
/// assert!(violations.contains(&PasswordPolicyViolation::TooShort));
/// ```
pub fn check_password_policy(password: &str) -> Result<(), Vec<PasswordPolicyViolation>> {
    let mut violations = Vec::new();
    if password.chars().count() < PASSWORD_MIN_LEN {
        violations.push(PasswordPolicyViolation::TooShort);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        violations.push(PasswordPolicyViolation::RequiresDigit);
    }
    if !password.chars().any(char::is_lowercase) {
        violations.push(PasswordPolicyViolation::RequiresLower);
    }
    if !password.chars().any(char::is_uppercase) {
        violations.push(PasswordPolicyViolation::RequiresUpper);
    }
    if password.chars().all(char::is_alphanumeric) {
        violations.push(PasswordPolicyViolation::RequiresNonAlphanumeric);
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Failures raised while hashing or verifying passwords.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordHashError {
    /// Hashing the candidate password failed.
    #[error("failed to hash password: {message}")]
    Hash { message: String },
    /// The stored hash is not a parseable PHC string.
    #[error("stored password hash is malformed: {message}")]
    MalformedHash { message: String },
}

/// Hash `password` with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, PasswordHashError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| PasswordHashError::Hash {
            message: err.to_string(),
        })
}

/// Verify `password` against a stored PHC hash.
///
/// Returns `Ok(false)` on mismatch; only a malformed stored hash is an error.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, PasswordHashError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|err| PasswordHashError::MalformedHash {
        message: err.to_string(),
    })?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
