//! Authentication primitives such as login credentials and registrations.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use zeroize::Zeroizing;

use super::identity::{IdentityName, IdentityValidationError};
use super::password::{PasswordPolicyViolation, check_password_policy};

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `email` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use booknest::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" alice@example.com ", "Passw0rd!").unwrap();
/// assert_eq!(creds.email(), "alice@example.com");
/// assert_eq!(creds.password(), "Passw0rd!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email: trimmed.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email string suitable for account lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Domain error returned when a registration payload is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationValidationError {
    /// The email could not become an [`IdentityName`].
    Email(IdentityValidationError),
    /// The password broke one or more policy rules.
    Password(Vec<PasswordPolicyViolation>),
}

impl fmt::Display for RegistrationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email(err) => write!(f, "{err}"),
            Self::Password(violations) => {
                let messages: Vec<String> = violations.iter().map(ToString::to_string).collect();
                write!(f, "{}", messages.join("; "))
            }
        }
    }
}

impl std::error::Error for RegistrationValidationError {}

/// Validated request to create an account.
///
/// ## Invariants
/// - `name` is an e-mail shaped [`IdentityName`].
/// - `password` satisfies the password policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    name: IdentityName,
    password: Zeroizing<String>,
}

impl Registration {
    /// Validate raw registration inputs.
    ///
    /// # Examples
    /// ```
    /// use booknest::domain::Registration;
    ///
    /// let registration = Registration::try_from_parts("bob@example.com", "Passw0rd!").unwrap();
    /// assert_eq!(registration.name().as_ref(), "bob@example.com");
    /// assert!(Registration::try_from_parts("bob@example.com", "weak").is_err());
    /// ```
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, RegistrationValidationError> {
        let name = IdentityName::from_email(email).map_err(RegistrationValidationError::Email)?;
        check_password_policy(password).map_err(RegistrationValidationError::Password)?;
        Ok(Self {
            name,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Identity name the account will be registered under.
    pub fn name(&self) -> &IdentityName {
        &self.name
    }

    /// Plain-text password awaiting hashing.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", LoginValidationError::EmptyEmail)]
    #[case("   ", "pw", LoginValidationError::EmptyEmail)]
    #[case("alice@example.com", "", LoginValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] email: &str,
        #[case] password: &str,
        #[case] expected: LoginValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(email, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    #[case("  alice@example.com  ", "secret")]
    #[case("bob@example.com", " padded password ")]
    fn valid_credentials_trim_email(#[case] email: &str, #[case] password: &str) {
        let creds = LoginCredentials::try_from_parts(email, password)
            .expect("valid inputs should succeed");
        assert_eq!(creds.email(), email.trim());
        assert_eq!(creds.password(), password);
    }

    #[rstest]
    fn registration_rejects_malformed_email() {
        let err = Registration::try_from_parts("not-an-email", "Passw0rd!")
            .expect_err("email must be validated");
        assert_eq!(
            err,
            RegistrationValidationError::Email(IdentityValidationError::InvalidEmail)
        );
    }

    #[rstest]
    fn registration_reports_password_violations() {
        let err = Registration::try_from_parts("alice@example.com", "password")
            .expect_err("weak password must fail");
        let RegistrationValidationError::Password(violations) = err else {
            panic!("expected password violations");
        };
        assert!(violations.contains(&PasswordPolicyViolation::RequiresDigit));
        assert!(violations.contains(&PasswordPolicyViolation::RequiresUpper));
    }

    #[rstest]
    fn registration_display_joins_violations() {
        let err = Registration::try_from_parts("alice@example.com", "Passw0rd")
            .expect_err("missing symbol");
        assert_eq!(
            err.to_string(),
            "passwords must have at least one non alphanumeric character"
        );
    }
}
