//! Caller identity primitives.
//!
//! An [`IdentityName`] is the unique string naming an authenticated user. It is
//! the registered e-mail address and doubles as the ownership key stamped on
//! every book.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum identity name length, in characters.
pub const IDENTITY_NAME_MAX: usize = 256;

/// Validation errors raised by [`IdentityName`] constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityValidationError {
    /// The name was empty or whitespace only.
    EmptyName,
    /// The name carried leading or trailing whitespace.
    UntrimmedName,
    /// The name exceeded [`IDENTITY_NAME_MAX`] characters.
    NameTooLong { max: usize },
    /// The name is not shaped like an e-mail address.
    InvalidEmail,
}

impl fmt::Display for IdentityValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "identity name must not be empty"),
            Self::UntrimmedName => {
                write!(f, "identity name must not have surrounding whitespace")
            }
            Self::NameTooLong { max } => {
                write!(f, "identity name must be at most {max} characters")
            }
            Self::InvalidEmail => write!(f, "email must be a valid email address"),
        }
    }
}

impl std::error::Error for IdentityValidationError {}

/// Identity name of an authenticated user.
///
/// ## Invariants
/// - Non-empty, no surrounding whitespace, at most [`IDENTITY_NAME_MAX`]
///   characters.
/// - Comparison is exact; [`IdentityName::normalized`] provides the
///   case-folded lookup key used for uniqueness.
///
/// # Examples
/// ```
/// use booknest::domain::IdentityName;
///
/// let name = IdentityName::from_email("  Alice@Example.com ").unwrap();
/// assert_eq!(name.as_ref(), "Alice@Example.com");
/// assert_eq!(name.normalized(), "alice@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdentityName(String);

impl IdentityName {
    /// Validate an identity name exactly as given.
    pub fn new(name: impl Into<String>) -> Result<Self, IdentityValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(IdentityValidationError::EmptyName);
        }
        if name.trim() != name {
            return Err(IdentityValidationError::UntrimmedName);
        }
        if name.chars().count() > IDENTITY_NAME_MAX {
            return Err(IdentityValidationError::NameTooLong {
                max: IDENTITY_NAME_MAX,
            });
        }
        Ok(Self(name))
    }

    /// Trim `raw` and require an e-mail shaped value.
    ///
    /// Accepts exactly one `@` that is neither the first nor the last
    /// character, with no interior whitespace.
    pub fn from_email(raw: &str) -> Result<Self, IdentityValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IdentityValidationError::EmptyName);
        }
        if !is_email_shaped(trimmed) {
            return Err(IdentityValidationError::InvalidEmail);
        }
        Self::new(trimmed)
    }

    /// Case-folded form used for uniqueness and lookups.
    #[must_use]
    pub fn normalized(&self) -> String {
        normalize(&self.0)
    }
}

/// Case-fold a raw user name the same way [`IdentityName::normalized`] does.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}

impl AsRef<str> for IdentityName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for IdentityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<IdentityName> for String {
    fn from(value: IdentityName) -> Self {
        value.0
    }
}

impl TryFrom<String> for IdentityName {
    type Error = IdentityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
