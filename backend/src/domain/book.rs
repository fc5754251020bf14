//! Book records and the payloads that create or replace them.
//!
//! A [`Book`] is owned by exactly one identity: `created_by` is stamped by the
//! service at creation and never copied from client input.

use std::fmt;
use std::str::FromStr;

use super::identity::IdentityName;

/// Store-assigned book identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(i32);

impl BookId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

/// Raised when a path segment is not an integer book id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("book id must be an integer, got {raw:?}")]
pub struct BookIdParseError {
    raw: String,
}

impl FromStr for BookId {
    type Err = BookIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>().map(Self).map_err(|_| BookIdParseError {
            raw: s.to_owned(),
        })
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub description: String,
    pub created_by: IdentityName,
}

impl Book {
    /// Whether `identity` owns this record.
    #[must_use]
    pub fn is_owned_by(&self, identity: &IdentityName) -> bool {
        &self.created_by == identity
    }
}

/// Validation failures for [`BookDraft`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookValidationError {
    EmptyTitle,
    EmptyAuthor,
}

impl BookValidationError {
    /// Payload field the failure refers to.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::EmptyTitle => "title",
            Self::EmptyAuthor => "author",
        }
    }

    /// Stable snake-case code for error details.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::EmptyTitle => "empty_title",
            Self::EmptyAuthor => "empty_author",
        }
    }
}

impl fmt::Display for BookValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} must not be empty", self.field())
    }
}

impl std::error::Error for BookValidationError {}

/// Caller-editable book fields, validated.
///
/// ## Invariants
/// - `title` and `author` contain at least one non-whitespace character.
/// - `description` may be empty.
///
/// # Examples
/// ```
/// use booknest::domain::{BookDraft, BookValidationError};
///
/// let draft = BookDraft::new("Dune", "Frank Herbert", None).unwrap();
/// assert_eq!(draft.description(), "");
/// assert_eq!(
///     BookDraft::new(" ", "Frank Herbert", None),
///     Err(BookValidationError::EmptyTitle)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    title: String,
    author: String,
    description: String,
}

impl BookDraft {
    /// Validate raw payload fields.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, BookValidationError> {
        let title = title.into();
        let author = author.into();
        if title.trim().is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }
        if author.trim().is_empty() {
            return Err(BookValidationError::EmptyAuthor);
        }
        Ok(Self {
            title,
            author,
            description: description.unwrap_or_default(),
        })
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Copy the editable fields onto `book`, leaving id and owner untouched.
    pub fn apply_to(self, book: &mut Book) {
        book.title = self.title;
        book.author = self.author;
        book.description = self.description;
    }
}

/// A validated draft stamped with its owner, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub description: String,
    pub created_by: IdentityName,
}

impl NewBook {
    /// Stamp `draft` with the creating identity.
    #[must_use]
    pub fn from_draft(draft: BookDraft, created_by: IdentityName) -> Self {
        Self {
            title: draft.title,
            author: draft.author,
            description: draft.description,
            created_by,
        }
    }
}
