//! Comment domain model.
//!
//! # Responsibility
//! - Define the canonical comment record edited by the UI.
//! - Provide the display-name projection of `description`.
//!
//! # Invariants
//! - `uuid` is stable and never nil.
//! - `description == None` models an absent value and displays as `""`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a comment.
pub type CommentId = Uuid;

/// Validation errors for comment invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentValidationError {
    /// `uuid` must not be nil.
    NilUuid,
}

impl Display for CommentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "comment uuid must not be nil"),
        }
    }
}

impl Error for CommentValidationError {}

/// Editable comment entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Stable identity used to save and refresh this comment.
    pub uuid: CommentId,
    /// Free-text body. `None` when the comment has no description yet.
    pub description: Option<String>,
}

impl Comment {
    /// Creates a comment with a generated id and the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            description: Some(description.into()),
        }
    }

    /// Creates a comment with a generated id and no description.
    pub fn empty() -> Self {
        Self {
            uuid: Uuid::new_v4(),
            description: None,
        }
    }

    /// Creates a comment with a caller-provided id.
    ///
    /// # Errors
    /// - Returns [`CommentValidationError::NilUuid`] for `Uuid::nil()`.
    pub fn with_id(
        uuid: CommentId,
        description: Option<String>,
    ) -> Result<Self, CommentValidationError> {
        let comment = Self { uuid, description };
        comment.validate()?;
        Ok(comment)
    }

    /// Checks comment invariants before persistence.
    pub fn validate(&self) -> Result<(), CommentValidationError> {
        if self.uuid.is_nil() {
            return Err(CommentValidationError::NilUuid);
        }
        Ok(())
    }

    /// Returns the user-facing name of this comment.
    ///
    /// The description when present and non-empty, otherwise `""`.
    pub fn display_name(&self) -> String {
        display_name(self.description.as_deref())
    }
}

/// Derives a display string from an optional description.
pub fn display_name(description: Option<&str>) -> String {
    match description {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{display_name, Comment};

    #[test]
    fn display_name_is_empty_without_description() {
        assert_eq!(display_name(None), "");
        assert_eq!(Comment::empty().display_name(), "");
    }

    #[test]
    fn display_name_keeps_whitespace_verbatim() {
        assert_eq!(display_name(Some("  padded ")), "  padded ");
    }
}
