//! Comment store contract and in-memory implementation.
//!
//! # Responsibility
//! - Define the remote persistence capability the editor saves through.
//! - Provide a process-local store for demos and tests.
//!
//! # Invariants
//! - Write paths must call `Comment::validate()` before storing.
//! - `fetch` returns the last successfully saved state, never a partial one.

use crate::model::comment::{Comment, CommentId, CommentValidationError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, PoisonError, RwLock};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error returned by comment store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(CommentValidationError),
    /// The backend refused the write. The reason is opaque to callers.
    Rejected(String),
    /// The backend could not be reached.
    Unavailable(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Rejected(reason) => write!(f, "store rejected write: {reason}"),
            Self::Unavailable(reason) => write!(f, "store unavailable: {reason}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Rejected(_) | Self::Unavailable(_) => None,
        }
    }
}

impl From<CommentValidationError> for StoreError {
    fn from(value: CommentValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Remote object store holding authoritative comment state.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Persists the full comment state.
    async fn save(&self, comment: &Comment) -> StoreResult<()>;
    /// Loads the authoritative state of one comment.
    async fn fetch(&self, id: CommentId) -> StoreResult<Option<Comment>>;
}

/// Process-local comment store.
///
/// Clones share the same rows. `reject_saves` makes every following save
/// fail with the given reason until `accept_saves` is called.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommentStore {
    rows: Arc<RwLock<HashMap<CommentId, Comment>>>,
    rejection: Arc<RwLock<Option<String>>>,
}

impl InMemoryCommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a row directly, bypassing the rejection switch.
    pub fn insert(&self, comment: Comment) -> StoreResult<()> {
        comment.validate()?;
        self.rows
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(comment.uuid, comment);
        Ok(())
    }

    pub fn reject_saves(&self, reason: impl Into<String>) {
        *self
            .rejection
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(reason.into());
    }

    pub fn accept_saves(&self) {
        *self
            .rejection
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Returns the stored row without going through the async contract.
    pub fn get(&self, id: CommentId) -> Option<Comment> {
        self.rows
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CommentStore for InMemoryCommentStore {
    async fn save(&self, comment: &Comment) -> StoreResult<()> {
        comment.validate()?;
        if let Some(reason) = self
            .rejection
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(StoreError::Rejected(reason));
        }
        self.rows
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(comment.uuid, comment.clone());
        Ok(())
    }

    async fn fetch(&self, id: CommentId) -> StoreResult<Option<Comment>> {
        Ok(self.get(id))
    }
}
