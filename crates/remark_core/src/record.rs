//! Store-bound comment state shared between UI readers and the editor.
//!
//! # Responsibility
//! - Hold the in-memory comment that views render.
//! - Save the current state to, and refresh it from, a `CommentStore`.
//!
//! # Invariants
//! - Clones observe and mutate the same comment.
//! - No lock guard is held across an `.await`.

use crate::model::comment::{display_name, Comment, CommentId};
use crate::repo::comment_store::{CommentStore, StoreError};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};

/// Failure of a save call.
///
/// `reason` is the store's opaque rejection text; the originating
/// `StoreError` stays reachable through `Error::source`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFailure {
    pub reason: String,
    cause: StoreError,
}

impl SaveFailure {
    /// Store error this failure was raised from.
    pub fn cause(&self) -> &StoreError {
        &self.cause
    }
}

impl Display for SaveFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "save failed: {}", self.reason)
    }
}

impl Error for SaveFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}

impl From<StoreError> for SaveFailure {
    fn from(value: StoreError) -> Self {
        let reason = match &value {
            StoreError::Rejected(reason) => reason.clone(),
            other => other.to_string(),
        };
        Self {
            reason,
            cause: value,
        }
    }
}

/// Failure of a refresh call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshFailure {
    /// The store no longer knows this comment.
    Missing(CommentId),
    Store(StoreError),
}

impl Display for RefreshFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(id) => write!(f, "comment not found in store: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RefreshFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Missing(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for RefreshFailure {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Comment state bound to the store it is saved to.
pub struct CommentRecord<S: CommentStore> {
    state: Arc<RwLock<Comment>>,
    store: Arc<S>,
}

impl<S: CommentStore> Clone for CommentRecord<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: CommentStore> CommentRecord<S> {
    pub fn new(comment: Comment, store: S) -> Self {
        Self::with_shared_store(comment, Arc::new(store))
    }

    /// Binds a comment to a store already shared with other records.
    pub fn with_shared_store(comment: Comment, store: Arc<S>) -> Self {
        Self {
            state: Arc::new(RwLock::new(comment)),
            store,
        }
    }

    pub fn id(&self) -> CommentId {
        self.read(|comment| comment.uuid)
    }

    pub fn description(&self) -> Option<String> {
        self.read(|comment| comment.description.clone())
    }

    pub fn set_description(&self, value: Option<String>) {
        self.write(|comment| comment.description = value);
    }

    /// Returns a copy of the current in-memory comment.
    pub fn snapshot(&self) -> Comment {
        self.read(Comment::clone)
    }

    pub fn display_name(&self) -> String {
        self.read(|comment| display_name(comment.description.as_deref()))
    }

    /// Persists the current in-memory state.
    ///
    /// The state is snapshotted when `save` is called, not when the returned
    /// future is first polled; later local mutations are not part of this save.
    pub fn save(&self) -> impl Future<Output = Result<(), SaveFailure>> {
        let snapshot = self.snapshot();
        let store = Arc::clone(&self.store);
        async move { store.save(&snapshot).await.map_err(SaveFailure::from) }
    }

    /// Replaces the in-memory state with the store's authoritative copy.
    pub async fn refresh(&self) -> Result<(), RefreshFailure> {
        let id = self.id();
        match self.store.fetch(id).await? {
            Some(fresh) => {
                debug!("event=comment_refresh module=record status=ok comment_id={id}");
                self.write(|comment| *comment = fresh);
                Ok(())
            }
            None => {
                warn!("event=comment_refresh module=record status=missing comment_id={id}");
                Err(RefreshFailure::Missing(id))
            }
        }
    }

    fn read<T>(&self, f: impl FnOnce(&Comment) -> T) -> T {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write(&self, f: impl FnOnce(&mut Comment)) {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard);
    }
}

#[cfg(test)]
mod tests {
    use super::{CommentRecord, RefreshFailure, SaveFailure};
    use crate::model::comment::Comment;
    use crate::repo::comment_store::{InMemoryCommentStore, StoreError};
    use futures::executor::block_on;
    use std::error::Error;

    #[test]
    fn clones_share_state() {
        let record = CommentRecord::new(Comment::new("a"), InMemoryCommentStore::new());
        let view = record.clone();

        record.set_description(Some("b".to_string()));

        assert_eq!(view.description().as_deref(), Some("b"));
    }

    #[test]
    fn refresh_replaces_local_state_with_stored_copy() {
        let store = InMemoryCommentStore::new();
        let stored = Comment::new("authoritative");
        store.insert(stored.clone()).unwrap();
        let record = CommentRecord::new(stored.clone(), store);
        record.set_description(Some("local draft".to_string()));

        block_on(record.refresh()).unwrap();

        assert_eq!(record.snapshot(), stored);
    }

    #[test]
    fn refresh_of_unknown_comment_is_missing() {
        let comment = Comment::new("unsaved");
        let id = comment.uuid;
        let record = CommentRecord::new(comment, InMemoryCommentStore::new());

        let err = block_on(record.refresh()).unwrap_err();

        assert_eq!(err, RefreshFailure::Missing(id));
        assert_eq!(record.description().as_deref(), Some("unsaved"));
    }

    #[test]
    fn save_snapshots_state_at_call_time() {
        let store = InMemoryCommentStore::new();
        let record = CommentRecord::new(Comment::new("first"), store.clone());

        let save = record.save();
        record.set_description(Some("after call".to_string()));
        block_on(save).unwrap();

        let stored = store.get(record.id()).unwrap();
        assert_eq!(stored.description.as_deref(), Some("first"));
    }

    #[test]
    fn save_failure_keeps_rejection_reason_verbatim() {
        let failure = SaveFailure::from(StoreError::Rejected("Server error".to_string()));
        assert_eq!(failure.reason, "Server error");
        assert_eq!(
            failure.cause(),
            &StoreError::Rejected("Server error".to_string())
        );
        let source = failure.source().expect("store error is kept as source");
        assert_eq!(source.to_string(), "store rejected write: Server error");

        let failure = SaveFailure::from(StoreError::Unavailable("offline".to_string()));
        assert_eq!(failure.reason, "store unavailable: offline");
    }
}
