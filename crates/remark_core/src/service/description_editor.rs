//! Optimistic description editing.
//!
//! # Responsibility
//! - Apply a committed description edit locally before the save completes.
//! - Reconcile local state with the save outcome and flash the result.
//!
//! # Invariants
//! - Exactly one notification is emitted per `update_description` call.
//! - After the call completes, `description` is the new value on success and
//!   the old value on failure.
//! - A failed save is terminal: no retry, no error returned to the caller.
//! - The edit's completion does not wait on the post-save refresh.

use crate::logging::sanitize_message;
use crate::model::edit::EditEvent;
use crate::notify::{FlashMessage, NotifyTarget, AJAX_FLASH_CHANNEL};
use crate::record::{CommentRecord, RefreshFailure};
use crate::repo::comment_store::CommentStore;
use futures::future::{FutureExt, LocalBoxFuture};
use log::{info, warn};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Default success flash text.
pub const SAVED_MESSAGE: &str = "Saved.";
/// Default failure flash text.
pub const SAVE_FAILED_MESSAGE: &str = "There was a problem with saving.";

const MAX_LOGGED_REASON_CHARS: usize = 120;

/// Channel and message texts used by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    pub flash_channel: String,
    pub success_message: String,
    pub error_message: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            flash_channel: AJAX_FLASH_CHANNEL.to_string(),
            success_message: SAVED_MESSAGE.to_string(),
            error_message: SAVE_FAILED_MESSAGE.to_string(),
        }
    }
}

/// Terminal state of one edit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The new value was saved.
    Saved,
    /// The save failed and the old value was restored.
    Reverted { reason: String },
}

impl EditOutcome {
    /// Returns whether the new value reached the store.
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

/// Reconciliation with the store that follows a successful save.
///
/// Runs only when awaited. Failures are logged before being returned.
#[must_use = "dropping a pending refresh skips reconciliation with the store"]
pub struct PendingRefresh<'a> {
    inner: LocalBoxFuture<'a, Result<(), RefreshFailure>>,
}

impl fmt::Debug for PendingRefresh<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingRefresh").finish_non_exhaustive()
    }
}

impl Future for PendingRefresh<'_> {
    type Output = Result<(), RefreshFailure>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.get_mut().inner.as_mut().poll(cx)
    }
}

/// Result of `update_description`.
#[derive(Debug)]
pub struct EditCompletion<'a> {
    pub outcome: EditOutcome,
    /// Present only after a successful save.
    pub refresh: Option<PendingRefresh<'a>>,
}

/// Use-case service for editing a comment's description.
#[derive(Debug, Clone, Default)]
pub struct DescriptionEditor {
    config: EditorConfig,
}

impl DescriptionEditor {
    /// Creates an editor with the default `ajax:flash` channel and texts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an editor with caller-provided channel and texts.
    pub fn with_config(config: EditorConfig) -> Self {
        Self { config }
    }

    /// Returns the active channel and texts.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Saves `edit.new_value()` as the record's description.
    ///
    /// # Contract
    /// - The new value is set on `record`, and the state to save is
    ///   snapshotted, before this function returns, whether or not the
    ///   future is ever polled.
    /// - On success the success flash is emitted and the future resolves
    ///   with `Saved` plus a `PendingRefresh`; completion never waits on it.
    /// - On failure the old value is restored and the error flash is emitted.
    pub fn update_description<'a, S, T>(
        &'a self,
        record: &'a CommentRecord<S>,
        target: &'a T,
        edit: EditEvent,
    ) -> impl Future<Output = EditCompletion<'a>> + 'a
    where
        S: CommentStore + 'a,
        T: NotifyTarget + ?Sized + 'a,
    {
        let comment_id = record.id();
        let noop = edit.is_noop();
        let (old_value, new_value) = edit.into_parts();

        record.set_description(Some(new_value));
        let save = record.save();

        async move {
            match save.await {
                Ok(()) => {
                    info!(
                        "event=description_save module=editor status=ok comment_id={} noop={}",
                        comment_id, noop
                    );
                    target.notify(
                        &self.config.flash_channel,
                        &FlashMessage::success(self.config.success_message.as_str()),
                    );
                    EditCompletion {
                        outcome: EditOutcome::Saved,
                        refresh: Some(pending_refresh(record.clone())),
                    }
                }
                Err(failure) => {
                    warn!(
                        "event=description_save module=editor status=reverted comment_id={} reason={}",
                        comment_id,
                        sanitize_message(&failure.reason, MAX_LOGGED_REASON_CHARS)
                    );
                    record.set_description(Some(old_value));
                    target.notify(
                        &self.config.flash_channel,
                        &FlashMessage::error(self.config.error_message.as_str()),
                    );
                    EditCompletion {
                        outcome: EditOutcome::Reverted {
                            reason: failure.reason,
                        },
                        refresh: None,
                    }
                }
            }
        }
    }
}

fn pending_refresh<'a, S: CommentStore + 'a>(record: CommentRecord<S>) -> PendingRefresh<'a> {
    PendingRefresh {
        inner: async move {
            let result = record.refresh().await;
            if let Err(err) = &result {
                warn!(
                    "event=description_refresh module=editor status=error comment_id={} error={}",
                    record.id(),
                    err
                );
            }
            result
        }
        .boxed_local(),
    }
}
