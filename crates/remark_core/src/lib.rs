//! Core domain logic for Remark comment editing.
//! This crate owns the comment model and the optimistic edit use-case.

pub mod logging;
pub mod model;
pub mod notify;
pub mod record;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::comment::{display_name, Comment, CommentId, CommentValidationError};
pub use model::edit::EditEvent;
pub use notify::{
    FlashMessage, LogNotifyTarget, NotifyTarget, RecordingNotifyTarget, AJAX_FLASH_CHANNEL,
};
pub use record::{CommentRecord, RefreshFailure, SaveFailure};
pub use repo::comment_store::{CommentStore, InMemoryCommentStore, StoreError, StoreResult};
pub use service::description_editor::{
    DescriptionEditor, EditCompletion, EditOutcome, EditorConfig, PendingRefresh, SAVED_MESSAGE,
    SAVE_FAILED_MESSAGE,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
