//! UI notification capability.
//!
//! # Responsibility
//! - Define the fire-and-forget contract used to surface edit outcomes.
//! - Define the flash payload and its wire shape.
//!
//! # Invariants
//! - `notify` never fails from the caller's point of view.
//! - Payload JSON is exactly `{"success": ...}` or `{"error": ...}`.

mod flash;
mod target;

pub use flash::{FlashMessage, AJAX_FLASH_CHANNEL};
pub use target::{LogNotifyTarget, NotifyTarget, RecordingNotifyTarget};
