//! Notification targets.

use super::flash::FlashMessage;
use log::info;
use std::sync::{Mutex, PoisonError};

/// Capability to emit a UI notification on a named channel.
pub trait NotifyTarget {
    fn notify(&self, channel: &str, payload: &FlashMessage);
}

/// Target that writes notifications to the core log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifyTarget;

impl NotifyTarget for LogNotifyTarget {
    fn notify(&self, channel: &str, payload: &FlashMessage) {
        info!(
            "event=flash_emit module=notify channel={} kind={} payload={}",
            channel,
            payload.kind(),
            payload.to_json()
        );
    }
}

/// Target that keeps every notification in emission order.
#[derive(Debug, Default)]
pub struct RecordingNotifyTarget {
    emitted: Mutex<Vec<(String, FlashMessage)>>,
}

impl RecordingNotifyTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all `(channel, payload)` pairs seen so far.
    pub fn emitted(&self) -> Vec<(String, FlashMessage)> {
        self.emitted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn count(&self) -> usize {
        self.emitted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl NotifyTarget for RecordingNotifyTarget {
    fn notify(&self, channel: &str, payload: &FlashMessage) {
        self.emitted
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((channel.to_string(), payload.clone()));
    }
}
