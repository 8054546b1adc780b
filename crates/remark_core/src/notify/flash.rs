//! Flash notification payloads.

use serde::{Deserialize, Serialize};

/// Channel consumed by the UI flash area.
pub const AJAX_FLASH_CHANNEL: &str = "ajax:flash";

/// User-facing flash payload.
///
/// Serialized externally tagged, so `Success("Saved.")` becomes
/// `{"success":"Saved."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashMessage {
    Success(String),
    Error(String),
}

impl FlashMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Stable kind id used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::Error(_) => "error",
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }

    /// Renders the JSON payload handed to UI bridges.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Success(text) => serde_json::json!({ "success": text }),
            Self::Error(text) => serde_json::json!({ "error": text }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FlashMessage;

    #[test]
    fn to_json_matches_serde_form() {
        let message = FlashMessage::error("There was a problem with saving.");
        let via_serde = serde_json::to_value(&message).unwrap();
        assert_eq!(message.to_json(), via_serde);
    }
}
