//! Edit value objects.

/// One committed edit of a text field.
///
/// Built once by the UI layer with both values and consumed by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditEvent {
    old_value: String,
    new_value: String,
}

impl EditEvent {
    /// Creates an edit from the value before and the value submitted.
    pub fn new(old_value: impl Into<String>, new_value: impl Into<String>) -> Self {
        Self {
            old_value: old_value.into(),
            new_value: new_value.into(),
        }
    }

    /// Value before the edit; restored when saving fails.
    pub fn old_value(&self) -> &str {
        &self.old_value
    }

    /// Value submitted by the user.
    pub fn new_value(&self) -> &str {
        &self.new_value
    }

    /// Returns whether the edit leaves the value unchanged.
    pub fn is_noop(&self) -> bool {
        self.old_value == self.new_value
    }

    /// Splits the edit into `(old_value, new_value)`.
    pub fn into_parts(self) -> (String, String) {
        (self.old_value, self.new_value)
    }
}
