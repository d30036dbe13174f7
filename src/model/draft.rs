//! The unsent input text, the only state the widget owns.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use super::events::{WidgetEvent, WidgetEvents};

/// Key that submits the draft.
pub const SUBMIT_KEY: &str = "Enter";

/// Enter submits unless an IME composition is still open, where it commits
/// the candidate instead.
#[must_use]
pub fn is_submit_key(key: &str, is_composing: bool) -> bool {
    key == SUBMIT_KEY && !is_composing
}

/// Input draft for one mounted widget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
}

impl Draft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Sending is allowed iff the draft has non-whitespace content.
    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Send the draft if allowed.
    ///
    /// Emits `SendMessage` with the untrimmed text, clears the draft, then
    /// emits `TypingStart`. The draft is cleared whether or not the caller
    /// ends up storing the message. Returns `false` and emits nothing when
    /// the draft is blank.
    pub fn submit(&mut self, events: &impl WidgetEvents) -> bool {
        if !self.can_send() {
            return false;
        }
        let text = std::mem::take(&mut self.text);
        events.emit(WidgetEvent::SendMessage(text));
        events.emit(WidgetEvent::TypingStart);
        true
    }
}
