//! Outbound widget events.
//!
//! Every interaction the widget handles turns into zero or more
//! [`WidgetEvent`]s delivered to a [`WidgetEvents`] sink. The Leptos component
//! forwards them to the caller's callback props; tests record them.

use std::cell::RefCell;

/// One request from the widget to its caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetEvent {
    /// Raw draft text, exactly as typed.
    SendMessage(String),
    ToggleOpen,
    Minimize,
    Close,
    Restore,
    TypingStart,
    /// Accepted for API completeness; the widget does not currently emit it.
    TypingEnd,
}

/// Receiver for widget events. Delivery is synchronous with the interaction.
pub trait WidgetEvents {
    fn emit(&self, event: WidgetEvent);
}

/// Sink that keeps every event in order. Useful for hosts that batch
/// requests, and for tests.
#[derive(Debug, Default)]
pub struct EventLog {
    events: RefCell<Vec<WidgetEvent>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<WidgetEvent> {
        self.events.borrow().clone()
    }

    #[must_use]
    pub fn count(&self, wanted: &WidgetEvent) -> usize {
        self.events.borrow().iter().filter(|e| *e == wanted).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<WidgetEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl WidgetEvents for EventLog {
    fn emit(&self, event: WidgetEvent) {
        self.events.borrow_mut().push(event);
    }
}
