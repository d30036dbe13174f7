//! Presentation state derived from caller-owned flags, and the mapping from
//! control activations to outbound events.
//!
//! DESIGN
//! ======
//! The widget never changes `is_open` or `is_minimized` itself. A click turns
//! into a request ([`WidgetEvent`]); the caller decides whether to honour it
//! and passes new flags on the next render. Each control claims its click
//! exclusively: the close control inside the minimized header never also
//! counts as a header click, and vice versa.

#[cfg(test)]
#[path = "presentation_test.rs"]
mod presentation_test;

use super::events::{WidgetEvent, WidgetEvents};

/// Badge counts above this render as `"99+"`.
pub const UNREAD_BADGE_MAX: u32 = 99;

/// Caller-supplied visibility flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PresentationFlags {
    pub is_open: bool,
    pub is_minimized: bool,
}

impl PresentationFlags {
    #[must_use]
    pub fn new(is_open: bool, is_minimized: bool) -> Self {
        Self { is_open, is_minimized }
    }

    #[must_use]
    pub fn state(self) -> PresentationState {
        match (self.is_open, self.is_minimized) {
            (false, _) => PresentationState::Hidden,
            (true, false) => PresentationState::Expanded,
            (true, true) => PresentationState::Minimized,
        }
    }
}

/// What the widget shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PresentationState {
    /// Toggle button only.
    #[default]
    Hidden,
    /// Header, message list, and input row.
    Expanded,
    /// Header-only strip; no message list or input row in the tree.
    Minimized,
}

/// Clickable controls outside the input row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    ToggleButton,
    MinimizeButton,
    CloseButton,
    MinimizedHeader,
}

impl PresentationState {
    #[must_use]
    pub fn toggle_visible(self) -> bool {
        self == Self::Hidden
    }

    #[must_use]
    pub fn panel_visible(self) -> bool {
        self != Self::Hidden
    }

    /// Whether the message list and input row exist at all.
    #[must_use]
    pub fn body_rendered(self) -> bool {
        self == Self::Expanded
    }

    /// CSS modifier for the panel container.
    #[must_use]
    pub fn panel_class(self) -> &'static str {
        match self {
            Self::Minimized => "chat-widget__panel chat-widget__panel--minimized",
            Self::Hidden | Self::Expanded => "chat-widget__panel",
        }
    }

    /// Controls present in this state.
    #[must_use]
    pub fn controls(self) -> &'static [Control] {
        match self {
            Self::Hidden => &[Control::ToggleButton],
            Self::Expanded => &[Control::MinimizeButton, Control::CloseButton],
            Self::Minimized => &[Control::MinimizedHeader, Control::CloseButton],
        }
    }

    #[must_use]
    pub fn has_control(self, control: Control) -> bool {
        self.controls().contains(&control)
    }

    /// The typing indicator only shows inside an expanded panel.
    #[must_use]
    pub fn shows_typing_indicator(self, is_typing: bool) -> bool {
        is_typing && self.body_rendered()
    }
}

/// The events a control activation requests, given the current flags.
///
/// Returns an empty list when the control is not present in the derived
/// state, so a stale click on a control that has since disappeared does
/// nothing.
#[must_use]
pub fn control_events(flags: PresentationFlags, control: Control) -> Vec<WidgetEvent> {
    if !flags.state().has_control(control) {
        return Vec::new();
    }
    match control {
        Control::ToggleButton => {
            if flags.is_minimized {
                vec![WidgetEvent::ToggleOpen, WidgetEvent::Restore]
            } else {
                vec![WidgetEvent::ToggleOpen]
            }
        }
        Control::MinimizeButton => vec![WidgetEvent::Minimize],
        Control::CloseButton => vec![WidgetEvent::Close],
        Control::MinimizedHeader => vec![WidgetEvent::Restore],
    }
}

/// Deliver the events for one activation. Returns whether the control
/// claimed the interaction.
pub fn activate(flags: PresentationFlags, control: Control, events: &impl WidgetEvents) -> bool {
    let requested = control_events(flags, control);
    let claimed = !requested.is_empty();
    for event in requested {
        events.emit(event);
    }
    claimed
}

/// Display text for the unread badge, or `None` when no badge should show.
#[must_use]
pub fn unread_badge_label(count: u32) -> Option<String> {
    match count {
        0 => None,
        n if n > UNREAD_BADGE_MAX => Some(format!("{UNREAD_BADGE_MAX}+")),
        n => Some(n.to_string()),
    }
}
