//! # chat-widget
//!
//! Embeddable Leptos chat widget: a floating toggle button that expands into
//! a message panel.
//!
//! The widget is a view over caller-owned state. Messages, the open and
//! minimized flags, the unread counter, and the typing flag all arrive as
//! props; user interactions come back out through callbacks. The only state
//! the widget keeps for itself is the unsent input draft.
//!
//! `model` holds the framework-free presentation contract (theme and position
//! resolution, presentation state, draft handling) so it can be tested
//! natively. `components` renders that contract with Leptos.

pub mod components;
pub mod model;
pub mod util;

pub use components::chat_widget::ChatWidget;
pub use model::message::{Message, Sender};
pub use model::position::Position;
pub use model::props::{ResolvedConfig, WidgetConfig};
pub use model::theme::{Theme, ThemeOverride, ThemePreset, resolve_theme};
