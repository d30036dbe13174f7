//! Leptos components that render the widget model.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_widget` is the public entry point. It resolves props into a
//! `ResolvedConfig`, owns the input draft, and hands derived signals and
//! callbacks to the smaller pieces below. None of the children hold state.

pub mod chat_widget;
pub mod icons;
pub mod input_row;
pub mod message_list;
pub mod panel_header;
pub mod toggle_button;
