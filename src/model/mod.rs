//! Framework-free widget model.
//!
//! DESIGN
//! ======
//! Everything the widget decides (which regions exist, which callbacks an
//! interaction fires, how themes and corners resolve) lives here as plain
//! data and pure functions. Components only wire these decisions to the DOM.

pub mod draft;
pub mod events;
pub mod message;
pub mod message_list;
pub mod position;
pub mod presentation;
pub mod props;
pub mod theme;
