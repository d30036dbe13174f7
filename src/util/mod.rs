//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (locale, CSS text)
//! from model and component code so both stay testable natively.

pub mod color;
pub mod stylesheet;
pub mod time_label;
