//! Widget configuration with per-field defaults.
//!
//! Optional props collapse into a [`WidgetConfig`]; [`WidgetConfig::resolve`]
//! turns it into everything the render pass needs (merged theme, corner
//! styles, hour cycle) in one step.

#[cfg(test)]
#[path = "props_test.rs"]
mod props_test;

use serde::{Deserialize, Serialize};

use super::position::{PanelStyle, Position, ToggleStyle, resolve_panel_style, resolve_toggle_style};
use super::theme::{Theme, ThemeOverride, resolve_theme};
use crate::util::time_label::HourCycle;

pub const DEFAULT_TITLE: &str = "Chat Support";
pub const DEFAULT_PLACEHOLDER: &str = "Type your message...";
pub const DEFAULT_BOT_NAME: &str = "Bot";

/// Caller-facing configuration. Every field has a default, and JSON input
/// may omit any of them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    pub theme: ThemeOverride,
    pub title: String,
    pub placeholder: String,
    pub bot_name: String,
    pub position: Position,
    /// Forces 12- or 24-hour time labels; detected from the locale when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hour_cycle: Option<HourCycle>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            theme: ThemeOverride::default(),
            title: DEFAULT_TITLE.to_owned(),
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            bot_name: DEFAULT_BOT_NAME.to_owned(),
            position: Position::default(),
            hour_cycle: None,
        }
    }
}

impl WidgetConfig {
    /// Parse a JSON configuration object.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not valid JSON or a known key has the
    /// wrong type. Unknown keys are ignored.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    #[must_use]
    pub fn resolve(&self) -> ResolvedConfig {
        ResolvedConfig {
            theme: resolve_theme(&self.theme),
            title: self.title.clone(),
            placeholder: self.placeholder.clone(),
            bot_name: self.bot_name.clone(),
            position: self.position,
            toggle_style: resolve_toggle_style(self.position),
            panel_style: resolve_panel_style(self.position),
            hour_cycle: self.hour_cycle.unwrap_or_else(HourCycle::detect),
        }
    }
}

/// Fully resolved render inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub theme: Theme,
    pub title: String,
    pub placeholder: String,
    pub bot_name: String,
    pub position: Position,
    pub toggle_style: ToggleStyle,
    pub panel_style: PanelStyle,
    pub hour_cycle: HourCycle,
}

impl ResolvedConfig {
    #[must_use]
    pub fn typing_label(&self) -> String {
        format!("{} is typing...", self.bot_name)
    }
}
