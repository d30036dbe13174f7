//! Theme tokens, partial overrides, and the shipped presets.
//!
//! A theme is a flat record, so merging an override is a shallow key-by-key
//! replacement: every key the override sets wins, every other key keeps the
//! default. Unknown keys in JSON input are ignored by serde.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BORDER_RADIUS: u32 = 16;
pub const DEFAULT_FONT_FAMILY: &str =
    "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif";

/// Fully resolved color and layout tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub text_secondary: String,
    pub border: String,
    pub user_bubble: String,
    pub bot_bubble: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#6366f1".to_owned(),
            secondary: "#8b5cf6".to_owned(),
            background: "#f9fafb".to_owned(),
            surface: "#ffffff".to_owned(),
            text: "#1f2937".to_owned(),
            text_secondary: "#6b7280".to_owned(),
            border: "#e5e7eb".to_owned(),
            user_bubble: "#6366f1".to_owned(),
            bot_bubble: "#ffffff".to_owned(),
            gradient: None,
            border_radius: Some(DEFAULT_BORDER_RADIUS),
            font_family: Some(DEFAULT_FONT_FAMILY.to_owned()),
        }
    }
}

impl Theme {
    /// Background for the toggle, header, and send button: the explicit
    /// gradient when set, otherwise a diagonal blend of primary into secondary.
    #[must_use]
    pub fn accent_background(&self) -> String {
        match &self.gradient {
            Some(gradient) => gradient.clone(),
            None => format!(
                "linear-gradient(135deg, {} 0%, {} 100%)",
                self.primary, self.secondary
            ),
        }
    }

    #[must_use]
    pub fn border_radius_px(&self) -> u32 {
        self.border_radius.unwrap_or(DEFAULT_BORDER_RADIUS)
    }

    #[must_use]
    pub fn font_family_or_default(&self) -> &str {
        self.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY)
    }

    /// Replace every key the override defines; keep the rest.
    pub fn apply(&mut self, over: &ThemeOverride) {
        fn set<T: Clone>(slot: &mut T, value: Option<&T>) {
            if let Some(v) = value {
                *slot = v.clone();
            }
        }

        set(&mut self.primary, over.primary.as_ref());
        set(&mut self.secondary, over.secondary.as_ref());
        set(&mut self.background, over.background.as_ref());
        set(&mut self.surface, over.surface.as_ref());
        set(&mut self.text, over.text.as_ref());
        set(&mut self.text_secondary, over.text_secondary.as_ref());
        set(&mut self.border, over.border.as_ref());
        set(&mut self.user_bubble, over.user_bubble.as_ref());
        set(&mut self.bot_bubble, over.bot_bubble.as_ref());
        if over.gradient.is_some() {
            self.gradient.clone_from(&over.gradient);
        }
        if over.border_radius.is_some() {
            self.border_radius = over.border_radius;
        }
        if over.font_family.is_some() {
            self.font_family.clone_from(&over.font_family);
        }
    }
}

/// Partial theme supplied by the caller. Every key is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_bubble: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_bubble: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl From<Theme> for ThemeOverride {
    fn from(theme: Theme) -> Self {
        Self {
            primary: Some(theme.primary),
            secondary: Some(theme.secondary),
            background: Some(theme.background),
            surface: Some(theme.surface),
            text: Some(theme.text),
            text_secondary: Some(theme.text_secondary),
            border: Some(theme.border),
            user_bubble: Some(theme.user_bubble),
            bot_bubble: Some(theme.bot_bubble),
            gradient: theme.gradient,
            border_radius: theme.border_radius,
            font_family: theme.font_family,
        }
    }
}

/// Merge `over` onto the default theme.
#[must_use]
pub fn resolve_theme(over: &ThemeOverride) -> Theme {
    let mut theme = Theme::default();
    theme.apply(over);
    theme
}

/// Named themes shipped with the widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Default,
    Dark,
    Green,
    Orange,
    Pink,
    Minimal,
}

impl ThemePreset {
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Dark,
        Self::Green,
        Self::Orange,
        Self::Pink,
        Self::Minimal,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Pink => "pink",
            Self::Minimal => "minimal",
        }
    }

    #[must_use]
    pub fn theme(self) -> Theme {
        let base = Theme::default();
        match self {
            Self::Default => base,
            Self::Dark => Theme {
                primary: "#818cf8".to_owned(),
                secondary: "#a78bfa".to_owned(),
                background: "#111827".to_owned(),
                surface: "#1f2937".to_owned(),
                text: "#f9fafb".to_owned(),
                text_secondary: "#9ca3af".to_owned(),
                border: "#374151".to_owned(),
                user_bubble: "#6366f1".to_owned(),
                bot_bubble: "#374151".to_owned(),
                ..base
            },
            Self::Green => Theme {
                primary: "#10b981".to_owned(),
                secondary: "#059669".to_owned(),
                background: "#f0fdf4".to_owned(),
                text: "#064e3b".to_owned(),
                border: "#d1fae5".to_owned(),
                user_bubble: "#10b981".to_owned(),
                ..base
            },
            Self::Orange => Theme {
                primary: "#f97316".to_owned(),
                secondary: "#ef4444".to_owned(),
                background: "#fff7ed".to_owned(),
                text: "#431407".to_owned(),
                text_secondary: "#78716c".to_owned(),
                border: "#fed7aa".to_owned(),
                user_bubble: "#f97316".to_owned(),
                ..base
            },
            Self::Pink => Theme {
                primary: "#ec4899".to_owned(),
                secondary: "#8b5cf6".to_owned(),
                background: "#fdf2f8".to_owned(),
                text: "#500724".to_owned(),
                border: "#fbcfe8".to_owned(),
                user_bubble: "#ec4899".to_owned(),
                ..base
            },
            Self::Minimal => Theme {
                primary: "#111827".to_owned(),
                secondary: "#374151".to_owned(),
                background: "#ffffff".to_owned(),
                text: "#111827".to_owned(),
                user_bubble: "#111827".to_owned(),
                bot_bubble: "#f3f4f6".to_owned(),
                gradient: Some("#111827".to_owned()),
                border_radius: Some(8),
                ..base
            },
        }
    }

    /// The preset expressed as a complete override.
    #[must_use]
    pub fn overrides(self) -> ThemeOverride {
        ThemeOverride::from(self.theme())
    }
}

impl fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme preset: {0}")]
pub struct UnknownThemePreset(pub String);

impl FromStr for ThemePreset {
    type Err = UnknownThemePreset;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == wanted)
            .ok_or_else(|| UnknownThemePreset(raw.to_owned()))
    }
}
