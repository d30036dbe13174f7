//! Catalog entries and their JSON argument overrides.
//!
//! A story is a named `WidgetConfig` plus the harness settings it starts
//! with. The story page accepts an `args` query parameter holding a JSON
//! object that overrides any of those settings, e.g.
//! `/story/dark?args={"title":"Night shift","isTyping":true}`.

#[cfg(test)]
#[path = "stories_test.rs"]
mod stories_test;

use chat_widget::model::position::Position;
use chat_widget::model::theme::{ThemeOverride, ThemePreset};
use chat_widget::{WidgetConfig, resolve_theme};
use serde::Deserialize;

use crate::harness::DEFAULT_REPLY_DELAY_MS;

/// One catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Story {
    pub slug: &'static str,
    pub name: &'static str,
    pub preset: ThemePreset,
    pub title: &'static str,
}

/// Bot name shared by every story.
pub const STORY_BOT_NAME: &str = "Support Bot";

pub const STORIES: &[Story] = &[
    Story { slug: "default", name: "Default", preset: ThemePreset::Default, title: "Chat Support" },
    Story { slug: "dark", name: "Dark", preset: ThemePreset::Dark, title: "Dark Chat" },
    Story { slug: "nature", name: "Nature", preset: ThemePreset::Green, title: "Nature Chat" },
    Story { slug: "sunset", name: "Sunset", preset: ThemePreset::Orange, title: "Sunset Chat" },
    Story { slug: "rose", name: "Rose", preset: ThemePreset::Pink, title: "Rose Chat" },
    Story { slug: "minimal", name: "Minimal", preset: ThemePreset::Minimal, title: "Minimal Chat" },
];

#[must_use]
pub fn find_story(slug: &str) -> Option<&'static Story> {
    STORIES.iter().find(|story| story.slug == slug)
}

/// Overrides accepted through the `args` query parameter.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoryArgs {
    pub title: Option<String>,
    pub placeholder: Option<String>,
    pub bot_name: Option<String>,
    pub position: Option<Position>,
    /// Replaces the story's preset before `theme` is layered on.
    pub preset: Option<ThemePreset>,
    pub theme: Option<ThemeOverride>,
    pub is_typing: Option<bool>,
    pub unread_count: Option<u32>,
    pub reply_delay_ms: Option<u32>,
}

impl StoryArgs {
    /// Parse the raw `args` query value. An empty value means no overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if `raw` is not a JSON object of known argument types.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }
}

/// Everything a story page needs to mount the widget and its harness.
#[derive(Clone, Debug, PartialEq)]
pub struct StorySetup {
    pub config: WidgetConfig,
    pub is_typing: bool,
    pub unread_count: u32,
    pub reply_delay_ms: u32,
}

impl Story {
    /// The story's own settings with no overrides.
    #[must_use]
    pub fn setup(&self) -> StorySetup {
        self.setup_with(StoryArgs::default())
    }

    #[must_use]
    pub fn setup_with(&self, args: StoryArgs) -> StorySetup {
        let preset = args.preset.unwrap_or(self.preset);
        let mut theme = preset.theme();
        if let Some(extra) = &args.theme {
            theme.apply(extra);
        }
        let defaults = WidgetConfig::default();
        StorySetup {
            config: WidgetConfig {
                theme: ThemeOverride::from(theme),
                title: args.title.unwrap_or_else(|| self.title.to_owned()),
                placeholder: args.placeholder.unwrap_or(defaults.placeholder),
                bot_name: args.bot_name.unwrap_or_else(|| STORY_BOT_NAME.to_owned()),
                position: args.position.unwrap_or(defaults.position),
                hour_cycle: None,
            },
            is_typing: args.is_typing.unwrap_or(false),
            unread_count: args.unread_count.unwrap_or(0),
            reply_delay_ms: args.reply_delay_ms.unwrap_or(DEFAULT_REPLY_DELAY_MS),
        }
    }
}

impl StorySetup {
    /// Accent fill for the index page swatch.
    #[must_use]
    pub fn accent(&self) -> String {
        resolve_theme(&self.config.theme).accent_background()
    }
}
