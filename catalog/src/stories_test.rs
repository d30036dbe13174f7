use super::*;

#[test]
fn slugs_are_unique() {
    let mut slugs: Vec<&str> = STORIES.iter().map(|s| s.slug).collect();
    slugs.sort_unstable();
    slugs.dedup();
    assert_eq!(slugs.len(), STORIES.len());
}

#[test]
fn every_preset_has_a_story() {
    for preset in ThemePreset::ALL {
        assert!(STORIES.iter().any(|s| s.preset == preset), "no story for {preset}");
    }
}

#[test]
fn every_story_uses_the_support_bot() {
    for story in STORIES {
        assert_eq!(story.setup().config.bot_name, "Support Bot", "story {}", story.slug);
    }
}

#[test]
fn find_story_by_slug() {
    assert_eq!(find_story("dark").map(|s| s.title), Some("Dark Chat"));
    assert!(find_story("missing").is_none());
}

#[test]
fn default_setup_uses_story_values() {
    let setup = find_story("default").unwrap().setup();
    assert_eq!(setup.config.title, "Chat Support");
    assert_eq!(setup.config.bot_name, "Support Bot");
    assert_eq!(setup.config.placeholder, "Type your message...");
    assert_eq!(setup.config.position, Position::BottomRight);
    assert!(!setup.is_typing);
    assert_eq!(setup.unread_count, 0);
    assert_eq!(setup.reply_delay_ms, DEFAULT_REPLY_DELAY_MS);
    assert_eq!(setup.config.theme, ThemePreset::Default.overrides());
}

#[test]
fn empty_args_mean_no_overrides() {
    assert_eq!(StoryArgs::from_json("").unwrap(), StoryArgs::default());
    assert_eq!(StoryArgs::from_json("  ").unwrap(), StoryArgs::default());
    assert_eq!(StoryArgs::from_json("{}").unwrap(), StoryArgs::default());
}

#[test]
fn args_override_story_values() {
    let args = StoryArgs::from_json(
        r#"{"title":"Night shift","botName":"Owl","position":"top-left","isTyping":true,"unreadCount":7,"replyDelayMs":50}"#,
    )
    .unwrap();
    let setup = find_story("dark").unwrap().setup_with(args);

    assert_eq!(setup.config.title, "Night shift");
    assert_eq!(setup.config.bot_name, "Owl");
    assert_eq!(setup.config.position, Position::TopLeft);
    assert!(setup.is_typing);
    assert_eq!(setup.unread_count, 7);
    assert_eq!(setup.reply_delay_ms, 50);
}

#[test]
fn theme_args_layer_over_preset() {
    let args = StoryArgs::from_json(r##"{"preset":"green","theme":{"primary":"#000000"}}"##).unwrap();
    let setup = find_story("default").unwrap().setup_with(args);
    let theme = resolve_theme(&setup.config.theme);

    assert_eq!(theme.primary, "#000000");
    assert_eq!(theme.secondary, ThemePreset::Green.theme().secondary);
}

#[test]
fn unknown_preset_is_rejected() {
    assert!(StoryArgs::from_json(r#"{"preset":"neon"}"#).is_err());
}

#[test]
fn accent_uses_gradient_when_present() {
    let setup = find_story("minimal").unwrap().setup();
    assert_eq!(setup.accent(), "#111827");
}
