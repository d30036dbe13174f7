//! Scoped CSS for the widget, parameterised by a resolved theme.
//!
//! The widget ships its own `<style>` block so embedding it needs no extra
//! stylesheet. Every selector lives under the `chat-widget` BEM block.

#[cfg(test)]
#[path = "stylesheet_test.rs"]
mod stylesheet_test;

use super::color::with_alpha;
use crate::model::theme::Theme;

const BADGE_COLOR: &str = "#ef4444";
const PANEL_WIDTH_PX: u32 = 380;
const PANEL_HEIGHT_PX: u32 = 500;
const MINIMIZED_HEIGHT_PX: u32 = 60;
const NARROW_VIEWPORT_PX: u32 = 480;

/// Render the full widget stylesheet for `theme`.
#[must_use]
pub fn render_stylesheet(theme: &Theme) -> String {
    let accent = theme.accent_background();
    let mut css = String::with_capacity(6 * 1024);

    css.push_str(&format!(
        ".chat-widget {{ font-family: {font}; }}\n",
        font = theme.font_family_or_default()
    ));

    css.push_str(&format!(
        ".chat-widget__toggle {{ width: 60px; height: 60px; border-radius: 50%; background: {accent}; \
         border: none; color: white; cursor: pointer; display: flex; align-items: center; \
         justify-content: center; position: relative; box-shadow: 0 4px 20px {shadow}; \
         transition: transform 0.3s cubic-bezier(0.4, 0, 0.2, 1); }}\n\
         .chat-widget__toggle:hover {{ transform: scale(1.1); }}\n\
         .chat-widget__toggle:active {{ transform: scale(0.95); }}\n",
        shadow = with_alpha(&theme.primary, 0.35),
    ));

    css.push_str(&format!(
        ".chat-widget__badge {{ position: absolute; top: -4px; right: -4px; min-width: 24px; height: 24px; \
         border-radius: 12px; background: {badge}; color: white; font-size: 12px; font-weight: 600; \
         display: flex; align-items: center; justify-content: center; box-shadow: 0 2px 8px {badge_shadow}; \
         animation: chat-widget-bounce 0.5s ease-out; }}\n\
         .chat-widget__badge--inline {{ position: static; padding: 0 8px; }}\n",
        badge = BADGE_COLOR,
        badge_shadow = with_alpha(BADGE_COLOR, 0.3),
    ));

    css.push_str(&format!(
        ".chat-widget__panel {{ position: absolute; width: {PANEL_WIDTH_PX}px; height: {PANEL_HEIGHT_PX}px; \
         background: {surface}; border-radius: {radius}px; box-shadow: 0 20px 40px rgba(0, 0, 0, 0.15); \
         display: flex; flex-direction: column; overflow: hidden; \
         animation: chat-widget-slide-up 0.3s cubic-bezier(0.4, 0, 0.2, 1) forwards; }}\n\
         .chat-widget__panel--minimized {{ height: {MINIMIZED_HEIGHT_PX}px; }}\n",
        surface = theme.surface,
        radius = theme.border_radius_px(),
    ));

    css.push_str(&format!(
        ".chat-widget__header {{ background: {accent}; color: white; padding: 16px 20px; display: flex; \
         align-items: center; justify-content: space-between; min-height: 28px; }}\n\
         .chat-widget__panel--minimized .chat-widget__header {{ padding: 0; height: 100%; }}\n\
         .chat-widget__title {{ margin: 0; font-size: 16px; font-weight: 600; }}\n\
         .chat-widget__controls {{ display: flex; gap: 8px; }}\n\
         .chat-widget__control {{ background: none; border: none; color: white; cursor: pointer; \
         padding: 4px; border-radius: 4px; display: flex; align-items: center; justify-content: center; }}\n\
         .chat-widget__control:hover {{ background-color: rgba(255, 255, 255, 0.2); }}\n\
         .chat-widget__minimized {{ display: flex; align-items: center; justify-content: space-between; \
         width: 100%; height: 100%; padding: 0 20px; cursor: pointer; }}\n\
         .chat-widget__minimized-info {{ display: flex; align-items: center; gap: 12px; flex: 1; }}\n\
         .chat-widget__minimized .chat-widget__title {{ font-size: 14px; font-weight: 500; }}\n"
    ));

    css.push_str(&format!(
        ".chat-widget__messages {{ flex: 1; padding: 20px; overflow-y: auto; background: {background}; \
         display: flex; flex-direction: column; gap: 16px; }}\n\
         .chat-widget__message {{ display: flex; flex-direction: column; max-width: 85%; \
         animation: chat-widget-message-in 0.3s ease-out; }}\n\
         .chat-widget__message--user {{ align-self: flex-end; }}\n\
         .chat-widget__message--bot {{ align-self: flex-start; }}\n\
         .chat-widget__bubble {{ padding: 12px 16px; border-radius: 18px; font-size: 14px; \
         line-height: 1.4; overflow-wrap: anywhere; }}\n\
         .chat-widget__message--user .chat-widget__bubble {{ background: {user_bubble}; color: white; \
         border-bottom-right-radius: 6px; }}\n\
         .chat-widget__message--bot .chat-widget__bubble {{ background: {bot_bubble}; color: {text}; \
         border: 1px solid {border}; border-bottom-left-radius: 6px; }}\n\
         .chat-widget__time {{ margin-top: 4px; font-size: 11px; color: {text_secondary}; align-self: flex-end; }}\n\
         .chat-widget__message--bot .chat-widget__time {{ align-self: flex-start; }}\n",
        background = theme.background,
        user_bubble = theme.user_bubble,
        bot_bubble = theme.bot_bubble,
        text = theme.text,
        border = theme.border,
        text_secondary = theme.text_secondary,
    ));

    css.push_str(&format!(
        ".chat-widget__typing {{ display: flex; align-items: center; gap: 8px; padding: 12px 16px; \
         max-width: 85%; align-self: flex-start; background: {bot_bubble}; border: 1px solid {border}; \
         border-radius: 18px; border-bottom-left-radius: 6px; }}\n\
         .chat-widget__typing-dots {{ display: flex; gap: 4px; }}\n\
         .chat-widget__typing-dot {{ width: 6px; height: 6px; border-radius: 50%; background-color: {text_secondary}; \
         animation: chat-widget-typing 1.4s infinite ease-in-out; }}\n\
         .chat-widget__typing-dot:nth-child(1) {{ animation-delay: -0.32s; }}\n\
         .chat-widget__typing-dot:nth-child(2) {{ animation-delay: -0.16s; }}\n\
         .chat-widget__typing-label {{ font-size: 12px; color: {text_secondary}; }}\n",
        bot_bubble = theme.bot_bubble,
        border = theme.border,
        text_secondary = theme.text_secondary,
    ));

    css.push_str(&format!(
        ".chat-widget__input-row {{ padding: 20px; background: {surface}; border-top: 1px solid {border}; \
         display: flex; gap: 12px; align-items: center; }}\n\
         .chat-widget__input {{ flex: 1; border: 1px solid {border}; border-radius: 24px; padding: 12px 16px; \
         font-size: 14px; outline: none; background: {background}; color: {text}; }}\n\
         .chat-widget__input:focus {{ border-color: {primary}; background: {surface}; \
         box-shadow: 0 0 0 3px {focus_ring}; }}\n\
         .chat-widget__send {{ width: 44px; height: 44px; border-radius: 50%; background: {accent}; \
         border: none; color: white; cursor: pointer; display: flex; align-items: center; justify-content: center; }}\n\
         .chat-widget__send:hover {{ transform: scale(1.05); }}\n\
         .chat-widget__send:disabled {{ opacity: 0.5; cursor: not-allowed; transform: none; }}\n",
        surface = theme.surface,
        border = theme.border,
        background = theme.background,
        text = theme.text,
        primary = theme.primary,
        focus_ring = with_alpha(&theme.primary, 0.15),
    ));

    css.push_str(
        "@keyframes chat-widget-bounce { 0% { transform: scale(0); } 50% { transform: scale(1.2); } \
         100% { transform: scale(1); } }\n\
         @keyframes chat-widget-slide-up { from { opacity: 0; transform: translateY(20px) scale(0.95); } \
         to { opacity: 1; transform: translateY(0) scale(1); } }\n\
         @keyframes chat-widget-message-in { from { opacity: 0; transform: translateY(10px); } \
         to { opacity: 1; transform: translateY(0); } }\n\
         @keyframes chat-widget-typing { 0%, 80%, 100% { transform: scale(0.8); opacity: 0.5; } \
         40% { transform: scale(1); opacity: 1; } }\n"
    );

    css.push_str(&format!(
        "@media (max-width: {NARROW_VIEWPORT_PX}px) {{ .chat-widget__panel {{ width: calc(100vw - 40px); \
         height: calc(100vh - 100px); }} .chat-widget__panel--minimized {{ height: {MINIMIZED_HEIGHT_PX}px; }} }}\n"
    ));

    css
}
