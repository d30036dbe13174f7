use super::*;
use crate::model::events::EventLog;

fn draft(text: &str) -> Draft {
    let mut d = Draft::new();
    d.set(text);
    d
}

#[test]
fn new_draft_is_empty_and_cannot_send() {
    let d = Draft::new();
    assert_eq!(d.text(), "");
    assert!(!d.can_send());
}

#[test]
fn whitespace_only_draft_cannot_send() {
    assert!(!draft("   ").can_send());
    assert!(!draft("\t\n").can_send());
}

#[test]
fn draft_with_content_can_send() {
    assert!(draft("hi").can_send());
    assert!(draft("  hi  ").can_send());
}

#[test]
fn submit_passes_untrimmed_text_and_clears() {
    let mut d = draft("  hello there ");
    let log = EventLog::new();

    assert!(d.submit(&log));
    assert_eq!(d.text(), "");
    assert!(!d.can_send());
    assert_eq!(
        log.events(),
        vec![
            WidgetEvent::SendMessage("  hello there ".to_owned()),
            WidgetEvent::TypingStart,
        ]
    );
}

#[test]
fn submit_sends_exactly_once() {
    let mut d = draft("once");
    let log = EventLog::new();

    assert!(d.submit(&log));
    assert!(!d.submit(&log));
    let sends = log
        .events()
        .into_iter()
        .filter(|e| matches!(e, WidgetEvent::SendMessage(_)))
        .count();
    assert_eq!(sends, 1);
}

#[test]
fn blank_submit_emits_nothing_and_keeps_draft() {
    let mut d = draft("   ");
    let log = EventLog::new();

    assert!(!d.submit(&log));
    assert!(log.is_empty());
    assert_eq!(d.text(), "   ");
}

#[test]
fn only_enter_submits() {
    assert!(is_submit_key("Enter", false));
    assert!(!is_submit_key("Tab", false));
    assert!(!is_submit_key("enter", false));
}

#[test]
fn enter_during_composition_does_not_submit() {
    assert!(!is_submit_key("Enter", true));
}
