use super::*;
use chrono::{DateTime, FixedOffset, Utc};

fn at(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, h, m, 0).single().unwrap()
}

fn conversation() -> Vec<Message> {
    vec![
        Message::bot("1", "Hello! How can I help you today?", at(9, 0)),
        Message::user("2", "Where is my order?", at(9, 1)),
        Message::bot("3", "Let me check.", at(9, 2)),
    ]
}

#[test]
fn bubble_side_follows_sender() {
    assert_eq!(BubbleSide::from(Sender::Bot), BubbleSide::Left);
    assert_eq!(BubbleSide::from(Sender::User), BubbleSide::Right);
}

#[test]
fn rows_keep_input_order_with_local_labels() {
    let messages = conversation();
    let rows: Vec<_> = message_rows_in(&messages, &Utc, HourCycle::H23).collect();

    let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
    let labels: Vec<_> = rows.iter().map(|r| r.time_label.as_str()).collect();
    assert_eq!(labels, ["09:00", "09:01", "09:02"]);
    assert_eq!(rows[1].side, BubbleSide::Right);
    assert_eq!(rows[1].text, "Where is my order?");
}

#[test]
fn rows_do_not_sort_out_of_order_input() {
    let messages = vec![
        Message::user("late", "second", at(10, 0)),
        Message::bot("early", "first", at(8, 0)),
    ];
    let ids: Vec<_> = message_rows_in(&messages, &Utc, HourCycle::H23).map(|r| r.id).collect();
    assert_eq!(ids, ["late", "early"]);
}

#[test]
fn rows_keep_duplicates() {
    let messages = vec![Message::user("a", "same", at(9, 0)), Message::user("a", "same", at(9, 0))];
    assert_eq!(message_rows_in(&messages, &Utc, HourCycle::H23).count(), 2);
}

#[test]
fn rows_use_given_zone() {
    let messages = conversation();
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
    let first = message_rows_in(&messages, &tokyo, HourCycle::H23).next().unwrap();
    assert_eq!(first.time_label, "18:00");
}

#[test]
fn rows_are_lazy_and_finite() {
    let messages = conversation();
    let mut rows = message_rows(&messages, HourCycle::H23);
    assert!(rows.next().is_some());
    assert_eq!(rows.count(), 2);
}

#[test]
fn row_class_carries_sender_modifier() {
    let row = MessageRow::new(&Message::user("1", "x", at(1, 0)), &Utc, HourCycle::H23);
    assert_eq!(row.class(), "chat-widget__message chat-widget__message--user");
}

// =============================================================
// ScrollKey
// =============================================================

#[test]
fn scroll_key_first_observation_scrolls() {
    let key = ScrollKey::of(&conversation());
    assert!(key.should_scroll(None));
}

#[test]
fn scroll_key_same_list_does_not_scroll() {
    let messages = conversation();
    let before = ScrollKey::of(&messages);
    let after = ScrollKey::of(&messages.clone());
    assert!(!after.should_scroll(Some(&before)));
}

#[test]
fn scroll_key_append_scrolls() {
    let mut messages = conversation();
    let before = ScrollKey::of(&messages);
    messages.push(Message::user("4", "Thanks", at(9, 3)));
    assert!(ScrollKey::of(&messages).should_scroll(Some(&before)));
}

#[test]
fn scroll_key_tail_replacement_scrolls() {
    let mut messages = conversation();
    let before = ScrollKey::of(&messages);
    messages.pop();
    messages.push(Message::bot("3b", "Found it.", at(9, 2)));
    let after = ScrollKey::of(&messages);
    assert_eq!(after.len, before.len);
    assert!(after.should_scroll(Some(&before)));
}

#[test]
fn scroll_key_empty_list() {
    assert_eq!(ScrollKey::of(&[]), ScrollKey::default());
}

#[test]
fn rows_carry_the_utc_timestamp_for_client_labels() {
    let messages = conversation();
    let rows: Vec<_> = message_rows(&messages, HourCycle::H23).collect();
    let stamps: Vec<_> = rows.iter().map(|r| r.timestamp).collect();
    assert_eq!(stamps, [at(9, 0), at(9, 1), at(9, 2)]);
}
