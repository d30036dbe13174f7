use super::*;
use chrono::TimeZone;

fn at(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, h, m, 0).single().unwrap()
}

#[test]
fn sender_parses_known_names() {
    assert_eq!("user".parse::<Sender>(), Ok(Sender::User));
    assert_eq!(" bot ".parse::<Sender>(), Ok(Sender::Bot));
}

#[test]
fn sender_rejects_unknown_names() {
    let err = "agent".parse::<Sender>().unwrap_err();
    assert_eq!(err, ParseSenderError("agent".to_owned()));
    assert_eq!(err.to_string(), "unknown message sender: agent");
}

#[test]
fn sender_display_matches_css_modifier() {
    assert_eq!(Sender::User.to_string(), "user");
    assert_eq!(Sender::Bot.to_string(), "bot");
}

#[test]
fn constructors_set_sender() {
    assert_eq!(Message::user("1", "hi", at(9, 0)).sender, Sender::User);
    assert_eq!(Message::bot("2", "hello", at(9, 1)).sender, Sender::Bot);
}

#[test]
fn message_deserializes_from_json() {
    let msg: Message = serde_json::from_value(serde_json::json!({
        "id": "m1",
        "text": "Hello",
        "sender": "bot",
        "timestamp": "2024-05-01T09:30:00Z"
    }))
    .unwrap();
    assert_eq!(msg, Message::bot("m1", "Hello", at(9, 30)));
}
