//! Display rows for the message list.
//!
//! Rows come out in exactly the order of the input slice: no sorting,
//! de-duplication, or filtering. The caller owns chronological ordering.

#[cfg(test)]
#[path = "message_list_test.rs"]
mod message_list_test;

use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};

use super::message::{Message, Sender};
use crate::util::time_label::{HourCycle, format_time_label};

/// Which side of the list a bubble hugs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BubbleSide {
    Left,
    Right,
}

impl From<Sender> for BubbleSide {
    fn from(sender: Sender) -> Self {
        match sender {
            Sender::Bot => Self::Left,
            Sender::User => Self::Right,
        }
    }
}

/// One rendered message bubble.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageRow {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub side: BubbleSide,
    pub timestamp: DateTime<Utc>,
    pub time_label: String,
}

impl MessageRow {
    pub fn new<Tz>(message: &Message, tz: &Tz, cycle: HourCycle) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self {
            id: message.id.clone(),
            text: message.text.clone(),
            sender: message.sender,
            side: BubbleSide::from(message.sender),
            timestamp: message.timestamp,
            time_label: format_time_label(&message.timestamp, tz, cycle),
        }
    }

    #[must_use]
    pub fn class(&self) -> String {
        format!("chat-widget__message chat-widget__message--{}", self.sender)
    }
}

/// Lazily build rows in `tz`.
pub fn message_rows_in<'a, Tz>(
    messages: &'a [Message],
    tz: &'a Tz,
    cycle: HourCycle,
) -> impl Iterator<Item = MessageRow> + 'a
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    messages.iter().map(move |m| MessageRow::new(m, tz, cycle))
}

/// Lazily build rows in the host's local time zone.
pub fn message_rows(messages: &[Message], cycle: HourCycle) -> impl Iterator<Item = MessageRow> + '_ {
    messages.iter().map(move |m| MessageRow::new(m, &Local, cycle))
}

/// Identity of a message sequence for scroll purposes: its length and the
/// id of its newest entry. Any append, removal, or replacement of the tail
/// changes the key; re-renders with the same list do not.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScrollKey {
    pub len: usize,
    pub last_id: Option<String>,
}

impl ScrollKey {
    #[must_use]
    pub fn of(messages: &[Message]) -> Self {
        Self {
            len: messages.len(),
            last_id: messages.last().map(|m| m.id.clone()),
        }
    }

    /// Whether moving from `previous` to `self` should scroll to the newest
    /// entry. The first observation always scrolls.
    #[must_use]
    pub fn should_scroll(&self, previous: Option<&Self>) -> bool {
        previous != Some(self)
    }
}
