//! Host-page state driven by the widget's callbacks.
//!
//! `DemoHarness` is the state a real embedding page would keep: message
//! history, the open and minimized flags, and the unread counter. Each
//! callback maps to one method, so the story page only wires signals.

#[cfg(test)]
#[path = "harness_test.rs"]
mod harness_test;

use chat_widget::Message;
use chrono::{DateTime, Utc};

pub const GREETING: &str = "Hello! How can I help you today?";
pub const BOT_REPLY: &str = "Thanks for your message! I'll get back to you soon.";
pub const DEFAULT_REPLY_DELAY_MS: u32 = 1000;

#[derive(Clone, Debug, PartialEq)]
pub struct DemoHarness {
    pub messages: Vec<Message>,
    pub is_open: bool,
    pub is_minimized: bool,
    pub unread_count: u32,
}

impl DemoHarness {
    /// Closed harness holding the bot greeting.
    #[must_use]
    pub fn new(now: DateTime<Utc>, unread_count: u32) -> Self {
        Self {
            messages: vec![Message::bot("1", GREETING, now)],
            is_open: false,
            is_minimized: false,
            unread_count,
        }
    }

    pub fn toggle_open(&mut self) {
        self.is_minimized = false;
        self.is_open = !self.is_open;
        self.unread_count = 0;
    }

    pub fn minimize(&mut self) {
        self.is_minimized = true;
    }

    pub fn restore(&mut self) {
        self.is_minimized = false;
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.is_minimized = false;
        self.unread_count = 0;
    }

    /// Append the user's message. The caller schedules `deliver_reply`.
    pub fn push_user_message(&mut self, text: String, now: DateTime<Utc>) {
        log::debug!("harness: user message ({} chars)", text.chars().count());
        self.messages.push(Message::user(next_id(), text, now));
    }

    /// Append the canned bot reply. Unread counts only while the panel is
    /// closed at the moment the reply lands.
    pub fn deliver_reply(&mut self, now: DateTime<Utc>) {
        self.messages.push(Message::bot(next_id(), BOT_REPLY, now));
        if !self.is_open {
            self.unread_count = self.unread_count.saturating_add(1);
        }
        log::debug!("harness: bot reply delivered, unread={}", self.unread_count);
    }
}

fn next_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
