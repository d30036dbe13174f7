//! Chat message records supplied by the caller.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a message. Decides which side the bubble sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown message sender: {0}")]
pub struct ParseSenderError(pub String);

impl FromStr for Sender {
    type Err = ParseSenderError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "user" => Ok(Self::User),
            "bot" => Ok(Self::Bot),
            other => Err(ParseSenderError(other.to_owned())),
        }
    }
}

/// A single chat message.
///
/// Ids are assigned by the caller and must be unique within one message
/// sequence; the list renderer keys rows by id and does not check for
/// collisions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(id: impl Into<String>, text: impl Into<String>, sender: Sender, timestamp: DateTime<Utc>) -> Self {
        Self { id: id.into(), text: text.into(), sender, timestamp }
    }

    pub fn user(id: impl Into<String>, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::new(id, text, Sender::User, timestamp)
    }

    pub fn bot(id: impl Into<String>, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::new(id, text, Sender::Bot, timestamp)
    }
}
