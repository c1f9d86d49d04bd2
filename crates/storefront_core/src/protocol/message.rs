//! Dictionary-style channel messages.
//!
//! # Responsibility
//! - Name the wire keys the companion sends.
//! - Carry typed tuple values and decode them from JSON for replay tooling.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Wire key of one message tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MessageKey {
    #[serde(rename = "DATA_COMPLETE")]
    DataComplete,
    #[serde(rename = "APP_INDEX")]
    AppIndex,
    #[serde(rename = "APP_NAME")]
    AppName,
    #[serde(rename = "APP_AUTHOR")]
    AppAuthor,
    #[serde(rename = "APP_DESCRIPTION")]
    AppDescription,
    #[serde(rename = "APP_HEARTS")]
    AppHearts,
    #[serde(rename = "APP_DAYS_AGO")]
    AppDaysAgo,
}

impl MessageKey {
    /// Stable wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DataComplete => "DATA_COMPLETE",
            Self::AppIndex => "APP_INDEX",
            Self::AppName => "APP_NAME",
            Self::AppAuthor => "APP_AUTHOR",
            Self::AppDescription => "APP_DESCRIPTION",
            Self::AppHearts => "APP_HEARTS",
            Self::AppDaysAgo => "APP_DAYS_AGO",
        }
    }
}

impl Display for MessageKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of one message tuple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TupleValue {
    Int32(i32),
    Text(String),
}

/// One inbound channel message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelMessage {
    tuples: BTreeMap<MessageKey, TupleValue>,
}

impl ChannelMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of an `int32` tuple.
    pub fn with_int(mut self, key: MessageKey, value: i32) -> Self {
        self.tuples.insert(key, TupleValue::Int32(value));
        self
    }

    /// Builder-style insert of a text tuple.
    pub fn with_text(mut self, key: MessageKey, value: impl Into<String>) -> Self {
        self.tuples.insert(key, TupleValue::Text(value.into()));
        self
    }

    /// Completion signal carrying `status` (`1` = success).
    pub fn completion(status: i32) -> Self {
        Self::new().with_int(MessageKey::DataComplete, status)
    }

    /// Fully specified record message.
    pub fn record(
        index: i32,
        name: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
        hearts: i32,
        days_ago: i32,
    ) -> Self {
        Self::new()
            .with_int(MessageKey::AppIndex, index)
            .with_text(MessageKey::AppName, name)
            .with_text(MessageKey::AppAuthor, author)
            .with_text(MessageKey::AppDescription, description)
            .with_int(MessageKey::AppHearts, hearts)
            .with_int(MessageKey::AppDaysAgo, days_ago)
    }

    pub fn get(&self, key: MessageKey) -> Option<&TupleValue> {
        self.tuples.get(&key)
    }

    /// Removes one tuple; used to build malformed messages in tests and tools.
    pub fn without(mut self, key: MessageKey) -> Self {
        self.tuples.remove(&key);
        self
    }

    pub fn contains(&self, key: MessageKey) -> bool {
        self.tuples.contains_key(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::{ChannelMessage, MessageKey, TupleValue};

    #[test]
    fn record_builder_sets_all_six_keys() {
        let message = ChannelMessage::record(3, "n", "a", "d", 7, -1);
        for key in [
            MessageKey::AppIndex,
            MessageKey::AppName,
            MessageKey::AppAuthor,
            MessageKey::AppDescription,
            MessageKey::AppHearts,
            MessageKey::AppDaysAgo,
        ] {
            assert!(message.contains(key), "missing {key}");
        }
        assert!(!message.contains(MessageKey::DataComplete));
        assert_eq!(
            message.get(MessageKey::AppDaysAgo),
            Some(&TupleValue::Int32(-1))
        );
    }
}
