use crate::config::{LoadingMessage, MessageFile, MessageSet};

/// Test utilities for building message files, sets, and messages
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a loading message with explicit duration bounds
    pub fn create_message(text: &str, min_seconds: u64, max_seconds: u64) -> LoadingMessage {
        LoadingMessage {
            text: text.to_string(),
            min_seconds,
            max_seconds,
        }
    }

    /// Creates a named set where every message uses one-second bounds
    pub fn create_set(name: &str, texts: &[&str]) -> MessageSet {
        MessageSet {
            name: name.to_string(),
            messages: texts
                .iter()
                .map(|text| Self::create_message(text, 1, 1))
                .collect(),
        }
    }

    /// Creates a two-set message file ("foo" and "bar", two messages each)
    pub fn create_message_file() -> MessageFile {
        MessageFile {
            sets: vec![
                MessageSet {
                    name: "foo".to_string(),
                    messages: vec![
                        Self::create_message("foo1", 1, 1),
                        Self::create_message("foo2", 2, 2),
                    ],
                },
                MessageSet {
                    name: "bar".to_string(),
                    messages: vec![
                        Self::create_message("bar1", 1, 1),
                        Self::create_message("bar2", 2, 2),
                    ],
                },
            ],
        }
    }
}
