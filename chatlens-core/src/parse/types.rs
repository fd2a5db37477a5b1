use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeSet;

/// Sender recorded for lines that carry no `Sender: ` prefix (joins,
/// removals, subject changes).
pub const GROUP_NOTIFICATION: &str = "group_notification";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub timestamp: NaiveDateTime,
    pub sender: String,
    pub body: String,
    pub calendar: CalendarFields,
}

impl Message {
    pub fn is_group_notification(&self) -> bool {
        self.sender == GROUP_NOTIFICATION
    }
}

/// Calendar fields derived once from the timestamp at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarFields {
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub month_name: &'static str,
    pub day: u32,
    pub day_name: &'static str,
    pub hour: u32,
    pub minute: u32,
    pub hour_bucket: &'static str,
}

/// Parsed chat export. Immutable once built; messages keep input order.
#[derive(Debug, Clone, Default)]
pub struct MessageTable {
    messages: Vec<Message>,
    dropped_lines: usize,
}

impl MessageTable {
    pub fn new(messages: Vec<Message>, dropped_lines: usize) -> Self {
        Self {
            messages,
            dropped_lines,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Non-blank input lines that did not match the export grammar.
    pub fn dropped_lines(&self) -> usize {
        self.dropped_lines
    }

    /// Distinct senders, sorted.
    pub fn participants(&self) -> Vec<&str> {
        self.messages
            .iter()
            .map(|m| m.sender.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn has_participant(&self, name: &str) -> bool {
        self.messages.iter().any(|m| m.sender == name)
    }
}

impl<'a> IntoIterator for &'a MessageTable {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
