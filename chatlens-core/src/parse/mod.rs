//! Chat export parsing
//!
//! Turns the text produced by a messaging app's "export chat" feature into a
//! [`MessageTable`]. Every physical line is matched on its own against the
//! header grammar:
//!
//! ```text
//! [DD/MM/YY, H:MM:SS AM|PM] Sender: message text
//! [DD/MM/YY, H:MM:SS AM|PM] message text
//! ```
//!
//! A line without a sender is a group notification. Lines that do not match
//! (including the continuation lines of multi-line messages) are dropped and
//! counted, never merged into the previous message.
//!
//! ```text
//! text ──lines()──▶ parse_line ──▶ Message ──collect──▶ MessageTable
//!                       │
//!                       └── None ──▶ dropped_lines += 1
//! ```

mod calendar;
mod grammar;
mod types;


pub use calendar::{DAY_NAMES, hour_bucket, hour_bucket_label, month_name};
pub use grammar::parse_line;
pub use types::{CalendarFields, GROUP_NOTIFICATION, Message, MessageTable};

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to read chat export {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn parse_export(text: &str) -> MessageTable {
    let mut messages = Vec::new();
    let mut dropped = 0;

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(message) => messages.push(message),
            None => {
                dropped += 1;
                tracing::debug!(line = index + 1, "dropped line outside export grammar");
            }
        }
    }

    tracing::info!(
        messages = messages.len(),
        dropped_lines = dropped,
        "chat export parsed"
    );

    MessageTable::new(messages, dropped)
}

pub fn read_export(path: &Path) -> Result<MessageTable, ExportError> {
    let text = std::fs::read_to_string(path).map_err(|e| ExportError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(parse_export(&text))
}
