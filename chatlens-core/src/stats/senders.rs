use crate::parse::MessageTable;
use crate::stats::frequency::FrequencyTable;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderCount {
    pub sender: String,
    pub messages: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderShare {
    pub sender: String,
    /// Share of all messages, in percent, rounded to two decimals.
    pub percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TopSenders {
    pub top: Vec<SenderCount>,
    pub shares: Vec<SenderShare>,
}

/// Busiest senders over the whole table; never filtered by participant.
pub fn top_senders(table: &MessageTable, limit: usize) -> TopSenders {
    let total = table.len() as f64;
    let ranked = table
        .iter()
        .map(|m| m.sender.as_str())
        .collect::<FrequencyTable<_>>()
        .into_ranked();

    let shares = ranked
        .iter()
        .map(|(sender, count)| SenderShare {
            sender: sender.to_string(),
            percent: round_percent(*count as f64 / total * 100.0),
        })
        .collect();

    let top = ranked
        .into_iter()
        .take(limit)
        .map(|(sender, messages)| SenderCount {
            sender: sender.to_string(),
            messages,
        })
        .collect();

    TopSenders { top, shares }
}

fn round_percent(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
