use crate::stats::request::StatsRequest;
use crate::stats::rules::TextRules;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub messages: u64,
    pub words: u64,
    pub media: u64,
    pub links: u64,
}

/// Headline counts. Media and links count messages, not occurrences.
pub fn summarize(req: &StatsRequest<'_>, rules: &TextRules) -> Summary {
    let mut summary = Summary::default();

    for msg in req.messages() {
        summary.messages += 1;
        summary.words += msg.body.split_whitespace().count() as u64;

        if rules.is_media(&msg.body) {
            summary.media += 1;
        }
        if rules.has_link(&msg.body) {
            summary.links += 1;
        }
    }

    summary
}
