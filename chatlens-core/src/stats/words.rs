use crate::stats::frequency::FrequencyTable;
use crate::stats::request::StatsRequest;
use crate::stats::rules::TextRules;
use crate::stats::stopwords::StopWords;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// Lowercased whitespace tokens of every selected message that is not a
/// system message, minus stop words. Punctuation stays attached.
pub fn word_frequencies(
    req: &StatsRequest<'_>,
    rules: &TextRules,
    stop_words: &StopWords,
) -> FrequencyTable<String> {
    let mut table = FrequencyTable::new();

    for msg in req.messages() {
        if rules.is_system_message(&msg.body) {
            continue;
        }

        for token in msg.body.to_lowercase().split_whitespace() {
            if !stop_words.contains(token) {
                table.record(token.to_string());
            }
        }
    }

    table
}

pub fn most_common_words(
    req: &StatsRequest<'_>,
    rules: &TextRules,
    stop_words: &StopWords,
    limit: usize,
) -> Vec<WordCount> {
    word_frequencies(req, rules, stop_words)
        .into_top(limit)
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect()
}
