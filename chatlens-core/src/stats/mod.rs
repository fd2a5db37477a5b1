//! Statistics over a parsed chat export.
//!
//! Every view is a pure function of a [`StatsRequest`] (the table plus an
//! optional participant) and returns an owned, serializable result. Views do
//! not depend on one another and an empty selection yields empty results.
//! [`Analyzer`] bundles the configured rules, stop words and limits so
//! callers do not have to thread them through every call.

mod activity;
mod analyzer;
mod emoji;
mod frequency;
mod request;
mod rules;
mod senders;
mod stopwords;
mod summary;
mod timeline;
mod wordcloud;
mod words;

#[cfg(test)]
mod tests;

pub use activity::{ActivityCount, Heatmap, activity_heatmap, month_activity, week_activity};
pub use analyzer::{Analyzer, DEFAULT_COMMON_WORDS, DEFAULT_TOP_SENDERS};
pub use emoji::{EmojiCount, emoji_frequency, is_emoji};
pub use frequency::FrequencyTable;
pub use request::StatsRequest;
pub use rules::TextRules;
pub use senders::{SenderCount, SenderShare, TopSenders, top_senders};
pub use stopwords::StopWords;
pub use summary::{Summary, summarize};
pub use timeline::{DailyCount, MonthlyCount, daily_timeline, monthly_timeline};
pub use wordcloud::{PlacedWord, WordCloud, layout_word_cloud, word_cloud};
pub use words::{WordCount, most_common_words, word_frequencies};
