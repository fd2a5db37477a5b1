use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SYSTEM_PHRASES: &[&str] = &[
    "created group",
    "added",
    "left",
    "removed",
    "changed the subject",
    "changed this group",
    "changed their phone number",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChatlensConfig {
    pub analysis: AnalysisConfig,
    pub wordcloud: WordCloudConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Stop-word list, one word per line. Relative paths are resolved
    /// against the directory of the config file.
    pub stopwords: PathBuf,

    /// Substring marking a media placeholder, e.g. "image omitted".
    pub media_marker: String,

    /// Regex a message body must match to count as a shared link.
    pub link_pattern: String,

    /// Case-insensitive substrings marking group-management events.
    pub system_phrases: Vec<String>,

    pub top_senders: usize,
    pub common_words: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stopwords: PathBuf::from("stopwords.txt"),
            media_marker: "omitted".to_string(),
            link_pattern: r"https?://\S+".to_string(),
            system_phrases: DEFAULT_SYSTEM_PHRASES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            top_senders: 5,
            common_words: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WordCloudConfig {
    pub width: u32,
    pub height: u32,
    pub min_font_size: u32,
    pub max_font_size: u32,
    pub max_words: usize,
    pub background: String,
}

impl Default for WordCloudConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            min_font_size: 10,
            max_font_size: 96,
            max_words: 200,
            background: "white".to_string(),
        }
    }
}
