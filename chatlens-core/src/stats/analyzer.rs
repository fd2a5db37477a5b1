use crate::conf::{ConfigError, LoadedConfig};
use crate::conf::types::WordCloudConfig;
use crate::parse::MessageTable;
use crate::stats::activity::{
    ActivityCount, Heatmap, activity_heatmap, month_activity, week_activity,
};
use crate::stats::emoji::{EmojiCount, emoji_frequency};
use crate::stats::request::StatsRequest;
use crate::stats::rules::TextRules;
use crate::stats::senders::{TopSenders, top_senders};
use crate::stats::stopwords::StopWords;
use crate::stats::summary::{Summary, summarize};
use crate::stats::timeline::{DailyCount, MonthlyCount, daily_timeline, monthly_timeline};
use crate::stats::wordcloud::{WordCloud, word_cloud};
use crate::stats::words::{WordCount, most_common_words};

pub const DEFAULT_TOP_SENDERS: usize = 5;
pub const DEFAULT_COMMON_WORDS: usize = 20;

/// Everything the statistics need besides the table, resolved once from
/// configuration and shared read-only by every request.
#[derive(Debug, Clone)]
pub struct Analyzer {
    rules: TextRules,
    stop_words: StopWords,
    top_senders: usize,
    common_words: usize,
    word_cloud: WordCloudConfig,
}

impl Analyzer {
    pub fn new(rules: TextRules, stop_words: StopWords) -> Self {
        Self {
            rules,
            stop_words,
            top_senders: DEFAULT_TOP_SENDERS,
            common_words: DEFAULT_COMMON_WORDS,
            word_cloud: WordCloudConfig::default(),
        }
    }

    /// Compiles the rules and reads the stop-word file named by the config.
    pub fn from_config(loaded: &LoadedConfig) -> Result<Self, ConfigError> {
        let analysis = &loaded.config.analysis;
        let rules = TextRules::from_config(analysis)?;
        let stop_words = StopWords::from_file(&loaded.stopwords_path())?;

        Ok(Self {
            rules,
            stop_words,
            top_senders: analysis.top_senders,
            common_words: analysis.common_words,
            word_cloud: loaded.config.wordcloud.clone(),
        })
    }

    pub fn with_limits(mut self, top_senders: usize, common_words: usize) -> Self {
        self.top_senders = top_senders;
        self.common_words = common_words;
        self
    }

    pub fn with_word_cloud(mut self, settings: WordCloudConfig) -> Self {
        self.word_cloud = settings;
        self
    }

    pub fn rules(&self) -> &TextRules {
        &self.rules
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn summary(&self, req: &StatsRequest<'_>) -> Summary {
        summarize(req, &self.rules)
    }

    pub fn top_senders(&self, table: &MessageTable) -> TopSenders {
        top_senders(table, self.top_senders)
    }

    pub fn monthly_timeline(&self, req: &StatsRequest<'_>) -> Vec<MonthlyCount> {
        monthly_timeline(req)
    }

    pub fn daily_timeline(&self, req: &StatsRequest<'_>) -> Vec<DailyCount> {
        daily_timeline(req)
    }

    pub fn week_activity(&self, req: &StatsRequest<'_>) -> Vec<ActivityCount> {
        week_activity(req)
    }

    pub fn month_activity(&self, req: &StatsRequest<'_>) -> Vec<ActivityCount> {
        month_activity(req)
    }

    pub fn activity_heatmap(&self, req: &StatsRequest<'_>) -> Heatmap {
        activity_heatmap(req)
    }

    pub fn most_common_words(&self, req: &StatsRequest<'_>) -> Vec<WordCount> {
        most_common_words(req, &self.rules, &self.stop_words, self.common_words)
    }

    pub fn emoji_frequency(&self, req: &StatsRequest<'_>) -> Vec<EmojiCount> {
        emoji_frequency(req)
    }

    pub fn word_cloud(&self, req: &StatsRequest<'_>) -> WordCloud {
        word_cloud(req, &self.rules, &self.stop_words, &self.word_cloud)
    }
}
