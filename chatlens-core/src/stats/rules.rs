use crate::conf::types::AnalysisConfig;
use crate::conf::ConfigError;
use regex::Regex;

/// Body classification shared by the statistics: media placeholders, links
/// and group-management events.
#[derive(Debug, Clone)]
pub struct TextRules {
    media_marker: String,
    system_phrases: Vec<String>,
    link: Regex,
}

impl TextRules {
    pub fn new(
        media_marker: &str,
        system_phrases: &[String],
        link_pattern: &str,
    ) -> Result<Self, ConfigError> {
        let link = Regex::new(link_pattern).map_err(|e| ConfigError::InvalidPattern {
            key: "analysis.link_pattern",
            source: e,
        })?;

        Ok(Self {
            media_marker: media_marker.to_lowercase(),
            system_phrases: system_phrases.iter().map(|p| p.to_lowercase()).collect(),
            link,
        })
    }

    pub fn from_config(cfg: &AnalysisConfig) -> Result<Self, ConfigError> {
        Self::new(&cfg.media_marker, &cfg.system_phrases, &cfg.link_pattern)
    }

    /// Case-insensitive media-omission marker match.
    pub fn is_media(&self, body: &str) -> bool {
        body.to_lowercase().contains(&self.media_marker)
    }

    pub fn has_link(&self, body: &str) -> bool {
        self.link.is_match(body)
    }

    /// Media placeholders and group-management events, which carry no
    /// vocabulary of their own.
    pub fn is_system_message(&self, body: &str) -> bool {
        let lowered = body.to_lowercase();
        lowered.contains(&self.media_marker)
            || self
                .system_phrases
                .iter()
                .any(|phrase| lowered.contains(phrase.as_str()))
    }
}

impl Default for TextRules {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default()).expect("default analysis rules are valid")
    }
}
