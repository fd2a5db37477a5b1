use crate::conf::error::ConfigError;
use crate::conf::types::{AnalysisConfig, ChatlensConfig, WordCloudConfig};
use regex::Regex;

/// Rejects values the statistics cannot work with. Stops at the first
/// problem found.
pub fn validate_config(cfg: &ChatlensConfig) -> Result<(), ConfigError> {
    validate_analysis(&cfg.analysis)?;
    validate_wordcloud(&cfg.wordcloud)?;
    Ok(())
}

fn validate_analysis(cfg: &AnalysisConfig) -> Result<(), ConfigError> {
    if cfg.media_marker.trim().is_empty() {
        return Err(ConfigError::invalid(
            "analysis.media_marker",
            "must not be empty",
        ));
    }

    if let Some(i) = cfg.system_phrases.iter().position(|p| p.trim().is_empty()) {
        return Err(ConfigError::invalid(
            "analysis.system_phrases",
            format!("entry {i} is empty and would match every message"),
        ));
    }

    Regex::new(&cfg.link_pattern).map_err(|e| ConfigError::InvalidPattern {
        key: "analysis.link_pattern",
        source: e,
    })?;

    if cfg.top_senders == 0 {
        return Err(ConfigError::invalid("analysis.top_senders", "must be at least 1"));
    }
    if cfg.common_words == 0 {
        return Err(ConfigError::invalid("analysis.common_words", "must be at least 1"));
    }

    Ok(())
}

fn validate_wordcloud(cfg: &WordCloudConfig) -> Result<(), ConfigError> {
    if cfg.width == 0 || cfg.height == 0 {
        return Err(ConfigError::invalid(
            "wordcloud.width",
            format!("canvas must be non-empty, got {}x{}", cfg.width, cfg.height),
        ));
    }

    if cfg.min_font_size == 0 {
        return Err(ConfigError::invalid("wordcloud.min_font_size", "must be at least 1"));
    }

    if cfg.min_font_size > cfg.max_font_size {
        return Err(ConfigError::invalid(
            "wordcloud.max_font_size",
            format!(
                "must not be smaller than min_font_size ({} < {})",
                cfg.max_font_size, cfg.min_font_size
            ),
        ));
    }

    if cfg.max_words == 0 {
        return Err(ConfigError::invalid("wordcloud.max_words", "must be at least 1"));
    }

    if cfg.background.trim().is_empty() {
        return Err(ConfigError::invalid("wordcloud.background", "must not be empty"));
    }

    Ok(())
}
