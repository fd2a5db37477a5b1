//! One request's worth of statistics, bundled for output.

mod render;
mod svg;

#[cfg(test)]
mod tests;

pub use render::{render_json, render_plain, render_pretty};
pub use svg::render_svg;

use crate::stats::{
    ActivityCount, Analyzer, DailyCount, EmojiCount, Heatmap, MonthlyCount, StatsRequest, Summary,
    TopSenders, WordCount,
};
use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// `None` for the whole chat.
    pub participant: Option<String>,
    pub dropped_lines: usize,
    pub summary: Summary,
    /// Only computed for the whole chat.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_senders: Option<TopSenders>,
    pub monthly_timeline: Vec<MonthlyCount>,
    pub daily_timeline: Vec<DailyCount>,
    pub week_activity: Vec<ActivityCount>,
    pub month_activity: Vec<ActivityCount>,
    pub heatmap: Heatmap,
    pub common_words: Vec<WordCount>,
    pub emoji: Vec<EmojiCount>,
}

impl AnalysisReport {
    pub fn build(analyzer: &Analyzer, req: &StatsRequest<'_>) -> Self {
        let top_senders = req
            .participant()
            .is_none()
            .then(|| analyzer.top_senders(req.table()));

        Self {
            participant: req.participant().map(str::to_string),
            dropped_lines: req.table().dropped_lines(),
            summary: analyzer.summary(req),
            top_senders,
            monthly_timeline: analyzer.monthly_timeline(req),
            daily_timeline: analyzer.daily_timeline(req),
            week_activity: analyzer.week_activity(req),
            month_activity: analyzer.month_activity(req),
            heatmap: analyzer.activity_heatmap(req),
            common_words: analyzer.most_common_words(req),
            emoji: analyzer.emoji_frequency(req),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Pretty,
    Plain,
    Json,
}

pub fn default_report_format() -> ReportFormat {
    if io::stdout().is_terminal() {
        ReportFormat::Pretty
    } else {
        ReportFormat::Plain
    }
}

pub fn render(report: &AnalysisReport, format: ReportFormat) -> serde_json::Result<String> {
    match format {
        ReportFormat::Pretty => Ok(render_pretty(report)),
        ReportFormat::Plain => Ok(render_plain(report)),
        ReportFormat::Json => render_json(report),
    }
}
