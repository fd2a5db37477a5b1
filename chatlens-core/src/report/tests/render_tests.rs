use crate::parse::{MessageTable, parse_export};
use crate::report::{AnalysisReport, ReportFormat, render, render_json, render_plain};
use crate::stats::{Analyzer, StatsRequest, StopWords, TextRules};
use pretty_assertions::assert_eq;

const CHAT: &str = "\
[01/01/23, 10:05:00 AM] Alice: Hello world 😀
[01/01/23, 10:06:00 AM] Bob: Hi Alice
this line is not a message
[01/01/23, 11:59:00 PM] Bob added Carol
[02/01/23, 9:15:00 AM] Alice: hello again
";

fn table() -> MessageTable {
    parse_export(CHAT)
}

fn analyzer() -> Analyzer {
    Analyzer::new(TextRules::default(), StopWords::parse("hi\n"))
}

#[test]
fn overall_report_includes_top_senders() {
    // Arrange
    let table = table();

    // Act
    let report = AnalysisReport::build(&analyzer(), &StatsRequest::overall(&table));

    // Assert
    assert_eq!(report.participant, None);
    assert_eq!(report.dropped_lines, 1);
    assert_eq!(report.summary.messages, 4);
    let top = report.top_senders.expect("overall report has top senders");
    assert_eq!(top.top[0].sender, "Alice");
}

#[test]
fn participant_report_has_no_top_senders() {
    let table = table();

    let report = AnalysisReport::build(&analyzer(), &StatsRequest::for_participant(&table, "Bob"));

    assert_eq!(report.participant.as_deref(), Some("Bob"));
    assert!(report.top_senders.is_none());
    assert_eq!(report.summary.messages, 1);
    assert_eq!(report.heatmap.total(), 1);
}

#[test]
fn plain_output_lists_every_section() {
    let table = table();
    let report = AnalysisReport::build(&analyzer(), &StatsRequest::overall(&table));

    let text = render_plain(&report);

    for heading in [
        "Chat Analysis (overall)",
        "Most busy users:",
        "Monthly timeline:",
        "Daily timeline:",
        "Most busy day:",
        "Most busy month:",
        "Weekly activity heatmap:",
        "Most common words:",
        "Emoji:",
    ] {
        assert!(text.contains(heading), "missing {heading:?} in:\n{text}");
    }
    assert!(text.contains("Messages: 4 | Words: 10 | Media: 0 | Links: 0"));
    assert!(text.contains("Skipped 1 line(s) outside the export format"));
    assert!(text.contains("January-2023"));
    assert!(text.contains("😀=1"));
    assert!(!text.contains('\u{1b}'), "plain output must not contain escapes");
}

#[test]
fn plain_output_for_participant_omits_busy_users() {
    let table = table();
    let report =
        AnalysisReport::build(&analyzer(), &StatsRequest::for_participant(&table, "Bob"));

    let text = render_plain(&report);

    assert!(text.starts_with("Chat Analysis (participant: Bob)\n"));
    assert!(!text.contains("Most busy users"));
    assert!(text.contains("Emoji:\n  <none>"));
}

#[test]
fn empty_selection_renders_placeholders() {
    let table = table();
    let report =
        AnalysisReport::build(&analyzer(), &StatsRequest::for_participant(&table, "Nobody"));

    let text = render_plain(&report);

    assert!(text.contains("Messages: 0 | Words: 0 | Media: 0 | Links: 0"));
    assert!(text.contains("Weekly activity heatmap:\n  <no data>"));
}

#[test]
fn json_output_round_trips_through_serde_json() {
    let table = table();
    let report = AnalysisReport::build(&analyzer(), &StatsRequest::overall(&table));

    let json = render_json(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["summary"]["messages"], 4);
    assert_eq!(value["dropped_lines"], 1);
    assert_eq!(value["participant"], serde_json::Value::Null);
    assert_eq!(value["top_senders"]["top"][0]["sender"], "Alice");
    assert_eq!(value["daily_timeline"][0]["date"], "2023-01-01");
    assert_eq!(value["heatmap"]["days"][0], "Monday");
    assert_eq!(value["common_words"][0]["word"], "hello");
}

#[test]
fn json_for_participant_has_no_top_senders_key() {
    let table = table();
    let report =
        AnalysisReport::build(&analyzer(), &StatsRequest::for_participant(&table, "Alice"));

    let json = render(&report, ReportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value.get("top_senders").is_none());
    assert_eq!(value["participant"], "Alice");
}
