use super::{sample_analyzer, sample_table};
use crate::parse::parse_export;
use crate::stats::{StatsRequest, Summary, TextRules, summarize};
use pretty_assertions::assert_eq;

#[test]
fn overall_summary_counts_everything() {
    // Arrange
    let table = sample_table();
    let analyzer = sample_analyzer();

    // Act
    let summary = analyzer.summary(&StatsRequest::overall(&table));

    // Assert
    assert_eq!(
        summary,
        Summary {
            messages: 7,
            words: 18,
            media: 1,
            links: 1,
        }
    );
}

#[test]
fn participant_summary_only_counts_their_messages() {
    let table = sample_table();
    let analyzer = sample_analyzer();

    let summary = analyzer.summary(&StatsRequest::for_participant(&table, "Alice"));

    assert_eq!(
        summary,
        Summary {
            messages: 3,
            words: 8,
            media: 1,
            links: 0,
        }
    );
}

#[test]
fn overall_count_is_sum_of_participant_counts() {
    let table = sample_table();
    let rules = TextRules::default();

    let overall = summarize(&StatsRequest::overall(&table), &rules).messages;
    let per_participant: u64 = table
        .participants()
        .into_iter()
        .map(|p| summarize(&StatsRequest::for_participant(&table, p), &rules).messages)
        .sum();

    assert_eq!(overall, per_participant);
}

#[test]
fn media_marker_is_case_insensitive() {
    let table = parse_export(
        "\
[01/01/23, 10:05:00 AM] Alice: <Media Omitted>
[01/01/23, 10:06:00 AM] Alice: VIDEO OMITTED
[01/01/23, 10:07:00 AM] Alice: nothing here
",
    );

    let summary = summarize(&StatsRequest::overall(&table), &TextRules::default());

    assert_eq!(summary.media, 2);
}

#[test]
fn links_count_messages_not_occurrences() {
    let table = parse_export(
        "[01/01/23, 10:05:00 AM] Alice: http://a.example and https://b.example\n",
    );

    let summary = summarize(&StatsRequest::overall(&table), &TextRules::default());

    assert_eq!(summary.links, 1);
}

#[test]
fn custom_link_pattern_is_honoured() {
    let rules = TextRules::new("omitted", &[], r"www\.\S+").unwrap();
    let table = parse_export(
        "\
[01/01/23, 10:05:00 AM] Alice: see www.example.com
[01/01/23, 10:06:00 AM] Alice: see https://example.com
",
    );

    let summary = summarize(&StatsRequest::overall(&table), &rules);

    assert_eq!(summary.links, 1);
}

#[test]
fn empty_table_gives_zero_summary() {
    let table = parse_export("nothing parseable\n");

    let summary = summarize(&StatsRequest::overall(&table), &TextRules::default());

    assert_eq!(summary, Summary::default());
}

#[test]
fn unknown_participant_selects_nothing() {
    let table = sample_table();

    let summary = summarize(
        &StatsRequest::for_participant(&table, "Mallory"),
        &TextRules::default(),
    );

    assert_eq!(summary, Summary::default());
}
