use chatlens_core::report::render_svg;
use chatlens_core::stats::StatsRequest;
use integration_tests::harness::open_fixture;
use pretty_assertions::assert_eq;

#[test]
fn fixture_word_cloud_uses_configured_canvas() {
    // Arrange
    let (table, analyzer) = open_fixture("sample_chat.txt");

    // Act
    let cloud = analyzer.word_cloud(&StatsRequest::overall(&table));

    // Assert
    assert_eq!((cloud.width, cloud.height), (400, 300));
    assert_eq!(cloud.words[0].text, "trip");
    for word in &cloud.words {
        assert!(word.x >= 0.0 && word.x + word.width <= 400.0, "{word:?}");
        assert!(word.y >= 0.0 && word.y + word.height <= 300.0, "{word:?}");
    }
}

#[test]
fn fixture_word_cloud_renders_to_svg_file() {
    let (table, analyzer) = open_fixture("sample_chat.txt");
    let cloud = analyzer.word_cloud(&StatsRequest::for_participant(&table, "Priya"));
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("cloud.svg");

    std::fs::write(&out, render_svg(&cloud)).unwrap();

    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains("width=\"400\" height=\"300\""));
    assert_eq!(svg.matches("<text ").count(), cloud.words.len());
    assert!(svg.contains(">great</text>"));
}
