use chatlens_core::parse::parse_export;
use integration_tests::harness::{CapturedEvent, init_test_tracing, read_fixture};
use std::sync::{Arc, Mutex};
use tracing::Level;

#[test]
fn parsing_reports_dropped_lines_through_tracing() {
    // Arrange
    let events: Arc<Mutex<Vec<CapturedEvent>>> = Arc::new(Mutex::new(Vec::new()));
    init_test_tracing(events.clone());
    let export = read_fixture("sample_chat.txt");

    // Act
    let table = parse_export(&export);

    // Assert
    let events = events.lock().unwrap();

    let dropped: Vec<&str> = events
        .iter()
        .filter(|e| e.message() == Some("dropped line outside export grammar"))
        .filter_map(|e| e.field("line"))
        .collect();
    assert_eq!(dropped, vec!["9", "16"]);
    assert!(
        events
            .iter()
            .filter(|e| e.message() == Some("dropped line outside export grammar"))
            .all(|e| e.level == Level::DEBUG)
    );

    let summary = events
        .iter()
        .find(|e| e.message() == Some("chat export parsed"))
        .expect("parse summary event");
    assert_eq!(summary.level, Level::INFO);
    assert!(summary.target.starts_with("chatlens_core"));
    assert_eq!(summary.field("messages"), Some("13"));
    assert_eq!(summary.field("dropped_lines"), Some("2"));
    assert_eq!(table.dropped_lines(), 2);
}
