use crate::cli::conf::{config_error_hint, render_config_error};
use crate::conf::ConfigError;
use pretty_assertions::assert_eq;
use std::io;

fn missing_stop_words() -> ConfigError {
    ConfigError::StopWords {
        path: "lists/stop.txt".into(),
        source: io::Error::new(io::ErrorKind::NotFound, "no such stop list"),
    }
}

#[test]
fn plain_rendering_names_error_and_cause_once() {
    // Arrange
    let err = missing_stop_words();

    // Act
    let text = render_config_error(err, true);

    // Assert
    assert!(text.contains("failed to read stop-word list lists/stop.txt"), "{text}");
    assert_eq!(text.matches("no such stop list").count(), 1, "{text}");
    assert!(!text.contains('\u{1b}'), "plain rendering must not contain escapes");
}

#[test]
fn report_rendering_includes_cause_once() {
    let err = missing_stop_words();

    let text = render_config_error(err, false);

    assert!(text.contains("failed to read stop-word list"), "{text}");
    assert_eq!(text.matches("no such stop list").count(), 1, "{text}");
}

#[test]
fn validation_errors_render_without_cause() {
    let err = ConfigError::invalid("wordcloud.max_words", "must be at least 1");

    let text = render_config_error(err, true);

    assert!(
        text.contains("invalid value for `wordcloud.max_words`: must be at least 1"),
        "{text}"
    );
}

#[test]
fn hints_cover_stop_words_and_font_range() {
    let font = ConfigError::invalid("wordcloud.max_font_size", "too small");
    let other = ConfigError::invalid("wordcloud.max_words", "must be at least 1");

    assert!(config_error_hint(&missing_stop_words()).is_some());
    assert!(config_error_hint(&font).is_some());
    assert!(config_error_hint(&other).is_none());
}
