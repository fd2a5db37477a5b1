use crate::conf::{ConfigError, LoadedConfig, load_config, resolve_config};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("chatlens.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn empty_file_gives_defaults() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "");

    // Act
    let loaded = load_config(&path).unwrap();

    // Assert
    let analysis = &loaded.config.analysis;
    assert_eq!(analysis.media_marker, "omitted");
    assert_eq!(analysis.link_pattern, r"https?://\S+");
    assert_eq!(analysis.top_senders, 5);
    assert_eq!(analysis.common_words, 20);
    assert_eq!(analysis.system_phrases.len(), 7);
    assert_eq!(loaded.config.wordcloud.width, 500);
    assert_eq!(loaded.config.wordcloud.max_words, 200);
    assert_eq!(loaded.source, Some(path));
}

#[test]
fn partial_sections_keep_remaining_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[analysis]
common_words = 10

[wordcloud]
width = 800
background = "black"
"#,
    );

    let loaded = load_config(&path).unwrap();

    assert_eq!(loaded.config.analysis.common_words, 10);
    assert_eq!(loaded.config.analysis.top_senders, 5);
    assert_eq!(loaded.config.wordcloud.width, 800);
    assert_eq!(loaded.config.wordcloud.height, 500);
    assert_eq!(loaded.config.wordcloud.background, "black");
}

#[test]
fn relative_stopwords_resolve_against_config_dir() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[analysis]\nstopwords = \"lists/stop.txt\"\n");

    let loaded = load_config(&path).unwrap();

    assert_eq!(loaded.stopwords_path(), dir.path().join("lists/stop.txt"));
}

#[test]
fn absolute_stopwords_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let absolute = dir.path().join("elsewhere.txt");
    let path = write_config(
        &dir,
        &format!("[analysis]\nstopwords = {:?}\n", absolute.display().to_string()),
    );

    let loaded = load_config(&path).unwrap();

    assert_eq!(loaded.stopwords_path(), absolute);
}

#[test]
fn defaults_resolve_stopwords_against_base_dir() {
    let loaded = LoadedConfig::defaults("/data/chat");

    assert_eq!(loaded.stopwords_path(), Path::new("/data/chat/stopwords.txt"));
    assert!(loaded.source.is_none());
}

#[test]
fn unknown_key_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[analysis]\nstop_words = \"x.txt\"\n");

    let err = load_config(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[analysis\n");

    let err = load_config(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = load_config(&dir.path().join("nope.toml")).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }), "{err}");
}

#[test]
fn invalid_values_are_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[wordcloud]\nmin_font_size = 40\nmax_font_size = 20\n");

    let err = load_config(&path).unwrap_err();

    assert!(
        matches!(
            err,
            ConfigError::InvalidValue {
                key: "wordcloud.max_font_size",
                ..
            }
        ),
        "{err}"
    );
}

#[test]
fn explicit_path_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");

    let result = resolve_config(Some(&missing));

    assert!(result.is_err());
}
