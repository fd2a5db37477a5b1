use chatlens_core::conf::load_config;
use chatlens_core::parse::{MessageTable, read_export};
use chatlens_core::stats::Analyzer;
use std::path::PathBuf;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

pub fn read_fixture(file: &str) -> String {
    std::fs::read_to_string(fixture_path(file))
        .unwrap_or_else(|e| panic!("failed to read fixture {file}: {e}"))
}

/// Parses a fixture export and builds the analyzer from `fixtures/chatlens.toml`.
pub fn open_fixture(export: &str) -> (MessageTable, Analyzer) {
    let loaded = load_config(&fixture_path("chatlens.toml")).expect("fixture config is valid");
    let analyzer = Analyzer::from_config(&loaded).expect("fixture stop words load");
    let table = read_export(&fixture_path(export)).expect("fixture export is readable");
    (table, analyzer)
}
