use crate::conf::{ConfigError, LoadedConfig, load_config};
use crate::stats::Analyzer;
use miette::{NarratableReportHandler, Report};
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    match load_config(&path).and_then(|loaded| check_loaded(&loaded)) {
        Ok(()) => Ok(()),
        Err(err) => {
            print_config_error(err, plain);
            std::process::exit(1);
        }
    }
}

fn check_loaded(loaded: &LoadedConfig) -> Result<(), ConfigError> {
    let analyzer = Analyzer::from_config(loaded)?;
    let analysis = &loaded.config.analysis;
    let cloud = &loaded.config.wordcloud;

    println!("✔ Config loaded successfully");
    println!(
        "✔ {} stop words from {}",
        analyzer.stop_words().len(),
        loaded.stopwords_path().display()
    );
    println!("✔ {} system phrases", analysis.system_phrases.len());
    println!(
        "✔ top {} senders, top {} words",
        analysis.top_senders, analysis.common_words
    );
    println!(
        "✔ word cloud {}x{}, fonts {}-{}px, up to {} words",
        cloud.width, cloud.height, cloud.min_font_size, cloud.max_font_size, cloud.max_words
    );
    Ok(())
}

fn print_config_error(err: ConfigError, plain: bool) {
    let hint = config_error_hint(&err);
    eprintln!("{}", render_config_error(err, plain));
    if let Some(hint) = hint {
        eprintln!();
        eprintln!("{hint}");
    }
}

/// Error with its cause chain. `plain` renders narrated text without
/// colors or box drawing.
pub fn render_config_error(err: ConfigError, plain: bool) -> String {
    if plain {
        let mut out = String::new();
        match NarratableReportHandler::new().render_report(&mut out, &err) {
            Ok(()) => out,
            Err(_) => err.to_string(),
        }
    } else {
        format!("\n{:?}", Report::new(err))
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::StopWords { .. } => Some(
            "The stop-word list is required. Point `analysis.stopwords` at a UTF-8\n\
             file with one word per line, or create one with:\n\
             \n\
             chatlens config init",
        ),

        ConfigError::InvalidPattern { .. } => Some(
            "Patterns use Rust regex syntax. Single-quoted TOML strings avoid\n\
             double escaping:\n\
             \n\
             [analysis]\n\
             link_pattern = 'https?://\\S+'",
        ),

        ConfigError::InvalidValue {
            key: "wordcloud.max_font_size",
            ..
        } => Some(
            "The largest word is drawn at max_font_size, the smallest at\n\
             min_font_size, so max_font_size must be the larger value.",
        ),

        ConfigError::Parse { .. } => Some(
            "Known sections are [analysis] and [wordcloud]; unknown keys are rejected.",
        ),

        _ => None,
    }
}
