pub mod analyze;
pub mod conf;
pub mod participants;
pub mod wordcloud;

use crate::conf::resolve_config;
use crate::parse::{MessageTable, read_export};
use crate::stats::Analyzer;
use anyhow::{Context, Result};
use std::path::Path;

/// Parses the export and prepares an analyzer from the resolved config.
pub(crate) fn open_session(
    export: &Path,
    config: Option<&Path>,
) -> Result<(MessageTable, Analyzer)> {
    let loaded = resolve_config(config).context("failed to load configuration")?;
    let analyzer = Analyzer::from_config(&loaded).context("failed to prepare analysis")?;
    let table = read_export(export)?;

    Ok((table, analyzer))
}

/// Unknown participants are allowed; they simply select nothing.
pub(crate) fn warn_unknown_participant(table: &MessageTable, participant: Option<&str>) {
    let Some(name) = participant else {
        return;
    };
    if !table.has_participant(name) {
        tracing::warn!(participant = name, "participant does not appear in the export");
    }
}
