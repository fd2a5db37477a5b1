use crate::parse::read_export;
use anyhow::Result;
use std::path::Path;

/// Prints one participant per line, sorted.
pub fn participants(export: &Path) -> Result<()> {
    let table = read_export(export)?;

    for name in table.participants() {
        println!("{name}");
    }

    Ok(())
}
