use anyhow::{Context, Result, bail};
use rust_embed::RustEmbed;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "config-templates/"]
pub struct ConfigTemplates;

pub const TEMPLATE_FILES: &[&str] = &["chatlens.toml", "stopwords.txt"];

pub fn init(path: PathBuf) -> Result<()> {
    // Refuse anything but a missing or empty directory
    if path.exists() {
        if path.is_file() {
            bail!("{} exists and is not a directory", path.display());
        }

        let is_empty = fs::read_dir(&path)
            .with_context(|| format!("failed to read {}", path.display()))?
            .next()
            .is_none();
        if !is_empty {
            bail!(
                "config directory '{}' already exists and is not empty",
                path.display()
            );
        }
    }

    fs::create_dir_all(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    for name in TEMPLATE_FILES {
        write_file(&path.join(name), &template(name)?)?;
    }

    println!("✔ Initialized chatlens config in {}", path.display());
    println!("✔ Created:");
    for name in TEMPLATE_FILES {
        println!("  - {name}");
    }
    println!();
    println!("Next steps:");
    let config_file = path.join("chatlens.toml");
    println!("  chatlens config check {}", config_file.display());
    println!(
        "  chatlens analyze --config {} <chat.txt>",
        config_file.display()
    );

    Ok(())
}

/// Fetch an embedded config template as UTF-8 text
pub fn template(path: &str) -> Result<String> {
    let file = ConfigTemplates::get(path)
        .with_context(|| format!("missing embedded config template: {path}"))?;

    let s =
        std::str::from_utf8(file.data.as_ref()).context("config template is not valid UTF-8")?;

    Ok(s.to_owned())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    let mut f =
        fs::File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    f.write_all(contents.trim_start().as_bytes())?;
    Ok(())
}
