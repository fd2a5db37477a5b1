use crate::cli::{open_session, warn_unknown_participant};
use crate::report::render_svg;
use crate::stats::StatsRequest;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct WordCloudArgs {
    /// Exported chat text file
    pub export: PathBuf,

    /// Restrict the cloud to one participant (default: whole chat)
    #[arg(short, long)]
    pub participant: Option<String>,

    /// Path to chatlens.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write the SVG image
    #[arg(short, long, default_value = "wordcloud.svg")]
    pub out: PathBuf,
}

pub fn wordcloud(args: WordCloudArgs) -> Result<()> {
    let (table, analyzer) = open_session(&args.export, args.config.as_deref())?;

    let participant = args.participant.as_deref();
    warn_unknown_participant(&table, participant);

    let cloud = analyzer.word_cloud(&StatsRequest::new(&table, participant));
    if cloud.is_empty() {
        tracing::warn!("no words left after filtering; writing an empty word cloud");
    }

    fs::write(&args.out, render_svg(&cloud))
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    println!("✔ Wrote {} words to {}", cloud.words.len(), args.out.display());
    Ok(())
}
