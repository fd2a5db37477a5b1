use crate::cli::{open_session, warn_unknown_participant};
use crate::report::{AnalysisReport, ReportFormat, default_report_format, render};
use crate::stats::StatsRequest;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Exported chat text file
    pub export: PathBuf,

    /// Restrict the analysis to one participant (default: whole chat)
    #[arg(short, long)]
    pub participant: Option<String>,

    /// Path to chatlens.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (default: pretty on a terminal, plain otherwise)
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,
}

pub fn analyze(args: AnalyzeArgs) -> Result<()> {
    let (table, analyzer) = open_session(&args.export, args.config.as_deref())?;

    let participant = args.participant.as_deref();
    warn_unknown_participant(&table, participant);

    let req = StatsRequest::new(&table, participant);
    let report = AnalysisReport::build(&analyzer, &req);

    let format = args.format.unwrap_or_else(default_report_format);
    println!("{}", render(&report, format)?);

    Ok(())
}
