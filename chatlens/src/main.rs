use chatlens_core::cli;
use chatlens_core::cli::analyze::AnalyzeArgs;
use chatlens_core::cli::wordcloud::WordCloudArgs;
use chatlens_core::logging::init_logging;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "chatlens",
    version,
    about = "chatlens: statistics for exported group chats"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a chat export (counts, timelines, activity, words, emoji)
    Analyze(AnalyzeArgs),

    /// List the participants of a chat export
    Participants {
        /// Exported chat text file
        export: PathBuf,
    },

    /// Render a word cloud of a chat export as SVG
    Wordcloud(WordCloudArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let result = match cli.command {
        Command::Analyze(args) => cli::analyze::analyze(args),
        Command::Participants { export } => cli::participants::participants(&export),
        Command::Wordcloud(args) => cli::wordcloud::wordcloud(args),
        Command::Config { cmd } => cli::conf::run(cmd),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
