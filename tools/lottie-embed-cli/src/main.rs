//! lottie-embed CLI — Inline external image assets into Lottie JSON.
//!
//! Usage:
//!   lottie-embed embed [PATH]      Embed assets, back up and rewrite the document
//!   lottie-embed inspect [PATH]    Show how each asset would resolve
//!   lottie-embed config            Show or initialize the configuration

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use lottie_embed_common::{AppConfig, ResolverStrategy};

mod commands;
mod ui;

#[derive(Parser)]
#[command(
    name = "lottie-embed",
    about = "Embed external image assets into a Lottie JSON document",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/lottie-embed/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Embed all external assets and rewrite the document
    Embed {
        #[command(flatten)]
        resolve: ResolveArgs,

        /// Leave image layer anchor points as exported
        #[arg(long)]
        no_center_anchors: bool,

        /// Suffix for the backup copy of the original document
        #[arg(long)]
        backup_suffix: Option<String>,

        /// Resolve and report without writing any file
        #[arg(long)]
        dry_run: bool,
    },

    /// Show each asset and the file it would be embedded from
    Inspect {
        #[command(flatten)]
        resolve: ResolveArgs,
    },

    /// Show the effective configuration
    Config {
        /// Write the default configuration to the config file
        #[arg(long)]
        init: bool,
    },
}

/// Document and asset-resolution arguments shared by `embed` and `inspect`.
#[derive(Args, Clone)]
struct ResolveArgs {
    /// Lottie JSON document (prompted for when omitted)
    path: Option<PathBuf>,

    /// Asset resolution strategy
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Folder holding the project's source images (name matching)
    #[arg(long, conflicts_with = "scene_manifest")]
    scene_dir: Option<PathBuf>,

    /// JSON list of project assets `[{id, type, path}]` (name matching)
    #[arg(long)]
    scene_manifest: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// <document folder>/<u><p> must exist
    PathJoin,
    /// Match file names against the project's assets
    NameMatch,
}

impl From<StrategyArg> for ResolverStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::PathJoin => ResolverStrategy::PathJoin,
            StrategyArg::NameMatch => ResolverStrategy::NameMatch,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    logging.json |= cli.json_logs;
    lottie_embed_common::logging::init_logging(&logging);

    match cli.command {
        Commands::Embed {
            resolve,
            no_center_anchors,
            backup_suffix,
            dry_run,
        } => commands::embed::run(
            resolve,
            config,
            no_center_anchors,
            backup_suffix,
            dry_run,
        ),
        Commands::Inspect { resolve } => commands::inspect::run(resolve, config),
        Commands::Config { init } => commands::config::run(cli.config, config, init),
    }
}
