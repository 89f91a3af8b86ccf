mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::progress::ProgressSubcommand;
use cmd::release::ReleaseSubcommand;
use cmd::screenshot::ScreenshotSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tracker",
    about = "Track daily progress, release notes, and launch screenshots",
    version,
    propagate_version = true
)]
struct Cli {
    /// Workspace root (default: auto-detect from .workspace/ or .git/)
    #[arg(long, global = true, env = "TRACKER_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize tracking files in the workspace
    Init,

    /// Daily progress operations
    Progress {
        #[command(subcommand)]
        subcommand: ProgressSubcommand,
    },

    /// Release notes operations
    Release {
        #[command(subcommand)]
        subcommand: ReleaseSubcommand,
    },

    /// Screenshot registry operations
    Screenshot {
        #[command(subcommand)]
        subcommand: ScreenshotSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root, cli.json),
        Commands::Progress { subcommand } => cmd::progress::run(&root, subcommand, cli.json),
        Commands::Release { subcommand } => cmd::release::run(&root, subcommand, cli.json),
        Commands::Screenshot { subcommand } => cmd::screenshot::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
