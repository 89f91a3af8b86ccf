use crate::cmd::parse_date;
use crate::output::print_json;
use clap::Subcommand;
use std::path::Path;
use tracker_core::clock::SystemClock;
use tracker_core::{progress, TrackerError};

#[derive(Subcommand)]
pub enum ProgressSubcommand {
    /// Add a daily progress entry
    Add {
        /// Progress note text
        entry: String,
        /// Date in YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the daily progress document
    List {
        /// Date in YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
}

pub fn run(root: &Path, subcmd: ProgressSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ProgressSubcommand::Add { entry, date } => add(root, &entry, date.as_deref(), json),
        ProgressSubcommand::List { date } => list(root, date.as_deref(), json),
    }
}

fn add(root: &Path, entry: &str, date: Option<&str>, json: bool) -> anyhow::Result<()> {
    let date = date.map(parse_date).transpose()?;
    let path = progress::append_entry(root, date, entry, &SystemClock)?;

    if json {
        print_json(&serde_json::json!({ "path": path }))?;
    } else {
        println!("Added progress entry to {}", path.display());
    }
    Ok(())
}

fn list(root: &Path, date: Option<&str>, json: bool) -> anyhow::Result<()> {
    let date = date.map(parse_date).transpose()?;
    match progress::read_document(root, date, &SystemClock) {
        Ok(content) => {
            if json {
                print_json(&serde_json::json!({ "content": content }))?;
            } else {
                print!("{content}");
            }
            Ok(())
        }
        // A missing day is an empty result, not a failure.
        Err(TrackerError::ProgressNotFound(d)) => {
            if json {
                print_json(&serde_json::json!({ "date": d.to_string(), "found": false }))?;
            } else {
                println!("No progress document for {d}.");
            }
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
