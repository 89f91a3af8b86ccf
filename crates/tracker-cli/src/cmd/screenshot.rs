use crate::cmd::parse_date;
use crate::output::print_json;
use clap::Subcommand;
use std::path::Path;
use tracker_core::clock::SystemClock;
use tracker_core::screenshot::{self, Importance, ScreenshotRow};

#[derive(Subcommand)]
pub enum ScreenshotSubcommand {
    /// Register a launch screenshot
    Add {
        /// Feature or flow name
        feature: String,
        /// Relative screenshot path
        path: String,
        /// What this screenshot shows
        description: String,
        /// Launch importance: critical, high, medium, low
        importance: String,
        /// Date in YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show the screenshot registry
    List,
}

pub fn run(root: &Path, subcmd: ScreenshotSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ScreenshotSubcommand::Add {
            feature,
            path,
            description,
            importance,
            date,
        } => {
            // Parsed before any write happens — a bad value leaves the
            // registry untouched.
            let importance: Importance = importance.parse()?;
            let row = ScreenshotRow {
                feature,
                path,
                description,
                importance,
                date: date.as_deref().map(parse_date).transpose()?,
            };
            let written = screenshot::append_row(root, &row, &SystemClock)?;
            if json {
                print_json(&serde_json::json!({
                    "path": written,
                    "feature": row.feature,
                    "importance": row.importance.to_string(),
                }))?;
            } else {
                println!("Added screenshot entry to {}", written.display());
            }
            Ok(())
        }
        ScreenshotSubcommand::List => {
            let content = screenshot::read_registry(root)?;
            if json {
                print_json(&serde_json::json!({ "content": content }))?;
            } else {
                print!("{content}");
            }
            Ok(())
        }
    }
}
