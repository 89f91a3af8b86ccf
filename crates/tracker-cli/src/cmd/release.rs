use crate::cmd::parse_date;
use crate::output::print_json;
use clap::Subcommand;
use std::path::Path;
use tracker_core::clock::SystemClock;
use tracker_core::release::{self, ReleaseNote};

#[derive(Subcommand)]
pub enum ReleaseSubcommand {
    /// Add a release note section
    #[command(disable_version_flag = true)]
    Add {
        /// Release version label
        version: String,
        /// One-line release summary
        summary: String,
        /// Who/what was impacted
        impact: String,
        /// Owner name
        owner: String,
        /// Additional notes
        notes: String,
        /// Date in YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show all release notes
    List,
}

pub fn run(root: &Path, subcmd: ReleaseSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ReleaseSubcommand::Add {
            version,
            summary,
            impact,
            owner,
            notes,
            date,
        } => {
            let note = ReleaseNote {
                version,
                summary,
                impact,
                owner,
                notes,
                date: date.as_deref().map(parse_date).transpose()?,
            };
            let path = release::append_note(root, &note, &SystemClock)?;
            if json {
                print_json(&serde_json::json!({ "path": path, "version": note.version }))?;
            } else {
                println!("Added release note to {}", path.display());
            }
            Ok(())
        }
        ReleaseSubcommand::List => {
            let content = release::read_notes(root)?;
            if json {
                print_json(&serde_json::json!({ "content": content }))?;
            } else {
                print!("{content}");
            }
            Ok(())
        }
    }
}
