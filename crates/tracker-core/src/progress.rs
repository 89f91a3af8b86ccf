//! Daily progress documents, one per calendar date.
//!
//! A document is created lazily on first append with four fixed narrative
//! sections. The append-only Log section is added exactly once, on the first
//! log entry. Presence of the Log section is tracked by a sentinel line
//! written alongside the header and matched exactly — narrative text that
//! happens to mention `## Log` never suppresses header insertion.

use crate::clock::{iso_second, Clock};
use crate::error::{Result, TrackerError};
use crate::io;
use crate::paths::WorkspaceLayout;
use crate::workspace;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Sentinel marking that the Log section header has been written.
pub const LOG_MARKER: &str = "<!-- tracker:log -->";

fn document_template(date: NaiveDate) -> String {
    format!(
        "# Daily Progress - {date}\n\n\
         ## Wins\n- \n\n\
         ## In Progress\n- \n\n\
         ## Blockers\n- \n\n\
         ## Next Steps\n- \n"
    )
}

fn has_log_section(content: &str) -> bool {
    // Exact line match — avoids false positives from substring checks.
    content.lines().any(|l| l.trim_end() == LOG_MARKER)
}

/// Append one log line to the document for `date` (today when omitted),
/// creating the document and the Log section as needed. Returns the path
/// written to.
pub fn append_entry(
    root: &Path,
    date: Option<NaiveDate>,
    text: &str,
    clock: &dyn Clock,
) -> Result<PathBuf> {
    workspace::require_initialized(root)?;
    let date = date.unwrap_or_else(|| clock.today());
    let path = WorkspaceLayout::new(root).progress_path(date);

    let mut content = if path.exists() {
        std::fs::read_to_string(&path)?
    } else {
        document_template(date)
    };

    if !has_log_section(&content) {
        if !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(&format!("\n{LOG_MARKER}\n## Log\n"));
    }
    content.push_str(&format!("- [{}] {}\n", iso_second(clock.now()), text.trim()));

    io::atomic_write(&path, content.as_bytes())?;
    Ok(path)
}

/// Read the full document for `date` (today when omitted).
pub fn read_document(root: &Path, date: Option<NaiveDate>, clock: &dyn Clock) -> Result<String> {
    workspace::require_initialized(root)?;
    let date = date.unwrap_or_else(|| clock.today());
    let path = WorkspaceLayout::new(root).progress_path(date);
    if !path.exists() {
        return Err(TrackerError::ProgressNotFound(date));
    }
    Ok(std::fs::read_to_string(&path)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
