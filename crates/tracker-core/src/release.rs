//! Release notes: a single append-only document of release sections, in
//! append order (write time, not version order).

use crate::clock::Clock;
use crate::error::Result;
use crate::io;
use crate::paths::WorkspaceLayout;
use crate::workspace::{self, RELEASE_NOTES_TEMPLATE};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// One release section. `date` falls back to the clock's current date.
#[derive(Debug, Clone)]
pub struct ReleaseNote {
    pub version: String,
    pub summary: String,
    pub impact: String,
    pub owner: String,
    pub notes: String,
    pub date: Option<NaiveDate>,
}

impl ReleaseNote {
    fn render(&self, date: NaiveDate) -> String {
        format!(
            "\n## {} - {date}\n\
             - Summary: {}\n\
             - Impact: {}\n\
             - Owner: {}\n\
             - Notes: {}\n",
            self.version, self.summary, self.impact, self.owner, self.notes
        )
    }
}

/// Append one release section. Duplicate versions are permitted and simply
/// produce multiple sections. Returns the path written to.
pub fn append_note(root: &Path, note: &ReleaseNote, clock: &dyn Clock) -> Result<PathBuf> {
    workspace::require_initialized(root)?;
    let path = WorkspaceLayout::new(root).release_notes;
    io::write_if_missing(&path, RELEASE_NOTES_TEMPLATE.as_bytes())?;

    let date = note.date.unwrap_or_else(|| clock.today());
    io::atomic_append(&path, &note.render(date))?;
    Ok(path)
}

/// Full document content, verbatim.
pub fn read_notes(root: &Path) -> Result<String> {
    workspace::require_initialized(root)?;
    let path = WorkspaceLayout::new(root).release_notes;
    Ok(std::fs::read_to_string(&path)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
