use chrono::NaiveDate;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants (relative to the workspace root)
// ---------------------------------------------------------------------------

pub const WORKSPACE_DIR: &str = ".workspace";
pub const PROGRESS_DIR: &str = ".workspace/progress";
pub const RELEASE_NOTES_FILE: &str = ".workspace/release-notes.md";
pub const SCREENSHOTS_FILE: &str = ".workspace/screenshots.md";
pub const MANIFEST_FILE: &str = ".workspace/manifest.json";

// ---------------------------------------------------------------------------
// WorkspaceLayout
// ---------------------------------------------------------------------------

/// The fixed set of document locations for one workspace root.
///
/// Every component resolves paths through this value so they all agree on
/// file locations. Pure derivation from `root` — no I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceLayout {
    pub base_dir: PathBuf,
    pub progress_dir: PathBuf,
    pub release_notes: PathBuf,
    pub screenshots: PathBuf,
    pub manifest: PathBuf,
}

impl WorkspaceLayout {
    pub fn new(root: &Path) -> Self {
        Self {
            base_dir: root.join(WORKSPACE_DIR),
            progress_dir: root.join(PROGRESS_DIR),
            release_notes: root.join(RELEASE_NOTES_FILE),
            screenshots: root.join(SCREENSHOTS_FILE),
            manifest: root.join(MANIFEST_FILE),
        }
    }

    /// Returns `<root>/.workspace/progress/<YYYY-MM-DD>.md`.
    pub fn progress_path(&self, date: NaiveDate) -> PathBuf {
        self.progress_dir.join(format!("{}.md", date.format("%Y-%m-%d")))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
