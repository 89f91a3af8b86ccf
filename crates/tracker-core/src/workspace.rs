//! Workspace initialization and the precondition gate.
//!
//! `initialize` is idempotent and non-destructive: however many times it
//! runs, it only ever creates the pieces that are missing. Existing document
//! contents are never truncated or altered.

use crate::clock::Clock;
use crate::error::{Result, TrackerError};
use crate::io;
use crate::manifest::Manifest;
use crate::paths::WorkspaceLayout;
use std::path::Path;

pub const RELEASE_NOTES_TEMPLATE: &str = "# Release Notes\n\n\
    Use this file to store notes for every release candidate and launch update.\n\n";

pub const SCREENSHOTS_TEMPLATE: &str = "# Launch Screenshots Registry\n\n\
    Track all screenshots needed for launch assets and release communication.\n\n\
    | Date | Feature | Path | Description | Importance |\n\
    |---|---|---|---|---|\n";

/// Which pieces `initialize` actually created, so callers can report
/// `created:` vs `exists:` per artifact.
#[derive(Debug, Clone, Copy, Default)]
pub struct InitOutcome {
    pub release_notes_created: bool,
    pub screenshots_created: bool,
    pub manifest_created: bool,
}

/// Create the workspace layout, writing only the missing pieces.
pub fn initialize(root: &Path, clock: &dyn Clock) -> Result<InitOutcome> {
    let layout = WorkspaceLayout::new(root);
    io::ensure_dir(&layout.progress_dir)?;

    let release_notes_created =
        io::write_if_missing(&layout.release_notes, RELEASE_NOTES_TEMPLATE.as_bytes())?;
    let screenshots_created =
        io::write_if_missing(&layout.screenshots, SCREENSHOTS_TEMPLATE.as_bytes())?;
    let manifest_created = Manifest::new(clock).write_once(root)?;

    Ok(InitOutcome {
        release_notes_created,
        screenshots_created,
        manifest_created,
    })
}

/// Precondition gate for every record-store operation. Checks the base
/// directory only — sub-documents are created lazily by their appends.
pub fn require_initialized(root: &Path) -> Result<()> {
    if !WorkspaceLayout::new(root).base_dir.exists() {
        return Err(TrackerError::NotInitialized);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
