use crate::clock::{iso_second, Clock};
use crate::error::Result;
use crate::io;
use crate::paths::{self, WorkspaceLayout};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MANIFEST_VERSION: &str = "0.1";

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

/// Workspace metadata written once at initialization. Re-running init leaves
/// an existing manifest untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub created_at: String,
    pub version: String,
    pub artifacts: ArtifactPaths,
}

/// Root-relative locations of the tracked documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactPaths {
    pub progress_dir: String,
    pub release_notes: String,
    pub screenshots: String,
}

impl Manifest {
    pub fn new(clock: &dyn Clock) -> Self {
        Self {
            created_at: iso_second(clock.now()),
            version: MANIFEST_VERSION.to_string(),
            artifacts: ArtifactPaths {
                progress_dir: paths::PROGRESS_DIR.to_string(),
                release_notes: paths::RELEASE_NOTES_FILE.to_string(),
                screenshots: paths::SCREENSHOTS_FILE.to_string(),
            },
        }
    }

    /// Write the manifest only if none exists. Returns true if written.
    pub fn write_once(&self, root: &Path) -> Result<bool> {
        let path = WorkspaceLayout::new(root).manifest;
        let mut data = serde_json::to_vec_pretty(self)?;
        data.push(b'\n');
        io::write_if_missing(&path, &data)
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = WorkspaceLayout::new(root).manifest;
        let data = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
