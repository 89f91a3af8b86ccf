//! Screenshot registry: an append-only Markdown pipe-table of launch
//! screenshots, in append order.

use crate::clock::Clock;
use crate::error::{Result, TrackerError};
use crate::io;
use crate::paths::WorkspaceLayout;
use crate::workspace::{self, SCREENSHOTS_TEMPLATE};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Importance
// ---------------------------------------------------------------------------

/// Launch importance of a screenshot. Closed set — anything else is
/// rejected before a write happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Critical,
    High,
    Medium,
    Low,
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Importance::Critical => "critical",
            Importance::High => "high",
            Importance::Medium => "medium",
            Importance::Low => "low",
        };
        f.write_str(s)
    }
}

impl FromStr for Importance {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "critical" => Ok(Importance::Critical),
            "high" => Ok(Importance::High),
            "medium" => Ok(Importance::Medium),
            "low" => Ok(Importance::Low),
            other => Err(TrackerError::InvalidImportance(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ScreenshotRow
// ---------------------------------------------------------------------------

/// One registry row. `date` falls back to the clock's current date.
#[derive(Debug, Clone)]
pub struct ScreenshotRow {
    pub feature: String,
    pub path: String,
    pub description: String,
    pub importance: Importance,
    pub date: Option<NaiveDate>,
}

impl ScreenshotRow {
    fn render(&self, date: NaiveDate) -> String {
        format!(
            "| {date} | {} | {} | {} | {} |\n",
            self.feature, self.path, self.description, self.importance
        )
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Append one table row to the registry. Returns the path written to.
pub fn append_row(root: &Path, row: &ScreenshotRow, clock: &dyn Clock) -> Result<PathBuf> {
    workspace::require_initialized(root)?;
    let path = WorkspaceLayout::new(root).screenshots;
    io::write_if_missing(&path, SCREENSHOTS_TEMPLATE.as_bytes())?;

    let date = row.date.unwrap_or_else(|| clock.today());
    io::atomic_append(&path, &row.render(date))?;
    Ok(path)
}

/// Full registry content, verbatim.
pub fn read_registry(root: &Path) -> Result<String> {
    workspace::require_initialized(root)?;
    let path = WorkspaceLayout::new(root).screenshots;
    Ok(std::fs::read_to_string(&path)?)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
