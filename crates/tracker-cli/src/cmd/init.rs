use crate::output::print_json;
use std::path::Path;
use tracker_core::clock::SystemClock;
use tracker_core::paths;
use tracker_core::workspace;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let outcome = workspace::initialize(root, &SystemClock)?;

    if json {
        print_json(&serde_json::json!({
            "root": root,
            "release_notes_created": outcome.release_notes_created,
            "screenshots_created": outcome.screenshots_created,
            "manifest_created": outcome.manifest_created,
        }))?;
        return Ok(());
    }

    println!("Initializing tracker in: {}", root.display());
    report(paths::RELEASE_NOTES_FILE, outcome.release_notes_created);
    report(paths::SCREENSHOTS_FILE, outcome.screenshots_created);
    report(paths::MANIFEST_FILE, outcome.manifest_created);
    println!("\nTracker initialized at {}", root.join(paths::WORKSPACE_DIR).display());
    Ok(())
}

fn report(path: &str, created: bool) {
    if created {
        println!("  created: {path}");
    } else {
        println!("  exists:  {path}");
    }
}
