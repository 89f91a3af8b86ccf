use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tracker").unwrap();
    cmd.current_dir(dir.path()).env("TRACKER_ROOT", dir.path());
    cmd
}

fn init_workspace(dir: &TempDir) {
    tracker(dir).arg("init").assert().success();
}

// ---------------------------------------------------------------------------
// tracker init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_directory_tree() {
    let dir = TempDir::new().unwrap();
    tracker(&dir).arg("init").assert().success();

    assert!(dir.path().join(".workspace").is_dir());
    assert!(dir.path().join(".workspace/progress").is_dir());
    assert!(dir.path().join(".workspace/release-notes.md").exists());
    assert!(dir.path().join(".workspace/screenshots.md").exists());
    assert!(dir.path().join(".workspace/manifest.json").exists());
}

#[test]
fn init_is_idempotent_and_non_destructive() {
    let dir = TempDir::new().unwrap();
    tracker(&dir).arg("init").assert().success();

    let manifest = std::fs::read(dir.path().join(".workspace/manifest.json")).unwrap();
    let notes = std::fs::read(dir.path().join(".workspace/release-notes.md")).unwrap();
    let shots = std::fs::read(dir.path().join(".workspace/screenshots.md")).unwrap();

    tracker(&dir).arg("init").assert().success();

    assert_eq!(
        std::fs::read(dir.path().join(".workspace/manifest.json")).unwrap(),
        manifest
    );
    assert_eq!(
        std::fs::read(dir.path().join(".workspace/release-notes.md")).unwrap(),
        notes
    );
    assert_eq!(
        std::fs::read(dir.path().join(".workspace/screenshots.md")).unwrap(),
        shots
    );
}

#[test]
fn init_writes_manifest_artifact_paths() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    let manifest = std::fs::read_to_string(dir.path().join(".workspace/manifest.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(json["version"], "0.1");
    assert_eq!(json["artifacts"]["progress_dir"], ".workspace/progress");
    assert_eq!(
        json["artifacts"]["release_notes"],
        ".workspace/release-notes.md"
    );
    assert_eq!(json["artifacts"]["screenshots"], ".workspace/screenshots.md");
}

// ---------------------------------------------------------------------------
// Precondition gate
// ---------------------------------------------------------------------------

#[test]
fn commands_fail_before_init() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["progress", "add", "note"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));

    tracker(&dir)
        .args(["release", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("run 'tracker init'"));
}

// ---------------------------------------------------------------------------
// tracker progress
// ---------------------------------------------------------------------------

#[test]
fn progress_add_then_list() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    tracker(&dir)
        .args(["progress", "add", "Shipped X", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01.md"));

    tracker(&dir)
        .args(["progress", "list", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Daily Progress - 2024-01-01"))
        .stdout(predicate::str::contains("## Wins"))
        .stdout(predicate::str::contains("## Log"))
        .stdout(predicate::str::contains("Shipped X"));
}

#[test]
fn progress_log_header_appears_once() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    for entry in ["one", "two", "three"] {
        tracker(&dir)
            .args(["progress", "add", entry, "--date", "2024-01-01"])
            .assert()
            .success();
    }

    let content =
        std::fs::read_to_string(dir.path().join(".workspace/progress/2024-01-01.md")).unwrap();
    assert_eq!(content.matches("## Log").count(), 1);
    for header in ["## Wins", "## In Progress", "## Blockers", "## Next Steps"] {
        assert_eq!(content.matches(header).count(), 1, "{header}");
    }
}

#[test]
fn progress_list_missing_date_is_informational() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    tracker(&dir)
        .args(["progress", "list", "--date", "2030-12-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No progress document for 2030-12-31"));
}

#[test]
fn progress_rejects_malformed_date() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    tracker(&dir)
        .args(["progress", "add", "note", "--date", "01/02/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));
}

// ---------------------------------------------------------------------------
// tracker release
// ---------------------------------------------------------------------------

#[test]
fn release_add_then_list() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    tracker(&dir)
        .args([
            "release", "add", "1.2.0", "Checkout revamp", "All web users", "dana",
            "Rolled out behind a flag", "--date", "2024-03-15",
        ])
        .assert()
        .success();

    tracker(&dir)
        .args(["release", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 1.2.0 - 2024-03-15"))
        .stdout(predicate::str::contains("- Summary: Checkout revamp"))
        .stdout(predicate::str::contains("- Impact: All web users"))
        .stdout(predicate::str::contains("- Owner: dana"))
        .stdout(predicate::str::contains("- Notes: Rolled out behind a flag"));
}

#[test]
fn release_sections_keep_append_order() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    for v in ["2.0.0", "1.0.0"] {
        tracker(&dir)
            .args(["release", "add", v, "s", "i", "o", "n", "--date", "2024-03-15"])
            .assert()
            .success();
    }

    let content =
        std::fs::read_to_string(dir.path().join(".workspace/release-notes.md")).unwrap();
    let first = content.find("## 2.0.0").unwrap();
    let second = content.find("## 1.0.0").unwrap();
    assert!(first < second);
}

// ---------------------------------------------------------------------------
// tracker screenshot
// ---------------------------------------------------------------------------

#[test]
fn screenshot_add_then_list() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    tracker(&dir)
        .args([
            "screenshot", "add", "Login", "img/login.png", "Login screen", "critical",
            "--date", "2024-02-01",
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(dir.path().join(".workspace/screenshots.md")).unwrap();
    assert_eq!(
        content.lines().last().unwrap(),
        "| 2024-02-01 | Login | img/login.png | Login screen | critical |"
    );

    tracker(&dir)
        .args(["screenshot", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Launch Screenshots Registry"))
        .stdout(predicate::str::contains("| Login |"));
}

#[test]
fn screenshot_invalid_importance_writes_nothing() {
    let dir = TempDir::new().unwrap();
    init_workspace(&dir);

    let before = std::fs::read(dir.path().join(".workspace/screenshots.md")).unwrap();

    tracker(&dir)
        .args(["screenshot", "add", "Login", "img/login.png", "Login screen", "urgent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid importance 'urgent'"));

    let after = std::fs::read(dir.path().join(".workspace/screenshots.md")).unwrap();
    assert_eq!(before, after);
}
