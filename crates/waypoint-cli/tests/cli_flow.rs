use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_waypoint"))
}

fn temp_journal_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time")
        .as_nanos();
    let filename = format!("{}_{}_{}.json", prefix, std::process::id(), nanos);
    std::env::temp_dir().join(filename)
}

struct TempJournal {
    path: PathBuf,
}

impl TempJournal {
    fn new(prefix: &str) -> Self {
        Self {
            path: temp_journal_path(prefix),
        }
    }
}

impl Drop for TempJournal {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

fn waypoint(journal: &PathBuf) -> Command {
    let mut cmd = Command::new(bin());
    cmd.arg("--quiet").arg("--journal").arg(journal);
    cmd
}

fn add_entry(journal: &PathBuf, address: &str, date: &str) {
    let add = waypoint(journal)
        .arg("add")
        .arg("file:///photo.jpg")
        .arg("--address")
        .arg(address)
        .arg("--latitude")
        .arg("48.8584")
        .arg("--longitude")
        .arg("2.2945")
        .arg("--title")
        .arg("Tower")
        .arg("--tag")
        .arg("city")
        .arg("--date")
        .arg(date)
        .output()
        .expect("run add");
    assert!(
        add.status.success(),
        "add failed: stdout={}, stderr={}",
        String::from_utf8_lossy(&add.stdout),
        String::from_utf8_lossy(&add.stderr)
    );
}

#[test]
fn test_cli_add_list_show_remove_flow() {
    let journal = TempJournal::new("waypoint_cli_flow");

    add_entry(&journal.path, "Paris", "2024-05-01");
    add_entry(&journal.path, "Rome", "2024-06-01");

    let list = waypoint(&journal.path)
        .arg("list")
        .arg("--json")
        .output()
        .expect("run list");
    assert!(list.status.success());

    let value: serde_json::Value = serde_json::from_slice(&list.stdout).expect("parse list json");
    let array = value.as_array().expect("list output array");
    assert_eq!(array.len(), 2);
    // Newest first.
    assert_eq!(
        array[0].get("address").and_then(|v| v.as_str()),
        Some("Rome")
    );
    let entry_id = array[0]
        .get("id")
        .and_then(|v| v.as_str())
        .expect("entry id")
        .to_string();

    let show = waypoint(&journal.path)
        .arg("show")
        .arg(&entry_id)
        .output()
        .expect("run show");
    assert!(show.status.success());
    let output = String::from_utf8_lossy(&show.stdout);
    assert!(output.contains("Rome"));
    assert!(output.contains("Tower"));

    let remove = waypoint(&journal.path)
        .arg("remove")
        .arg(&entry_id)
        .output()
        .expect("run remove");
    assert!(remove.status.success());

    let count = waypoint(&journal.path)
        .arg("count")
        .output()
        .expect("run count");
    assert!(count.status.success());
    assert_eq!(String::from_utf8_lossy(&count.stdout).trim(), "1");
}

#[test]
fn test_cli_edit_replaces_fields() {
    let journal = TempJournal::new("waypoint_cli_edit");
    add_entry(&journal.path, "Lisbon", "2024-01-01");

    let list = waypoint(&journal.path)
        .arg("list")
        .arg("--json")
        .output()
        .expect("run list");
    let value: serde_json::Value = serde_json::from_slice(&list.stdout).expect("parse list json");
    let entry_id = value.as_array().expect("array")[0]
        .get("id")
        .and_then(|v| v.as_str())
        .expect("entry id")
        .to_string();

    let edit = waypoint(&journal.path)
        .arg("edit")
        .arg(&entry_id)
        .arg("--title")
        .arg("Miradouro")
        .arg("--notes")
        .arg("best view in town")
        .output()
        .expect("run edit");
    assert!(
        edit.status.success(),
        "edit failed: {}",
        String::from_utf8_lossy(&edit.stderr)
    );

    let show = waypoint(&journal.path)
        .arg("show")
        .arg(&entry_id)
        .arg("--json")
        .output()
        .expect("run show");
    let shown: serde_json::Value = serde_json::from_slice(&show.stdout).expect("parse show json");
    assert_eq!(shown.get("title").and_then(|v| v.as_str()), Some("Miradouro"));
    assert_eq!(
        shown.get("notes").and_then(|v| v.as_str()),
        Some("best view in town")
    );
}

#[test]
fn test_cli_remove_unknown_id_fails() {
    let journal = TempJournal::new("waypoint_cli_remove_unknown");
    add_entry(&journal.path, "Oslo", "2024-01-01");

    let remove = waypoint(&journal.path)
        .arg("remove")
        .arg("no-such-id")
        .output()
        .expect("run remove");
    assert!(!remove.status.success());
}

#[test]
fn test_cli_clear_requires_confirmation() {
    let journal = TempJournal::new("waypoint_cli_clear");
    add_entry(&journal.path, "Kyoto", "2024-01-01");

    let refused = waypoint(&journal.path)
        .arg("clear")
        .output()
        .expect("run clear");
    assert!(!refused.status.success());

    let cleared = waypoint(&journal.path)
        .arg("clear")
        .arg("--yes")
        .output()
        .expect("run clear --yes");
    assert!(cleared.status.success());

    let count = waypoint(&journal.path)
        .arg("count")
        .output()
        .expect("run count");
    assert_eq!(String::from_utf8_lossy(&count.stdout).trim(), "0");
}

#[test]
fn test_cli_doctor_flags_corrupted_collection() {
    let journal = TempJournal::new("waypoint_cli_doctor");
    std::fs::write(&journal.path, r#"{"travel_entries": "not json"}"#).expect("seed corruption");

    let doctor = waypoint(&journal.path)
        .arg("doctor")
        .output()
        .expect("run doctor");
    assert!(!doctor.status.success());
    let stdout = String::from_utf8_lossy(&doctor.stdout);
    assert!(stdout.contains("INVALID"));

    // Reads degrade instead of failing.
    let count = waypoint(&journal.path)
        .arg("count")
        .output()
        .expect("run count");
    assert!(count.status.success());
    assert_eq!(String::from_utf8_lossy(&count.stdout).trim(), "0");
}

#[test]
fn test_cli_theme_round_trip() {
    let journal = TempJournal::new("waypoint_cli_theme");

    let default = waypoint(&journal.path)
        .arg("theme")
        .output()
        .expect("run theme");
    assert!(default.status.success());
    assert_eq!(String::from_utf8_lossy(&default.stdout).trim(), "system");

    let set = waypoint(&journal.path)
        .arg("theme")
        .arg("dark")
        .output()
        .expect("run theme dark");
    assert!(set.status.success());

    let read_back = waypoint(&journal.path)
        .arg("theme")
        .output()
        .expect("run theme");
    assert_eq!(String::from_utf8_lossy(&read_back.stdout).trim(), "dark");

    let invalid = waypoint(&journal.path)
        .arg("theme")
        .arg("solarized")
        .output()
        .expect("run theme solarized");
    assert!(!invalid.status.success());
}

#[test]
fn test_cli_greets_on_first_launch_only() {
    let journal = TempJournal::new("waypoint_cli_greeting");

    let mut first = Command::new(bin());
    let first = first
        .arg("--journal")
        .arg(&journal.path)
        .arg("count")
        .output()
        .expect("run count");
    assert!(first.status.success());
    assert!(String::from_utf8_lossy(&first.stdout).contains("Welcome to Waypoint"));

    let mut second = Command::new(bin());
    let second = second
        .arg("--journal")
        .arg(&journal.path)
        .arg("count")
        .output()
        .expect("run count again");
    assert!(second.status.success());
    assert!(!String::from_utf8_lossy(&second.stdout).contains("Welcome to Waypoint"));
}

#[test]
fn test_cli_missing_journal_path_errors() {
    let output = Command::new(bin())
        .env_remove("WAYPOINT_JOURNAL")
        .arg("list")
        .output()
        .expect("run list");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No journal path provided"));
}
