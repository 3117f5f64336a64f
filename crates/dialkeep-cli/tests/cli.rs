use assert_cmd::Command;
use std::path::Path;

fn dialkeep(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dialkeep").expect("binary built");
    cmd.arg("--db-path").arg(db_path);
    cmd
}

fn stdout_of(output: std::process::Output) -> String {
    String::from_utf8(output.stdout).expect("utf8 stdout")
}

#[test]
fn check_canonicalizes_without_a_store() {
    let mut cmd = Command::cargo_bin("dialkeep").expect("binary built");
    let output = cmd
        .args(["check", "+1 (123) 456-7890 ext 55"])
        .output()
        .expect("run check");
    assert!(output.status.success());
    assert_eq!(stdout_of(output).trim(), "(123) 456-7890 ext 55");
}

#[test]
fn check_leaves_non_domestic_regions_alone() {
    let mut cmd = Command::cargo_bin("dialkeep").expect("binary built");
    let output = cmd
        .args(["check", "--region", "GB", " +44 20 7946 0958 "])
        .output()
        .expect("run check");
    assert!(output.status.success());
    assert_eq!(stdout_of(output).trim(), "+44 20 7946 0958");
}

#[test]
fn add_run_and_list_flow() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = dir.path().join("dialkeep.sqlite3");

    let output = dialkeep(&db)
        .args(["add-contact", "--name", "Ada Lovelace", "--phone", "415.555.1212"])
        .output()
        .expect("add contact");
    assert!(output.status.success());

    let output = dialkeep(&db)
        .args(["add-contact", "--name", "Alan Turing"])
        .output()
        .expect("add contact");
    assert!(output.status.success());

    let output = dialkeep(&db).arg("run").output().expect("run batch");
    assert!(output.status.success());
    assert_eq!(
        stdout_of(output).trim(),
        "processed 2 contacts: 1 changed, 1 skipped, 0 failed"
    );

    let output = dialkeep(&db).arg("list").output().expect("list contacts");
    assert!(output.status.success());
    let listing = stdout_of(output);
    assert!(listing.contains("(415) 555-1212"));
    assert!(listing.contains("Alan Turing"));

    // Second run is a no-op.
    let output = dialkeep(&db).arg("run").output().expect("rerun batch");
    assert_eq!(
        stdout_of(output).trim(),
        "processed 2 contacts: 0 changed, 2 skipped, 0 failed"
    );
}

#[test]
fn run_reports_json_stats() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = dir.path().join("dialkeep.sqlite3");

    dialkeep(&db)
        .args(["add-contact", "--name", "Ada Lovelace", "--phone", "4155551212"])
        .output()
        .expect("add contact");

    let output = dialkeep(&db)
        .args(["--json", "run", "--dry-run"])
        .output()
        .expect("run batch");
    assert!(output.status.success());
    let stats: serde_json::Value =
        serde_json::from_str(&stdout_of(output)).expect("json stats");
    assert_eq!(stats["processed"], 1);
    assert_eq!(stats["changed"], 1);

    // Dry run wrote nothing.
    let output = dialkeep(&db).arg("list").output().expect("list contacts");
    assert!(stdout_of(output).contains("4155551212"));
}

#[test]
fn delete_missing_contact_exits_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db = dir.path().join("dialkeep.sqlite3");

    let output = dialkeep(&db)
        .args(["delete", "00000000-0000-4000-8000-000000000000"])
        .output()
        .expect("delete contact");
    assert_eq!(output.status.code(), Some(2));
}
