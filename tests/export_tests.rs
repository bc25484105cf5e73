mod common;

use common::{rvo_with, temp_out};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_json_snapshot() {
    let out = temp_out("export_json", "json");

    rvo_with("export_json")
        .args(["export", "--format", "json", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    let snapshot: serde_json::Value = serde_json::from_str(&content).expect("valid JSON");

    for key in ["users", "events", "duties", "shifts", "volunteers", "assignments"] {
        assert!(snapshot[key].is_array(), "missing collection {key}");
    }
    assert_eq!(snapshot["events"][0]["name"], "Charity Fundraiser");
    assert_eq!(snapshot["shifts"].as_array().unwrap().len(), 3);
    assert_eq!(snapshot["users"][0]["username"], "admin");
    assert!(!content.contains("password"));

    fs::remove_file(&out).ok();
}

#[test]
fn test_export_csv_roster() {
    let out = temp_out("export_csv", "csv");

    rvo_with("export_csv")
        .args(["export", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("assignment,volunteer,email,event,duty,start,end,status,check_in,check_out")
    );
    let first = lines.next().expect("first row");
    assert!(first.starts_with("1,Sarah Chen,sarah.chen@email.com,Charity Fundraiser,Registration,"));
    assert!(first.contains(",checked_in,"));
    assert_eq!(content.lines().count(), 4);

    fs::remove_file(&out).ok();
}

#[test]
fn test_export_csv_empty_store_writes_header() {
    let out = temp_out("export_csv_empty", "csv");

    rvo_with("export_csv_empty")
        .args(["--no-seed", "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("writing header only"));

    let content = fs::read_to_string(&out).expect("read export");
    assert_eq!(content.lines().count(), 1);
    assert!(content.starts_with("assignment,volunteer"));

    fs::remove_file(&out).ok();
}

#[test]
fn test_export_requires_absolute_path() {
    rvo_with("export_relative")
        .args(["export", "--file", "relative.json"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file_needs_confirmation() {
    let out = temp_out("export_confirm", "json");
    fs::write(&out, "keep me").unwrap();

    rvo_with("export_confirm")
        .args(["export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rvo_with("export_confirm_yes")
        .args(["export", "--file", &out])
        .write_stdin("y\n")
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("Charity Fundraiser"));

    fs::remove_file(&out).ok();
}

#[test]
fn test_export_is_logged() {
    let out = temp_out("export_logged", "json");

    rvo_with("export_logged")
        .arg("shell")
        .write_stdin(format!("export --file '{out}' --force\nlog\n"))
        .assert()
        .success()
        .stdout(contains("export (json)"))
        .stdout(contains("exported to").and(contains(out.as_str())));

    fs::remove_file(&out).ok();
}
