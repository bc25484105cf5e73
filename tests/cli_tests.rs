mod common;

use common::rvo_with;
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn test_events_list_shows_seed() {
    rvo_with("cli_events_list")
        .args(["events", "list"])
        .assert()
        .success()
        .stdout(contains("Charity Fundraiser"))
        .stdout(contains("DURATION"))
        .stdout(contains("08h 00m"))
        .stdout(contains("Community Center"));
}

#[test]
fn test_no_seed_starts_empty() {
    rvo_with("cli_no_seed")
        .args(["--no-seed", "events", "list"])
        .assert()
        .success()
        .stdout(contains("No records found."))
        .stdout(contains("Charity Fundraiser").not());
}

#[test]
fn test_json_list_is_parseable() {
    let output = rvo_with("cli_json_list")
        .args(["--json", "volunteers", "list"])
        .output()
        .expect("run rvolunteer");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let list = value.as_array().expect("JSON array");
    assert_eq!(list.len(), 3);
    assert_eq!(list[0]["name"], "Sarah Chen");
    assert_eq!(list[2]["availability"][0], "weekdays");
}

#[test]
fn test_get_unknown_handle_fails() {
    rvo_with("cli_get_unknown")
        .args(["events", "get", "9"])
        .assert()
        .failure()
        .stderr(contains("Error: event #9 not found"));
}

#[test]
fn test_create_event_defaults_to_scheduled() {
    rvo_with("cli_create_event")
        .args([
            "--json",
            "events",
            "create",
            "--name",
            "Gala",
            "--start",
            "now+1d",
            "--end",
            "now+2d",
            "--location",
            "Riverside",
            "--organizer",
            "1",
        ])
        .assert()
        .success()
        .stdout(contains("Created event #2 'Gala'."))
        .stdout(contains("\"status\": \"scheduled\""));
}

#[test]
fn test_create_event_rejects_inverted_window() {
    rvo_with("cli_event_window")
        .args([
            "events",
            "create",
            "--name",
            "Backwards",
            "--start",
            "2025-06-14 18:00",
            "--end",
            "2025-06-14 09:00",
            "--location",
            "Park",
            "--organizer",
            "1",
        ])
        .assert()
        .failure()
        .stderr(contains("Validation failed"));
}

#[test]
fn test_create_event_rejects_bad_timestamp() {
    rvo_with("cli_event_bad_ts")
        .args([
            "events",
            "create",
            "--name",
            "Soon",
            "--start",
            "next tuesday",
            "--end",
            "now+1h",
            "--location",
            "Park",
            "--organizer",
            "1",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date/time: next tuesday"));
}

#[test]
fn test_duplicate_volunteer_email_rejected() {
    rvo_with("cli_dup_email")
        .args([
            "volunteers",
            "create",
            "--name",
            "Sarah Again",
            "--email",
            "sarah.chen@email.com",
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_volunteer_find_by_email() {
    rvo_with("cli_vol_find")
        .args(["volunteers", "find", "anna.davis@email.com"])
        .assert()
        .success()
        .stdout(contains("Anna Davis"))
        .stdout(contains("(555) 345-6789"));
}

#[test]
fn test_users_output_omits_password() {
    rvo_with("cli_users_json")
        .args(["--json", "users", "find", "admin"])
        .assert()
        .success()
        .stdout(contains("\"role\": \"organizer\""))
        .stdout(contains("password").not());
}

#[test]
fn test_update_without_fields_warns() {
    rvo_with("cli_update_noop")
        .args(["events", "update", "1"])
        .assert()
        .success()
        .stdout(contains("Nothing to update"));
}

#[test]
fn test_update_rejects_unknown_status() {
    rvo_with("cli_bad_status")
        .args(["assignments", "update", "1", "--status", "sleeping"])
        .assert()
        .failure()
        .stderr(contains("Invalid status: sleeping"));
}

#[test]
fn test_clear_flag_conflicts_with_value() {
    rvo_with("cli_clear_conflict")
        .args([
            "volunteers",
            "update",
            "1",
            "--phone",
            "123",
            "--clear-phone",
        ])
        .assert()
        .failure();
}

#[test]
fn test_delete_twice_reports_not_found() {
    rvo_with("cli_delete_unknown")
        .args(["duties", "delete", "42"])
        .assert()
        .failure()
        .stderr(contains("duty #42 not found"));

    rvo_with("cli_delete_known")
        .args(["duties", "delete", "1"])
        .assert()
        .success()
        .stdout(contains("Deleted duty #1."));
}

#[test]
fn test_shift_list_with_details() {
    rvo_with("cli_shift_details")
        .args(["shifts", "list", "--event", "1", "--details"])
        .assert()
        .success()
        .stdout(contains("Registration"))
        .stdout(contains("Setup Crew"))
        .stdout(contains("1/2"));
}

#[test]
fn test_assignments_by_shift_json() {
    let output = rvo_with("cli_assign_by_shift")
        .args(["--json", "assignments", "list", "--shift", "2"])
        .output()
        .expect("run rvolunteer");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let list = value.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["status"], "no_show");
    assert_eq!(list[0]["volunteerId"], 2);
}

#[test]
fn test_stats_dashboard() {
    rvo_with("cli_stats")
        .arg("stats")
        .assert()
        .success()
        .stdout(contains("Active events"))
        .stdout(contains("12.0"))
        .stdout(contains("67%"));

    rvo_with("cli_stats_json")
        .args(["--json", "stats"])
        .assert()
        .success()
        .stdout(contains("\"totalVolunteers\": 3"))
        .stdout(contains("\"attendanceRate\": 67"));
}

#[test]
fn test_portal() {
    rvo_with("cli_portal")
        .args(["portal", "sarah.chen@email.com"])
        .assert()
        .success()
        .stdout(contains("Sarah Chen (SC)"))
        .stdout(contains("Registration"));

    rvo_with("cli_portal_unknown")
        .args(["portal", "ghost@email.com"])
        .assert()
        .failure()
        .stderr(contains("volunteer 'ghost@email.com' not found"));
}

#[test]
fn test_log_shows_seed_entry() {
    rvo_with("cli_log")
        .arg("log")
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("seeded 1 user"));
}

#[test]
fn test_unknown_subcommand_fails() {
    rvo_with("cli_unknown")
        .arg("teleport")
        .assert()
        .failure();
}

#[test]
fn test_relative_time_overflow_is_reported() {
    rvo_with("cli_time_overflow")
        .args(["assignments", "check-in", "1", "--at", "now+999999999d"])
        .assert()
        .failure()
        .stderr(contains("Invalid date/time: now+999999999d"));
}
