mod common;

use common::rvo_with;
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn test_shell_keeps_state_between_lines() {
    rvo_with("shell_state")
        .arg("shell")
        .write_stdin(
            "volunteers create --name 'New Person' --email new@x.org --skills setup,driving\n\
             volunteers list\n",
        )
        .assert()
        .success()
        .stdout(contains("Registered volunteer #4 'New Person'."))
        .stdout(contains("setup, driving"));
}

#[test]
fn test_shell_reports_errors_and_continues() {
    rvo_with("shell_errors")
        .arg("shell")
        .write_stdin("events get 99\nstats\n")
        .assert()
        .success()
        .stderr(contains("event #99 not found"))
        .stdout(contains("Active events"))
        .stdout(contains("1 failed command(s)"));
}

#[test]
fn test_shell_skips_comments_and_stops_on_exit() {
    rvo_with("shell_exit")
        .arg("shell")
        .write_stdin("# warm-up\n\nusers list\nexit\nstats\n")
        .assert()
        .success()
        .stdout(contains("admin"))
        .stdout(contains("Active events").not());
}

#[test]
fn test_shell_rejects_nested_shell_and_bad_commands() {
    rvo_with("shell_nested")
        .arg("shell")
        .write_stdin("shell\nteleport now\n")
        .assert()
        .success()
        .stderr(contains("already in a shell session"))
        .stderr(contains("Shell error"))
        .stdout(contains("2 failed command(s)"));
}

#[test]
fn test_shell_json_per_line() {
    rvo_with("shell_json")
        .arg("shell")
        .write_stdin("--json stats\n")
        .assert()
        .success()
        .stdout(contains("\"activeEvents\": 1"));
}

#[test]
fn test_shell_delete_does_not_cascade() {
    rvo_with("shell_cascade")
        .arg("shell")
        .write_stdin("duties delete 1\nduties get 1\n--json shifts get 1\n")
        .assert()
        .success()
        .stdout(contains("Deleted duty #1."))
        .stderr(contains("duty #1 not found"))
        .stdout(contains("\"dutyId\": 1"));
}

#[test]
fn test_shell_attendance_workflow() {
    rvo_with("shell_attendance")
        .arg("shell")
        .write_stdin(
            "assignments create --shift 1 --volunteer 2 --notes 'covers lunch'\n\
             assignments check-in 4 --at 2025-06-14T09:00\n\
             assignments break 4\n\
             assignments check-out 4 --at 2025-06-14T11:15\n\
             --json assignments get 4\n",
        )
        .assert()
        .success()
        .stdout(contains("Assigned volunteer #2 to shift #1 (assignment #4)."))
        .stdout(contains("Assignment #4 checked in."))
        .stdout(contains("checked out after 02h 15m"))
        .stdout(contains("\"status\": \"break\""))
        .stdout(contains("\"notes\": \"covers lunch\""));
}

#[test]
fn test_shell_warns_when_shift_is_full() {
    rvo_with("shell_full")
        .arg("shell")
        .write_stdin(
            "assignments create --shift 1 --volunteer 2\n\
             assignments create --shift 1 --volunteer 3\n",
        )
        .assert()
        .success()
        .stdout(contains("already has 2/2 volunteers"))
        .stdout(contains("(assignment #5)"));
}

#[test]
fn test_shell_survives_out_of_range_time() {
    rvo_with("shell_time_overflow")
        .arg("shell")
        .write_stdin("assignments check-out 1 --at now-999999999d\nstats\n")
        .assert()
        .success()
        .stderr(contains("Invalid date/time"))
        .stdout(contains("Active events"));
}
