mod common;

use common::{rvo, temp_config};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

#[test]
fn test_config_init_and_print() {
    let conf = temp_config("config_init");

    rvo()
        .args(["--config", &conf, "config", "--init"])
        .assert()
        .success()
        .stdout(contains("Config file:"));
    assert!(fs::read_to_string(&conf).unwrap().contains("seed_demo_data: true"));

    rvo()
        .args(["--config", &conf, "config", "--init"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    rvo()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("date_format:"))
        .stdout(contains("%Y-%m-%d %H:%M"))
        .stdout(contains("output: table"));

    fs::remove_file(&conf).ok();
}

#[test]
fn test_config_check_reports_missing_keys() {
    let conf = temp_config("config_check");
    fs::write(&conf, "output: json\n").unwrap();

    rvo()
        .args(["--config", &conf, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields"))
        .stdout(contains("seed_demo_data"))
        .stdout(contains("separator_char"));

    fs::remove_file(&conf).ok();
}

#[test]
fn test_config_output_json_applies() {
    let conf = temp_config("config_json");
    fs::write(&conf, "output: json\n").unwrap();

    let output = rvo()
        .args(["--config", &conf, "events", "list"])
        .output()
        .expect("run rvolunteer");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["status"], "active");

    fs::remove_file(&conf).ok();
}

#[test]
fn test_config_disables_seed() {
    let conf = temp_config("config_no_seed");
    fs::write(&conf, "seed_demo_data: false\n").unwrap();

    rvo()
        .args(["--config", &conf, "volunteers", "list"])
        .assert()
        .success()
        .stdout(contains("No records found."));

    fs::remove_file(&conf).ok();
}

#[test]
fn test_config_custom_date_format() {
    let conf = temp_config("config_date_format");
    fs::write(&conf, "date_format: '%d/%m/%Y'\n").unwrap();

    rvo()
        .args(["--config", &conf, "shell"])
        .write_stdin(
            "events create --name Fair --start '2025-07-04 10:00' --end '2025-07-04 16:00' \
             --location Square --organizer 1\n",
        )
        .assert()
        .success()
        .stdout(contains("04/07/2025"));

    fs::remove_file(&conf).ok();
}

#[test]
fn test_config_invalid_yaml_fails() {
    let conf = temp_config("config_invalid");
    fs::write(&conf, "output: [unterminated\n").unwrap();

    rvo()
        .args(["--config", &conf, "stats"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));

    fs::remove_file(&conf).ok();
}

#[test]
fn test_config_invalid_date_format_fails() {
    let conf = temp_config("config_bad_date_format");
    fs::write(&conf, "date_format: '%Q'\n").unwrap();

    rvo()
        .args(["--config", &conf, "events", "list"])
        .assert()
        .failure()
        .stderr(contains("Configuration error: invalid date_format '%Q'"));

    fs::remove_file(&conf).ok();
}
