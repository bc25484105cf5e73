#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rvo() -> Command {
    cargo_bin_cmd!("rvolunteer")
}

/// Path of a configuration file that does not exist, so every run uses
/// the defaults regardless of the user's own configuration.
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rvolunteer.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rvolunteer_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Command preconfigured with a private, missing config file.
pub fn rvo_with(name: &str) -> Command {
    let mut cmd = rvo();
    cmd.args(["--config", &temp_config(name)]);
    cmd
}

/// Fixed reference instant used by library tests.
pub fn noon() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2025, 6, 14, 12, 0, 0)
        .single()
        .expect("unambiguous local time")
}
