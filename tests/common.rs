#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pc() -> Command {
    cargo_bin_cmd!("punchcard")
}

/// A small but representative timesheet: plain days, a multi-event day,
/// a leave day without clock times, and a quoted notes list.
pub const SAMPLE: &str = "\
Date,Clock In Time,Clock Out Time,Notes
01/07/2024,08:55,17:10,
02/07/2024,09:20,17:45,Work from home
03/07/2024,08:40,18:30,\"16:00 lecture, Post-Work Commitment\"
04/07/2024,,,Annual leave
05/07/2024,09:05,16:50,Conference
";

/// Write a fixture timesheet into the system temp dir and return its path
pub fn write_fixture(name: &str, contents: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchcard.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, contents).expect("write fixture");
    p
}

/// Create a temporary output file path and ensure any previous run's file
/// is removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchcard_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}
