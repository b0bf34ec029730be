#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary under test, run against an empty home so the user's own
/// config file never leaks into the results
pub fn ptk() -> Command {
    let home = test_home("shared");
    let mut cmd = cargo_bin_cmd!("pregtrack");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// A fresh directory under the system temp dir, emptied on every call
pub fn temp_dir_named(name: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Home directory used by the tests. Never holds a config file.
pub fn test_home(name: &str) -> PathBuf {
    env::temp_dir().join(format!("pregtrack_home_{}", name))
}

/// Create a unique data file path inside the system temp dir and remove any
/// existing file (and its audit log)
pub fn setup_test_data(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pregtrack.csv", name));
    fs::remove_file(&path).ok();
    fs::remove_file(path.with_extension("log")).ok();
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Add one observation through the CLI with the given scores
/// (fatigue, pain, nausea, headache, reflux).
pub fn add_obs(data: &str, date: &str, scores: [u8; 5], contractions: &str) {
    let s: Vec<String> = scores.iter().map(|v| v.to_string()).collect();
    ptk()
        .args([
            "--data",
            data,
            "add",
            "--date",
            date,
            "--fatigue",
            &s[0],
            "--pain",
            &s[1],
            "--nausea",
            &s[2],
            "--headache",
            &s[3],
            "--reflux",
            &s[4],
            "--contractions",
            contractions,
        ])
        .assert()
        .success();
}

/// Initialize the data file and add a small dataset over two months
pub fn init_data_with_rows(data: &str) {
    ptk()
        .args(["--data", data, "--test", "init"])
        .assert()
        .success();

    add_obs(data, "2025-10-05", [5, 3, 2, 2, 2], "none");
    add_obs(data, "2025-10-18", [6, 2, 1, 3, 2], "mild");
    add_obs(data, "2025-11-02", [4, 1, 1, 1, 1], "none");
}
