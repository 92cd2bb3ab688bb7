#![cfg(feature = "cli")]

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use hexcmp::constants::FEATURE_WIDTH;

fn hexcmp() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hexcmp"))
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = hexcmp()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn valid_arguments_exit_zero() {
    let out = hexcmp().args(["0x1A", "2"]).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Decimal Value: 26"));
    assert!(stdout.contains("The value is equal to 2."));
}

#[test]
fn invalid_argument_goes_to_stderr_and_fails() {
    let out = hexcmp().args(["12G3", "ff"]).output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stderr.contains("Invalid input:"));
    assert!(stderr.contains("'G'"));
    assert!(stdout.contains("Decimal Value: 255"));
}

#[test]
fn stdin_blank_lines_skipped() {
    let out = run_with_stdin(&[], "ff\n\n  \n1\n");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.matches("Decimal Value:").count(), 2);
}

#[test]
fn json_with_model_is_one_object_per_line() {
    let mut weights = vec!["0".to_string(); FEATURE_WIDTH];
    weights[FEATURE_WIDTH - 2] = "1".to_string();
    let doc = format!("{{\"weights\": [{}], \"bias\": -2}}", weights.join(", "));
    let path = std::env::temp_dir().join(format!("hexcmp-cli-{}.json", std::process::id()));
    fs::write(&path, doc).unwrap();

    let out = hexcmp()
        .arg("--json")
        .arg("--model")
        .arg(&path)
        .args(["ff", "1"])
        .output()
        .unwrap();
    fs::remove_file(&path).unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["prediction"], ">2.0");
    assert_eq!(lines[1]["prediction"], "<=2.0");
    assert_eq!(lines[1]["comparison"], "less_than_two");
}
