//! End-to-end runs of the socialq binary

use super::test_utils::sample_workspace;
use std::process::{Command, Output};

fn socialq(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_socialq"))
        .args(args)
        .env_remove("SOCIALQ_LOG")
        .output()
        .unwrap()
}

fn record_args(ws: &str) -> Vec<String> {
    vec![
        "--workspace".into(),
        ws.into(),
        "--config".into(),
        format!("{}/bond.toml", ws),
        "--quiet".into(),
    ]
}

#[test]
fn test_enroll_prints_queues() {
    let temp = sample_workspace();
    let ws = temp.path().to_string_lossy().to_string();
    let mut args = record_args(&ws);
    args.extend(
        [
            "enroll",
            "--students",
            "students.txt",
            "--courses",
            "courses.txt",
            "--hackers",
            "hackers.txt",
            "--queues",
            "queues.txt",
        ]
        .map(String::from),
    );
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let output = socialq(&args);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "234 100 400 300\n236 200 400 300 100\n"
    );
}

#[test]
fn test_enroll_json_to_file() {
    let temp = sample_workspace();
    let ws = temp.path().to_string_lossy().to_string();
    let mut args = record_args(&ws);
    args.extend(
        [
            "enroll",
            "--students",
            "students.txt",
            "--courses",
            "courses.txt",
            "--hackers",
            "hackers.txt",
            "--queues",
            "queues.txt",
            "--format",
            "json",
            "--out",
            "result.json",
        ]
        .map(String::from),
    );
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let output = socialq(&args);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let written = std::fs::read_to_string(temp.path().join("result.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["status"], "satisfied");
    assert_eq!(value["courses"][1]["students"], serde_json::json!([200, 400, 300, 100]));
}

#[test]
fn test_missing_input_fails_with_message() {
    let temp = sample_workspace();
    let ws = temp.path().to_string_lossy().to_string();
    let output = socialq(&[
        "--workspace",
        &ws,
        "--quiet",
        "enroll",
        "--students",
        "nope.txt",
        "--courses",
        "courses.txt",
        "--hackers",
        "hackers.txt",
        "--queues",
        "queues.txt",
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.txt"));
}

#[test]
fn test_config_command_shows_overrides() {
    let temp = sample_workspace();
    let ws = temp.path().to_string_lossy().to_string();
    let mut args = record_args(&ws);
    args.push("config".into());
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let output = socialq(&args);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("hacker_bond = 50"));
    assert!(stdout.contains("name_distance = false"));
}
