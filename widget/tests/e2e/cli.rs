//! E2E test: the memwidget binary

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Write a config file so tests never pick up a developer's own config
fn config_dir(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join(".memwidget.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

fn memwidget(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_memwidget"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run memwidget")
}

fn json_lines(output: &Output) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("Expected a JSON line"))
        .collect()
}

#[test]
fn test_sample_demo_data_json() {
    let (_dir, config) = config_dir("");
    let output = memwidget(&config, &["sample", "--demo-data", "--json"]);
    assert!(output.status.success());

    let lines = json_lines(&output);
    assert_eq!(lines.len(), 1);
    let entry = &lines[0];
    assert_eq!(entry["widget"], "memory");
    assert_eq!(entry["state"], "sampled");
    assert_eq!(entry["snapshot"]["page_size"], 4096);
    assert_eq!(entry["snapshot"]["free_bytes"], 262_144u64 * 4096);
    assert_eq!(entry["total_physical_bytes"], 16u64 * 1024 * 1024 * 1024);
}

#[test]
fn test_sample_text_from_config_format() {
    let (_dir, config) = config_dir("[memory]\nbar_width = 8\n");
    let output = memwidget(&config, &["sample", "--demo-data"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Memory statistics"));
    assert!(stdout.contains("Free:"));
    assert!(stdout.contains("Wire:"));
    assert!(stdout.contains("16384.00 MB"));
    assert!(stdout.lines().any(|l| l.len() == 10 && l.starts_with('[')));
}

#[test]
fn test_watch_demo_data_counts_refreshes() {
    let (_dir, config) = config_dir("[output]\nformat = \"json\"\n");
    let output = memwidget(
        &config,
        &["watch", "--demo-data", "--interval", "1", "--count", "2"],
    );
    assert!(output.status.success());

    let lines = json_lines(&output);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l["state"] == "sampled"));
}

#[test]
fn test_watch_demo_widget_text() {
    let (_dir, config) = config_dir("");
    let output = memwidget(&config, &["watch", "--widget", "demo", "--count", "1"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    // Placeholder frame followed by one refresh.
    assert_eq!(stdout.lines().filter(|l| l.starts_with("Demo ")).count(), 2);
}

#[test]
fn test_total_json() {
    let (_dir, config) = config_dir("");
    let output = memwidget(&config, &["total", "--json"]);
    assert!(output.status.success());

    let lines = json_lines(&output);
    assert!(lines[0]["total_physical_bytes"].as_u64().unwrap() > 0);
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
#[test]
fn test_sample_host_kernel() {
    let (_dir, config) = config_dir("");
    let output = memwidget(&config, &["sample", "--json"]);
    assert!(output.status.success());

    let snapshot = &json_lines(&output)[0]["snapshot"];
    let page_size = snapshot["page_size"].as_u64().unwrap();
    for key in ["free_bytes", "active_bytes", "inactive_bytes", "wired_bytes"] {
        assert_eq!(snapshot[key].as_u64().unwrap() % page_size, 0, "{}", key);
    }
}

#[test]
fn test_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = memwidget(&dir.path().join("absent.toml"), &["total"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read config"));
}

#[test]
fn test_zero_interval_in_config_fails() {
    let (_dir, config) = config_dir("[memory]\ninterval = 0\n");
    let output = memwidget(&config, &["watch", "--demo-data", "--count", "1"]);
    assert!(!output.status.success());
}

#[test]
fn test_zero_count_fails() {
    let (_dir, config) = config_dir("");
    let output = memwidget(&config, &["watch", "--demo-data", "--count", "0"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
