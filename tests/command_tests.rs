use iplimit_stats::commands::{ensure_log, stats};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn create_sample_log() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("3xipl.log");
    let mut file = fs::File::create(&path).unwrap();
    writeln!(file, "2024 BAN [Email] = a@x.com [IP] = 1.1.1.1").unwrap();
    writeln!(file, "2024 BAN [Email] = a@x.com [IP] = 2.2.2.2").unwrap();
    writeln!(file, "2024 BAN [Email] = b@x.com [IP] = 3.3.3.3").unwrap();
    writeln!(file, "2024 UNBAN [Email] = a@x.com [IP] = 1.1.1.1").unwrap();
    writeln!(file, "noise line").unwrap();
    file.flush().unwrap();
    (dir, path)
}

#[test]
fn test_stats_json_output() {
    let (dir, log_path) = create_sample_log();
    let output = dir.path().join("stats.json");

    stats::run(&log_path, 5, "json", Some(output.to_str().unwrap())).unwrap();

    let json: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["banCount"], 3);
    assert_eq!(json["unbanCount"], 1);
    assert_eq!(json["uniqueIPs"], 3);
    assert_eq!(json["uniqueEmails"], 2);
    assert_eq!(json["topEmails"][0]["email"], "a@x.com");
    assert_eq!(json["topEmails"][0]["bans"], 2);
    assert_eq!(json["topEmails"][1]["email"], "b@x.com");
}

#[test]
fn test_stats_csv_output() {
    let (dir, log_path) = create_sample_log();
    let output = dir.path().join("top.csv");

    stats::run(&log_path, 1, "csv", Some(output.to_str().unwrap())).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["rank,email,bans", "1,a@x.com,2"]);
}

#[test]
fn test_stats_table_on_missing_log() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("report.txt");

    stats::run(
        &dir.path().join("absent.log"),
        5,
        "table",
        Some(output.to_str().unwrap()),
    )
    .unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("No bans recorded"));
}

#[test]
fn test_stats_invalid_format() {
    let (_dir, log_path) = create_sample_log();

    let result = stats::run(&log_path, 5, "xml", None);

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Invalid format"));
}

#[test]
fn test_ensure_log_creates_file() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("x-ui").join("3xipl.log");

    ensure_log::run(&log_path, true).unwrap();

    assert!(log_path.is_file());
}

#[test]
fn test_ensure_log_failure_is_swallowed_unless_strict() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let log_path = blocker.join("3xipl.log");

    assert!(ensure_log::run(&log_path, false).is_ok());

    let err = ensure_log::run(&log_path, true).unwrap_err();
    assert!(format!("{err:#}").contains("blocker"));
}
