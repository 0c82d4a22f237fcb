use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn ddlog() -> Command {
    Command::cargo_bin("ddlog").unwrap()
}

fn printed_path(output: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8(output.to_vec()).unwrap().trim())
}

#[test]
fn emit_writes_formatted_line() {
    let temp_dir = TempDir::new().unwrap();

    let output = ddlog()
        .args(["emit", "run", "--root", "spl", "--adapter", "openrouter", "--log-dir"])
        .arg(temp_dir.path())
        .args(["--logger", "executor", "prompt", "sent"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let path = printed_path(&output.stdout);
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("run-openrouter-"));
    assert!(name.ends_with(".log"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("  INFO     spl.executor  prompt sent"));
}

#[test]
fn emit_below_threshold_is_filtered() {
    let temp_dir = TempDir::new().unwrap();

    let output = ddlog()
        .args(["emit", "gen", "--root", "spl", "--level", "warning", "--at", "info", "--log-dir"])
        .arg(temp_dir.path())
        .arg("quiet")
        .output()
        .unwrap();
    assert!(output.status.success());

    let path = printed_path(&output.stdout);
    assert!(fs::read_to_string(&path).unwrap().is_empty());
}

#[test]
fn emit_console_mirrors_to_stderr() {
    let temp_dir = TempDir::new().unwrap();

    ddlog()
        .args(["emit", "run", "--root", "spl", "--console", "--at", "error", "--log-dir"])
        .arg(temp_dir.path())
        .arg("boom")
        .assert()
        .success()
        .stderr(predicate::str::contains("  ERROR    spl  boom"));
}

#[test]
fn emit_reads_options_file() {
    let temp_dir = TempDir::new().unwrap();
    let logs = temp_dir.path().join("nested").join("logs");
    let config = temp_dir.path().join("logging.yml");
    fs::write(
        &config,
        format!("adapter: claude_cli\nlog_level: debug\nlog_dir: {}\n", logs.display()),
    )
    .unwrap();

    let output = ddlog()
        .args(["emit", "benchmark", "--root", "spl_flow", "--at", "debug", "--config"])
        .arg(&config)
        .arg("detail")
        .output()
        .unwrap();
    assert!(output.status.success());

    let path = printed_path(&output.stdout);
    assert_eq!(path.parent().unwrap(), logs);
    assert!(path
        .file_name()
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("benchmark-claude_cli-"));
    assert!(fs::read_to_string(&path).unwrap().contains("DEBUG    spl_flow  detail"));
}

#[test]
fn emit_rejects_unknown_message_level() {
    ddlog()
        .args(["emit", "run", "--root", "spl", "--at", "loud", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loud"));
}

#[test]
fn emit_reports_unusable_log_dir() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "file").unwrap();

    ddlog()
        .args(["emit", "run", "--root", "spl", "--log-dir"])
        .arg(blocker.join("logs"))
        .arg("x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn path_does_not_create_anything() {
    let temp_dir = TempDir::new().unwrap();
    let logs = temp_dir.path().join("logs");

    ddlog()
        .args(["path", "generate", "--log-dir"])
        .arg(&logs)
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"generate-\d{8}-\d{6}\.log\n$").unwrap());

    assert!(!logs.exists());
}

#[test]
fn path_includes_adapter() {
    let temp_dir = TempDir::new().unwrap();
    let logs = temp_dir.path().join("logs");

    ddlog()
        .args(["path", "run", "--adapter", "openrouter", "--log-dir"])
        .arg(&logs)
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"/run-openrouter-\d{8}-\d{6}\.log\n$").unwrap());

    assert!(!logs.exists());
}

#[test]
fn levels_lists_mapping() {
    ddlog()
        .arg("levels")
        .assert()
        .success()
        .stdout(predicate::str::contains("debug    10"))
        .stdout(predicate::str::contains("error    40"));
}

#[test]
fn version_prints_name() {
    ddlog()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
