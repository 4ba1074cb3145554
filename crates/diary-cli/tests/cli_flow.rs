use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::{tempdir, TempDir};

use diary_core::crypto::encrypt;

const PASSWORD: &str = "secret123";

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_diary"))
}

/// Command with XDG dirs inside `home` and no diary settings inherited from
/// the environment running the tests.
fn diary(home: &Path) -> Command {
    let mut cmd = Command::new(bin());
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("DIARY_PASSWORD")
        .env_remove("DIARY_ROOT")
        .env_remove("DIARY_CONFIG")
        .env_remove("DIARY_LOG")
        .env_remove("EDITOR")
        .stdin(Stdio::null());
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("run diary")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "diary failed: stdout={}, stderr={}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn default_entry_path(home: &TempDir, year: &str, month: &str, day: &str) -> PathBuf {
    home.path()
        .join("data")
        .join("diary")
        .join(year)
        .join(month)
        .join(day)
        .join(format!("{}-{}-{}.json", year, month, day))
}

fn write_entry(home: &TempDir, date: &str, body: &str) {
    let output = run(diary(home.path())
        .args(["write", date, "--body", body])
        .env("DIARY_PASSWORD", PASSWORD));
    assert_success(&output);
}

#[test]
fn test_cli_write_then_show() {
    let home = tempdir().unwrap();

    let output = run(diary(home.path())
        .args(["write", "2024-01-15", "--body", "Hello diary"])
        .env("DIARY_PASSWORD", PASSWORD));
    assert_success(&output);
    assert!(stdout(&output).contains("Saved entry for 2024-01-15"));

    let path = default_entry_path(&home, "2024", "01", "15");
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "njaKifIIAVTTi6Jq8hfLmxmL/hKQAfHNc0xP9TBJcW0mByN/nQr0k17yiQO/XIqb"
    );

    let output = run(diary(home.path())
        .args(["show", "2024-01-15"])
        .env("DIARY_PASSWORD", PASSWORD));
    assert_success(&output);
    assert_eq!(stdout(&output), "Hello diary\n");

    let output = run(diary(home.path())
        .args(["show", "2024-01-15", "--json"])
        .env("DIARY_PASSWORD", PASSWORD));
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("show json");
    assert_eq!(value["date"], "2024-01-15");
    assert_eq!(value["entry"], "Hello diary");
}

#[test]
fn test_cli_write_replaces_entry_from_stdin() {
    let home = tempdir().unwrap();
    write_entry(&home, "2024-01-15", "first draft");

    let mut child = diary(home.path())
        .args(["write", "2024-01-15"])
        .env("DIARY_PASSWORD", PASSWORD)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn diary");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"From stdin\nsecond line\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait diary");
    assert_success(&output);

    let output = run(diary(home.path())
        .args(["show", "2024-01-15"])
        .env("DIARY_PASSWORD", PASSWORD));
    assert_eq!(stdout(&output), "From stdin\nsecond line\n");
}

#[test]
fn test_cli_wrong_password_exits_auth_failed() {
    let home = tempdir().unwrap();
    write_entry(&home, "2024-01-15", "Hello diary");

    let output = run(diary(home.path())
        .args(["show", "2024-01-15"])
        .env("DIARY_PASSWORD", "wrong123"));

    assert_eq!(output.status.code(), Some(5));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid password"));
}

#[test]
fn test_cli_wrong_password_does_not_overwrite() {
    let home = tempdir().unwrap();
    write_entry(&home, "2024-01-15", "Hello diary");
    let path = default_entry_path(&home, "2024", "01", "15");
    let before = std::fs::read_to_string(&path).unwrap();

    let output = run(diary(home.path())
        .args(["write", "2024-01-15", "--body", "overwritten"])
        .env("DIARY_PASSWORD", "wrong123"));

    assert_eq!(output.status.code(), Some(5));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_cli_show_missing_date_needs_no_password() {
    let home = tempdir().unwrap();

    let output = run(diary(home.path()).args(["show", "2024-02-01"]));

    assert_success(&output);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_write_without_password_is_cancelled() {
    let home = tempdir().unwrap();

    let output = run(diary(home.path()).args(["write", "2024-01-15", "--body", "text"]));

    assert_eq!(output.status.code(), Some(8));
    assert!(!default_entry_path(&home, "2024", "01", "15").exists());
}

#[test]
fn test_cli_corrupt_entry_exits_corrupt() {
    let home = tempdir().unwrap();
    let path = default_entry_path(&home, "2024", "01", "15");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    let not_a_record = encrypt("[1, 2, 3]", PASSWORD.as_bytes()).unwrap();
    std::fs::write(&path, &not_a_record).unwrap();

    let output = run(diary(home.path())
        .args(["show", "2024-01-15"])
        .env("DIARY_PASSWORD", PASSWORD));

    assert_eq!(output.status.code(), Some(6));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), not_a_record);
}

#[test]
fn test_cli_path_is_deterministic() {
    let home = tempdir().unwrap();
    let root = home.path().join("entries");

    let output = run(diary(home.path())
        .arg("--root")
        .arg(&root)
        .args(["path", "2024-01-15"]));

    assert_success(&output);
    let expected = root
        .join("2024")
        .join("01")
        .join("15")
        .join("2024-01-15.json");
    assert_eq!(stdout(&output).trim_end(), expected.to_string_lossy());
}

#[test]
fn test_cli_list_month() {
    let home = tempdir().unwrap();
    write_entry(&home, "2024-02-03", "one");
    write_entry(&home, "2024-02-17", "two");
    write_entry(&home, "2024-03-01", "three");

    let output = run(diary(home.path()).args(["list", "--month", "2024-02"]));
    assert_success(&output);
    assert_eq!(stdout(&output), "2024-02-03\n2024-02-17\n");

    let output = run(diary(home.path()).args(["list", "--month", "2024-02", "--json"]));
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("list json");
    assert_eq!(value, serde_json::json!(["2024-02-03", "2024-02-17"]));
}

#[test]
fn test_cli_init_layout_is_used() {
    let home = tempdir().unwrap();
    let root = home.path().join("journal");

    let output = run(diary(home.path())
        .arg("--root")
        .arg(&root)
        .args(["init", "--dir-format", "%Y/%m", "--file-format", "%d"]));
    assert_success(&output);
    assert!(home.path().join("config").join("diary").join("config.toml").is_file());

    write_entry(&home, "2024-01-15", "custom layout");
    assert!(root.join("2024").join("01").join("15.json").is_file());

    let output = run(diary(home.path()).args(["init"]));
    assert_eq!(output.status.code(), Some(4));

    let output = run(diary(home.path()).args(["init", "--force"]));
    assert_success(&output);
}

#[test]
fn test_cli_init_rejects_ambiguous_layout() {
    let home = tempdir().unwrap();

    let output = run(diary(home.path()).args([
        "init",
        "--dir-format",
        "%Y/%m",
        "--file-format",
        "entry",
    ]));

    assert_eq!(output.status.code(), Some(4));
    assert!(!home.path().join("config").join("diary").join("config.toml").exists());
}

#[test]
fn test_cli_invalid_date_is_invalid_input() {
    let home = tempdir().unwrap();

    let output = run(diary(home.path()).args(["show", "2024-02-30"]));

    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_cli_missing_explicit_config_is_not_found() {
    let home = tempdir().unwrap();

    let output = run(diary(home.path())
        .args(["show", "2024-01-15"])
        .env("DIARY_CONFIG", home.path().join("nope.toml")));

    assert_eq!(output.status.code(), Some(3));
}
