//! End-to-end runs of the easel binary

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn run_easel(config: &Path, input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_easel"))
        .arg("--config")
        .arg(config)
        .env_remove("EASEL_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // The process may exit before reading; a failed write is fine then
    let _ = child.stdin.take().unwrap().write_all(input);
    child.wait_with_output().unwrap()
}

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_colorizes_stdin() {
    let config = write_config("[patterns.fox]\npattern = 'fox'\nforeground_color = 'red'\n");
    let output = run_easel(config.path(), b"The quick brown fox jumps.\nno match\n");

    assert!(output.status.success());
    assert_eq!(
        output.stdout,
        b"The quick brown \x1b[31mfox\x1b[0m jumps.\nno match\n"
    );
}

#[test]
fn test_invalid_config_fails_before_output() {
    let config = write_config("[patterns.fox]\npattern = 'fox'\nattributes = 'sparkly'\n");
    let output = run_easel(config.path(), b"a fox\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error:"), "stderr was: {stderr}");
    assert!(stderr.contains("Invalid attribute: sparkly"));
}

#[test]
fn test_malformed_toml_fails() {
    let config = write_config("this is not toml");
    let output = run_easel(config.path(), b"line\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: TOML syntax error"));
}

#[test]
fn test_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_easel(&dir.path().join("absent.toml"), b"line\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: Cannot read config"));
}
