//! Integration tests for top-level CLI behavior.

use std::path::Path;
use std::process::{Command, Output};

fn run_files_client(args: &[&str], envs: &[(&str, &Path)]) -> Output {
    let bin = env!("CARGO_BIN_EXE_files-client");
    let mut cmd = Command::new(bin);
    cmd.args(args).env_remove("FILES_CLIENT_RECORD").env_remove("FILES_CLIENT_APP_NAME");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to run files-client binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn temp_file_prints_unique_paths_with_extension() {
    let dir = tempfile::tempdir().unwrap();
    let envs = [("FILES_CLIENT_TEMP_DIR", dir.path())];

    let first = run_files_client(&["temp-file", "csv"], &envs);
    let second = run_files_client(&["temp-file", "csv"], &envs);

    assert!(first.status.success());
    assert_ne!(stdout(&first), stdout(&second));
    assert!(stdout(&first).ends_with(".csv"));
    assert!(Path::new(&stdout(&first)).starts_with(dir.path()));
}

#[test]
fn read_prints_file_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    std::fs::write(&path, "hello cli").unwrap();

    let output = run_files_client(&["read", path.to_str().unwrap()], &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "hello cli");
}

#[test]
fn read_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let output = run_files_client(&["read", path.to_str().unwrap()], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("failed to read"));
}

#[test]
fn mkdir_creates_nested_directories() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("x").join("y");

    let output = run_files_client(&["mkdir", target.to_str().unwrap()], &[]);
    assert!(output.status.success());
    assert!(target.is_dir());
}

#[test]
fn app_support_uses_configured_root_and_name() {
    let root = tempfile::tempdir().unwrap();
    let envs = [("FILES_CLIENT_SUPPORT_ROOT", root.path())];

    let output = run_files_client(&["app-support", "--app-name", "Journal"], &envs);
    assert!(output.status.success());
    assert_eq!(Path::new(&stdout(&output)), root.path().join("Journal"));
    assert!(root.path().join("Journal").is_dir());
}

#[test]
fn download_rejects_invalid_url() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("out.bin");

    let output = run_files_client(&["download", "not a url", dest.to_str().unwrap()], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Invalid URL"));
}

#[test]
fn recording_writes_cassettes() {
    let dir = tempfile::tempdir().unwrap();
    let cassettes = dir.path().join("cassettes");
    let envs = [("FILES_CLIENT_RECORD", cassettes.as_path())];

    let output = run_files_client(&["temp-dir"], &envs);
    assert!(output.status.success());
    assert!(cassettes.join("files.cassette.yaml").is_file());
    assert!(cassettes.join("id_gen.cassette.yaml").is_file());
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_files_client(&["nonsense"], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}

#[test]
fn zero_timeout_is_rejected() {
    let envs = [("FILES_CLIENT_TIMEOUT_SECS", Path::new("0"))];

    let output = run_files_client(&["temp-dir"], &envs);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("FILES_CLIENT_TIMEOUT_SECS"));
}

#[test]
fn positive_timeout_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let envs =
        [("FILES_CLIENT_TIMEOUT_SECS", Path::new("15")), ("FILES_CLIENT_TEMP_DIR", dir.path())];

    let output = run_files_client(&["temp-dir"], &envs);
    assert!(output.status.success());
    assert_eq!(Path::new(&stdout(&output)), dir.path());
}
