//! Integration tests for the pwvault binary.
//!
//! These tests exercise the binary end-to-end using `assert_cmd`.
//! Stdin is piped, so every prompt reads one plain line.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Helper: a Command for the pwvault binary with `home` as `$HOME`
/// and a fast KDF configured there.
fn pwvault(home: &TempDir) -> Command {
    home.child(".pwvault.toml")
        .write_str("kdf_iterations = 500\n")
        .unwrap();

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("pwvault").expect("binary should exist");
    cmd.env("HOME", home.path())
        .env_remove("PWVAULT_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag_shows_usage() {
    let home = TempDir::new().unwrap();
    pwvault(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Encrypted password vault"))
        .stdout(predicate::str::contains("--vault"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn version_flag_shows_version() {
    let home = TempDir::new().unwrap();
    pwvault(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pwvault"));
}

#[test]
fn first_run_creates_vault_in_home() {
    let home = TempDir::new().unwrap();

    pwvault(&home)
        .write_stdin("hunter2\nhunter2\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vault unlocked"));

    home.child(".pwvault").assert(predicate::path::exists());
}

#[test]
fn first_run_mismatch_exits_without_vault() {
    let home = TempDir::new().unwrap();

    pwvault(&home)
        .write_stdin("hunter2\nhunter3\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("do not match"));

    home.child(".pwvault").assert(predicate::path::missing());
}

#[test]
fn records_persist_across_runs() {
    let home = TempDir::new().unwrap();

    pwvault(&home)
        .write_stdin("hunter2\nhunter2\n2\nexample.com\nalice\nn\np@ss\n7\n")
        .assert()
        .success();

    pwvault(&home)
        .write_stdin("hunter2\n1\n3\n1\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("example.com"))
        .stdout(predicate::str::contains("alice"))
        .stdout(predicate::str::contains("p@ss"));
}

#[test]
fn listing_does_not_print_passwords() {
    let home = TempDir::new().unwrap();

    pwvault(&home)
        .write_stdin("pw\npw\n2\nsite.io\nbob\nn\nvery-secret-value\n1\n7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("site.io"))
        .stdout(predicate::str::contains("very-secret-value").not());
}

#[test]
fn wrong_password_exits_with_error() {
    let home = TempDir::new().unwrap();

    pwvault(&home)
        .write_stdin("right\nright\n7\n")
        .assert()
        .success();

    pwvault(&home)
        .write_stdin("wrong\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("wrong password or corrupted file"));
}

#[test]
fn vault_flag_overrides_home_location() {
    let home = TempDir::new().unwrap();
    let custom = home.child("elsewhere/my.vault");

    pwvault(&home)
        .args(["--vault", custom.path().to_str().unwrap()])
        .write_stdin("pw\npw\n7\n")
        .assert()
        .success();

    custom.assert(predicate::path::exists());
    home.child(".pwvault").assert(predicate::path::missing());
}

#[test]
fn invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    let mut cmd = pwvault(&home);
    home.child(".pwvault.toml")
        .write_str("not valid {{toml")
        .unwrap();

    cmd.write_stdin("pw\npw\n7\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}
