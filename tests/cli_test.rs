//! Binary-level tests: flags, exit codes, stdout/stderr shape.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cmd() -> Command {
    Command::cargo_bin("ipv4-aggregate").unwrap()
}

#[test]
fn test_string_input_happy_path() {
    cmd()
        .args(["--string", "10.0.0.0/24 10.0.1.0/24 192.168.0.0/16"])
        .assert()
        .success()
        .stdout("10.0.0.0/23\n192.168.0.0/16\n");
}

#[test]
fn test_file_input_happy_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "192.168.0.0/22").unwrap();
    writeln!(file, "192.168.0.0/24").unwrap();
    writeln!(file, "192.168.2.0/24").unwrap();

    cmd()
        .args(["--filepath", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout("192.168.0.0/22\n");
}

#[test]
fn test_short_flags() {
    cmd()
        .args(["-s", "10.0.0.0/24"])
        .assert()
        .success()
        .stdout("10.0.0.0/24\n");
}

#[test]
fn test_both_inputs_fail() {
    cmd()
        .args(["--string", "10.0.0.0/24", "--filepath", "nets.txt"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("both input options"));
}

#[test]
fn test_no_input_fails() {
    cmd()
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("no input defined"));
}

#[test]
fn test_missing_file_fails() {
    cmd()
        .args(["--filepath", "/no/such/nets.txt"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("/no/such/nets.txt"));
}

#[test]
fn test_bad_token_fails_naming_it() {
    cmd()
        .args(["--string", "10.0.0.0/24 10.0.0.0/33"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("bad IP network value: <10.0.0.0/33>"));
}

#[test]
fn test_whitespace_only_string_fails() {
    cmd()
        .args(["--string", "   "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no input defined"));
}

#[test]
fn test_help_mentions_both_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--string"))
        .stdout(predicate::str::contains("--filepath"));
}
