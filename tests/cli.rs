//! Regression test to make sure that --help always works.

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::function::function as pred;

fn decohack() -> Command {
    let mut cmd = Command::cargo_bin("decohack").unwrap();
    cmd.env("DECOHACK_COLOR", "never");
    cmd
}

#[test]
fn help_actually_helps() {
    decohack()
        .arg("--help")
        .assert()
        .success()
        // check that the help text was shown by looking for part of the --charset argument help
        .stdout(pred(|s: &str| s.contains("character set of the input files")))
        .stdout(pred(|s: &str| s.contains("Usage: ")))
    ;
}

#[test]
fn short_help() {
    decohack()
        .arg("-h")
        .assert()
        .success()
        .stdout(pred(|s: &str| s.contains("--source-output")))
    ;
}

#[test]
fn version() {
    decohack()
        .arg("--version")
        .assert()
        .success()
        .stdout(pred(|s: &str| s.starts_with("decohack ")))
    ;
}

#[test]
fn no_input() {
    decohack()
        .assert()
        .failure()
        .stderr(pred(|s: &str| s.contains("Usage: ")))
        .stderr(pred(|s: &str| s.contains("missing required positional arg INPUT")))
    ;
}

#[test]
fn input_does_not_exist() {
    decohack()
        .arg("definitely-not-a-file.dh")
        .assert()
        .failure()
        .stderr(pred(|s: &str| s.contains("while reading file 'definitely-not-a-file.dh'")))
    ;
}

#[test]
fn unknown_charset() {
    decohack()
        .arg("main.dh")
        .arg("--charset").arg("klingon")
        .assert()
        .failure()
        .stderr(pred(|s: &str| s.contains("unknown character set 'klingon'")))
    ;
}

#[test]
fn unknown_option() {
    decohack()
        .arg("main.dh")
        .arg("--frobnicate")
        .assert()
        .failure()
        .stderr(pred(|s: &str| s.contains("Usage: ")))
    ;
}
