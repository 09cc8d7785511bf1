use assert_cmd::Command;
use predicates::prelude::*;

fn uv_demo() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_uv-demo"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_greeting_and_version() {
    let expected = format!("Hello from uv-demo!\nVersion: {}\n", env!("CARGO_PKG_VERSION"));

    uv_demo()
        .assert()
        .success()
        .stdout(predicate::str::diff(expected))
        .stderr(predicate::str::is_empty());
}

#[test]
fn output_is_stable_across_runs() {
    let first = uv_demo().assert().success().get_output().stdout.clone();
    let second = uv_demo().assert().success().get_output().stdout.clone();

    assert_eq!(first, second);
}

#[test]
fn debug_logging_stays_off_stdout() {
    uv_demo()
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Hello from uv-demo!\n"))
        .stdout(predicate::str::contains("resolved package version").not())
        .stderr(predicate::str::contains("resolved package version"));
}

#[test]
fn shows_version() {
    uv_demo()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "uv-demo {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn shows_help() {
    uv_demo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Prints a greeting"));
}

#[test]
fn rejects_unexpected_arguments() {
    uv_demo()
        .arg("extra")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Hello").not());
}
