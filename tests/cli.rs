use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn sketchpad_cmd() -> Command {
    Command::cargo_bin("sketchpad").expect("binary exists")
}

#[test]
fn sketchpad_help_prints_usage() {
    sketchpad_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Minimal drawing canvas for Wayland desktops",
        ));
}

#[test]
fn run_requires_wayland_env() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("WAYLAND_DISPLAY not set"));
}

#[test]
fn invalid_thickness_is_rejected() {
    sketchpad_cmd()
        .args(["--thickness", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a whole number"));

    sketchpad_cmd()
        .args(["--thickness", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--thickness"));
}

#[test]
fn unknown_color_is_rejected() {
    sketchpad_cmd()
        .args(["--color", "chartreuse"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("chartreuse"));
}

#[test]
fn missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    sketchpad_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .arg("--config")
        .arg(temp.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn init_config_writes_once() {
    let temp = TempDir::new().unwrap();
    let expected = temp.path().join("sketchpad").join("config.toml");

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
    let written = std::fs::read_to_string(&expected).unwrap();
    assert!(written.contains("[drawing]"));

    sketchpad_cmd()
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
