use assert_cmd::Command;
use predicates::prelude::*;

fn elc() -> Command {
    let mut cmd = Command::cargo_bin("elc").expect("binary");
    // Keep tests hermetic regardless of the developer's shell environment.
    cmd.env_remove("ELGATO_LIGHT_URL");
    cmd
}

#[test]
fn missing_url_fails_without_network() {
    elc()
        .arg("status")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Light URL not specified"))
        .stderr(predicate::str::contains("ELGATO_LIGHT_URL"));
}

#[test]
fn missing_url_fails_for_default_command_too() {
    elc()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Light URL not specified"));
}

#[test]
fn out_of_range_brightness_is_rejected_before_any_request() {
    // The URL points nowhere routable; validation must fail first.
    elc()
        .args(["brightness", "101", "--url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Brightness value out of range (valid values: 0-100)",
        ));
}

#[test]
fn out_of_range_temperature_is_rejected_before_any_request() {
    elc()
        .args(["temperature", "2899", "--url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Color temperature out of range (valid values: 2900-7000)",
        ));
}

#[test]
fn negative_brightness_is_an_argument_error() {
    elc()
        .args(["--url", "http://127.0.0.1:1", "brightness", "--", "-1"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn unknown_command_is_a_usage_error() {
    elc()
        .args(["blink", "--url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("blink"));
}

#[test]
fn brightness_requires_a_value() {
    elc()
        .args(["brightness", "--url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn help_exits_zero() {
    elc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("brightness"))
        .stdout(predicate::str::contains("temperature"));
}

#[test]
fn version_exits_zero() {
    elc().arg("--version").assert().success();
}
