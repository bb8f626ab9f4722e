// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use assert_cmd::Command;
use predicates::prelude::*;

fn tumble() -> Command {
    Command::cargo_bin("tumble").unwrap()
}

#[test]
fn help_lists_subcommands() {
    tumble()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run").and(predicate::str::contains("init-config")));
}

#[test]
fn head_on_text_report() {
    let dir = tempfile::tempdir().unwrap();
    tumble()
        .args(["run", "--scene", "head-on", "--steps", "60", "--config"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("scene: head-on"))
        .stdout(predicate::str::contains("sphere contacts: "))
        .stdout(predicate::str::contains("state hash: "));
}

#[test]
fn json_report_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let run = || {
        let output = tumble()
            .args(["run", "--scene", "rain", "--bodies", "8", "--seed", "3"])
            .args(["--steps", "120", "--json", "--config"])
            .arg(dir.path())
            .output()
            .unwrap();
        assert!(output.status.success());
        serde_json::from_slice::<serde_json::Value>(&output.stdout).unwrap()
    };
    let first = run();
    let second = run();
    assert_eq!(first["state_hash"], second["state_hash"]);
    assert_eq!(first["scene"], "rain");
    assert_eq!(first["bodies"].as_array().map(Vec::len), Some(8));
    assert_eq!(first["state_hash"].as_str().map(str::len), Some(64));
}

#[test]
fn init_config_writes_defaults_once() {
    let dir = tempfile::tempdir().unwrap();
    tumble()
        .args(["init-config", "--config"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("sim.json"));

    let written = std::fs::read_to_string(dir.path().join("sim.json")).unwrap();
    assert!(written.contains("\"scene\": \"rain\""));

    tumble()
        .args(["init-config", "--config"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    tumble()
        .args(["init-config", "--force", "--config"])
        .arg(dir.path())
        .assert()
        .success();
}

#[test]
fn stored_settings_are_used_and_flags_override_them() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("sim.json"),
        r#"{ "scene": "pendulum", "bodies": 2, "steps": 5 }"#,
    )
    .unwrap();

    tumble()
        .args(["run", "--json", "--config"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"scene\": \"pendulum\""))
        .stdout(predicate::str::contains("\"steps\": 5"));

    tumble()
        .args(["run", "--json", "--steps", "7", "--config"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"steps\": 7"));
}

#[test]
fn rejects_non_positive_dt() {
    let dir = tempfile::tempdir().unwrap();
    tumble()
        .args(["run", "--dt", "0", "--config"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--dt must be a positive"));
}

#[test]
fn unknown_scene_is_a_usage_error() {
    tumble()
        .args(["run", "--scene", "tornado"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
