use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

const EXPERIMENT_YAML: &str = r#"
name: Order Handling
activities:
  - id: receive
    duration: {min: 10, max: 10}
    cost: 5
  - id: ship
    duration: {min: 5, max: 5}
    cost: 3
flows:
  - from: receive
    to: ship
scenarios:
  - name: To be
    activities:
      receive:
        duration: {min: 5, max: 5}
"#;

#[test]
fn export_events_writes_json_event_log() {
    let input_file = assert_fs::NamedTempFile::new("experiment.yaml").unwrap();
    input_file.write_str(EXPERIMENT_YAML).unwrap();
    let output_file = assert_fs::NamedTempFile::new("events.json").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("procsim").unwrap();
    cmd.args([
        "export-events",
        "-i",
        input_file.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
        "--scenario",
        "To be",
        "-s",
        "2026-02-01",
        "-n",
        "2",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("8 events written to"));

    let output = fs::read_to_string(output_file.path()).unwrap();
    let events: serde_json::Value = serde_json::from_str(&output).unwrap();
    let events = events.as_array().unwrap();
    assert_eq!(events.len(), 8);
    assert_eq!(events[0]["activity_id"], "receive");
    assert_eq!(events[0]["phase"], "start");
    assert_eq!(events[1]["duration_minutes"], 5.0);
}

#[test]
fn export_events_rejects_unknown_scenario() {
    let input_file = assert_fs::NamedTempFile::new("experiment.yaml").unwrap();
    input_file.write_str(EXPERIMENT_YAML).unwrap();
    let output_file = assert_fs::NamedTempFile::new("events.json").unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("procsim").unwrap();
    cmd.args([
        "export-events",
        "-i",
        input_file.path().to_str().unwrap(),
        "-o",
        output_file.path().to_str().unwrap(),
        "--scenario",
        "Nope",
    ]);

    cmd.assert()
        .stderr(predicate::str::contains("unknown scenario: Nope"));
}
