//! Tests for broken or invalid scenarios

use motionlab_core::{run_scenario, ScenarioError};

const VALID_TAIL: &str = r#"
particles:
  - name: a
    position: [0.0, 0.0]
"#;

fn scenario(header: &str, body: &str) -> String {
    format!("{}\n{}", header, body)
}

#[test]
fn test_malformed_yaml_is_a_parse_error() {
    let result = run_scenario("dt: [0.1\nsteps: 10");
    assert!(matches!(result, Err(ScenarioError::Yaml(_))));
}

#[test]
fn test_missing_dt_is_a_parse_error() {
    let result = run_scenario(&scenario("steps: 10", VALID_TAIL));
    match result {
        Err(ScenarioError::Yaml(e)) => assert!(e.to_string().contains("dt")),
        other => panic!("expected a YAML error, got {:?}", other.map(|r| r.detectors)),
    }
}

#[test]
fn test_unknown_force_kind_is_a_parse_error() {
    let source = scenario(
        "dt: 0.01\nsteps: 10",
        r#"
particles:
  - name: a
    position: [0.0, 0.0]
forces:
  - kind: antigravity
    target: a
"#,
    );
    assert!(matches!(run_scenario(&source), Err(ScenarioError::Yaml(_))));
}

#[test]
fn test_zero_dt_is_rejected() {
    let result = run_scenario(&scenario("dt: 0.0\nsteps: 10", VALID_TAIL));
    match result {
        Err(ScenarioError::Invalid(msg)) => assert!(msg.contains("dt must be positive")),
        other => panic!("expected invalid scenario, got {:?}", other.map(|r| r.detectors)),
    }
}

#[test]
fn test_zero_steps_is_rejected() {
    let result = run_scenario(&scenario("dt: 0.01\nsteps: 0", VALID_TAIL));
    assert!(matches!(result, Err(ScenarioError::Invalid(_))));
}

#[test]
fn test_negative_mass_is_rejected() {
    let source = r#"
dt: 0.01
steps: 10
particles:
  - name: a
    position: [0.0, 0.0]
    mass: -1.0
"#;
    match run_scenario(source) {
        Err(ScenarioError::Invalid(msg)) => assert!(msg.contains("positive mass")),
        other => panic!("expected invalid scenario, got {:?}", other.map(|r| r.detectors)),
    }
}

#[test]
fn test_unknown_particle_is_rejected() {
    let source = r#"
dt: 0.01
steps: 10
particles:
  - name: a
    position: [0.0, 0.0]
forces:
  - kind: gravity
    target: ghost
"#;
    match run_scenario(source) {
        Err(ScenarioError::Invalid(msg)) => assert!(msg.contains("unknown particle 'ghost'")),
        other => panic!("expected invalid scenario, got {:?}", other.map(|r| r.detectors)),
    }
}

#[test]
fn test_duplicate_names_are_rejected() {
    let source = r#"
dt: 0.01
steps: 10
particles:
  - name: a
    position: [0.0, 0.0]
  - name: a
    position: [1.0, 0.0]
"#;
    match run_scenario(source) {
        Err(ScenarioError::Invalid(msg)) => assert!(msg.contains("duplicate particle name 'a'")),
        other => panic!("expected invalid scenario, got {:?}", other.map(|r| r.detectors)),
    }
}

#[test]
fn test_missing_file_is_an_io_error() {
    let result = motionlab_core::run_scenario_file("does/not/exist.yaml");
    assert!(matches!(result, Err(ScenarioError::Io(_))));
}

#[test]
fn test_errors_have_messages() {
    let err = run_scenario("dt: 0.0\nsteps: 0").unwrap_err();
    let text = err.to_string();
    assert!(!text.is_empty());
    assert!(text.contains("steps must be at least 1"));
}
