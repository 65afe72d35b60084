use std::collections::HashMap;
use std::io;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::activity::{Activity, ActivityKind, DurationRange};
use crate::domain::experiment::Experiment;
use crate::domain::flow::Flow;
use crate::domain::process::ProcessStructure;
use crate::domain::resource::Resource;
use crate::domain::scenario::{ActivityOverride, ResourceOverride, Scenario};

#[derive(Error, Debug)]
pub enum ProcessYamlError {
    #[error("failed to read process yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse process yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("missing activity id")]
    MissingActivityId,
    #[error("invalid activity kind: {0}")]
    InvalidKind(String),
}

#[derive(Deserialize)]
struct ExperimentRecord {
    name: String,
    activities: Vec<ActivityRecord>,
    #[serde(default)]
    flows: Vec<FlowRecord>,
    #[serde(default)]
    resources: Vec<ResourceRecord>,
    #[serde(default)]
    scenarios: Vec<ScenarioRecord>,
}

#[derive(Deserialize)]
struct ActivityRecord {
    id: String,
    name: Option<String>,
    kind: Option<String>,
    performer: Option<String>,
    duration: DurationRecord,
    cost: Option<f32>,
    resource_units: Option<f32>,
    weight: Option<f32>,
}

#[derive(Deserialize)]
struct DurationRecord {
    min: f32,
    max: f32,
    unit: Option<String>,
}

#[derive(Deserialize)]
struct FlowRecord {
    from: String,
    to: String,
    condition: Option<String>,
    probability: Option<f32>,
}

#[derive(Deserialize)]
struct ResourceRecord {
    role: String,
    capacity: Option<f32>,
    hourly_rate: Option<f32>,
}

#[derive(Deserialize)]
struct ScenarioRecord {
    name: String,
    description: Option<String>,
    #[serde(default)]
    activities: HashMap<String, ActivityOverrideRecord>,
    #[serde(default)]
    resources: HashMap<String, ResourceOverrideRecord>,
}

#[derive(Deserialize)]
struct ActivityOverrideRecord {
    duration: Option<DurationRecord>,
    cost: Option<f32>,
    resource_units: Option<f32>,
}

#[derive(Deserialize)]
struct ResourceOverrideRecord {
    capacity: Option<f32>,
    hourly_rate: Option<f32>,
}

pub fn load_experiment_from_yaml_file(path: &str) -> Result<Experiment, ProcessYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_experiment_from_yaml_str(&contents)
}

pub fn deserialize_experiment_from_yaml_str(input: &str) -> Result<Experiment, ProcessYamlError> {
    let record: ExperimentRecord = serde_yaml::from_str(input)?;

    let mut activities = Vec::with_capacity(record.activities.len());
    for activity_record in record.activities {
        activities.push(activity_from_record(activity_record)?);
    }

    let flows = record
        .flows
        .into_iter()
        .map(|flow| Flow {
            from: flow.from,
            to: flow.to,
            condition: flow.condition,
            probability: flow.probability.unwrap_or(1.0),
        })
        .collect();

    let resources = record
        .resources
        .into_iter()
        .map(|resource| Resource {
            role: resource.role,
            capacity: resource.capacity.unwrap_or(1.0),
            hourly_rate: resource.hourly_rate.unwrap_or(0.0),
        })
        .collect();

    let scenarios = record
        .scenarios
        .into_iter()
        .map(scenario_from_record)
        .collect();

    Ok(Experiment {
        process: ProcessStructure {
            name: record.name,
            activities,
            flows,
            resources,
        },
        scenarios,
    })
}

fn activity_from_record(record: ActivityRecord) -> Result<Activity, ProcessYamlError> {
    if record.id.trim().is_empty() {
        return Err(ProcessYamlError::MissingActivityId);
    }
    Ok(Activity {
        name: record.name.unwrap_or_else(|| record.id.clone()),
        id: record.id,
        kind: parse_kind(record.kind.as_deref())?,
        performer: record.performer.unwrap_or_else(|| "unassigned".to_string()),
        duration: duration_from_record(record.duration),
        cost: record.cost.unwrap_or(0.0),
        resource_units: record.resource_units.unwrap_or(1.0),
        weight: record.weight.unwrap_or(1.0),
    })
}

fn duration_from_record(record: DurationRecord) -> DurationRange {
    DurationRange {
        min: record.min,
        max: record.max,
        unit: record.unit.unwrap_or_else(|| "minutes".to_string()),
    }
}

fn parse_kind(value: Option<&str>) -> Result<ActivityKind, ProcessYamlError> {
    let kind = match value {
        Some(text) => text,
        None => return Ok(ActivityKind::Task),
    };
    let kind = match kind.to_ascii_lowercase().as_str() {
        "task" => ActivityKind::Task,
        "decision" => ActivityKind::Decision,
        "parallel" => ActivityKind::Parallel,
        "approval" => ActivityKind::Approval,
        _ => return Err(ProcessYamlError::InvalidKind(kind.to_string())),
    };
    Ok(kind)
}

fn scenario_from_record(record: ScenarioRecord) -> Scenario {
    Scenario {
        name: record.name,
        description: record.description,
        activity_overrides: record
            .activities
            .into_iter()
            .map(|(id, overrides)| {
                (
                    id,
                    ActivityOverride {
                        duration: overrides.duration.map(duration_from_record),
                        cost: overrides.cost,
                        resource_units: overrides.resource_units,
                    },
                )
            })
            .collect(),
        resource_overrides: record
            .resources
            .into_iter()
            .map(|(role, overrides)| {
                (
                    role,
                    ResourceOverride {
                        capacity: overrides.capacity,
                        hourly_rate: overrides.hourly_rate,
                    },
                )
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_experiment_with_all_sections() {
        let yaml = r#"
name: Order Handling
activities:
  - id: receive
    name: Receive order
    kind: task
    performer: Clerk
    duration: {min: 10, max: 20}
    cost: 5
    resource_units: 1
    weight: 0.8
  - id: approve
    kind: approval
    duration: {min: 5, max: 5, unit: minutes}
flows:
  - from: receive
    to: approve
    condition: valid order
    probability: 0.9
resources:
  - role: Clerk
    capacity: 2
    hourly_rate: 30
scenarios:
  - name: Faster intake
    description: Halve intake time
    activities:
      receive:
        duration: {min: 5, max: 10}
        cost: 4
    resources:
      Clerk:
        capacity: 3
"#;

        let experiment = deserialize_experiment_from_yaml_str(yaml).unwrap();
        let process = &experiment.process;
        assert_eq!(process.name, "Order Handling");
        assert_eq!(process.activities.len(), 2);

        let receive = &process.activities[0];
        assert_eq!(receive.name, "Receive order");
        assert_eq!(receive.kind, ActivityKind::Task);
        assert_eq!(receive.performer, "Clerk");
        assert_eq!(receive.duration.min, 10.0);
        assert_eq!(receive.weight, 0.8);

        let approve = &process.activities[1];
        assert_eq!(approve.name, "approve");
        assert_eq!(approve.kind, ActivityKind::Approval);
        assert_eq!(approve.performer, "unassigned");
        assert_eq!(approve.cost, 0.0);
        assert_eq!(approve.resource_units, 1.0);

        assert_eq!(process.flows[0].condition.as_deref(), Some("valid order"));
        assert_eq!(process.flows[0].probability, 0.9);
        assert_eq!(process.resources[0].capacity, 2.0);

        let scenario = &experiment.scenarios[0];
        assert_eq!(scenario.name, "Faster intake");
        let overrides = &scenario.activity_overrides["receive"];
        assert_eq!(overrides.cost, Some(4.0));
        assert_eq!(overrides.duration.as_ref().unwrap().max, 10.0);
        assert_eq!(scenario.resource_overrides["Clerk"].capacity, Some(3.0));
    }

    #[test]
    fn deserialize_experiment_defaults_flow_probability_to_one() {
        let yaml = r#"
name: Demo
activities:
  - id: a1
    duration: {min: 1, max: 1}
flows:
  - from: a1
    to: a2
"#;

        let experiment = deserialize_experiment_from_yaml_str(yaml).unwrap();
        assert_eq!(experiment.process.flows[0].probability, 1.0);
        assert_eq!(experiment.process.flows[0].condition, None);
    }

    #[test]
    fn deserialize_experiment_rejects_blank_activity_id() {
        let yaml = r#"
name: Demo
activities:
  - id: ""
    duration: {min: 1, max: 1}
"#;

        let error = deserialize_experiment_from_yaml_str(yaml).unwrap_err();
        assert!(matches!(error, ProcessYamlError::MissingActivityId));
    }

    #[test]
    fn deserialize_experiment_rejects_unknown_kind() {
        let yaml = r#"
name: Demo
activities:
  - id: a1
    kind: subprocess
    duration: {min: 1, max: 1}
"#;

        let error = deserialize_experiment_from_yaml_str(yaml).unwrap_err();
        assert!(matches!(error, ProcessYamlError::InvalidKind(kind) if kind == "subprocess"));
    }

    #[test]
    fn deserialize_experiment_without_scenarios() {
        let yaml = r#"
name: Demo
activities:
  - id: a1
    duration: {min: 1, max: 2}
"#;

        let experiment = deserialize_experiment_from_yaml_str(yaml).unwrap();
        assert!(experiment.scenarios.is_empty());
        assert!(experiment.process.flows.is_empty());
        assert!(experiment.process.resources.is_empty());
    }
}
