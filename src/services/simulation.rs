use chrono::{NaiveDate, NaiveDateTime};
use rand::Rng;
use thiserror::Error;

use crate::domain::process::{ProcessStructure, ValidationError};
use crate::domain::scenario::Scenario;
use crate::services::case_simulation::CaseRunner;
use crate::services::metrics::aggregate_metrics;
use crate::services::process_yaml::{ProcessYamlError, load_experiment_from_yaml_file};
use crate::services::scenario_modifier::apply_scenario;
use crate::services::simulation_types::{
    ScenarioLog, ScenarioReport, SimulationEvent, SimulationOutput,
};

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("failed to read process yaml: {0}")]
    ReadProcess(#[from] std::io::Error),
    #[error("failed to parse process yaml: {0}")]
    ParseProcess(#[from] ProcessYamlError),
    #[error("invalid process structure: {0}")]
    InvalidProcess(#[from] ValidationError),
    #[error("invalid start date: {0}")]
    InvalidStartDate(String),
    #[error("instance count must be greater than zero")]
    InvalidInstanceCount,
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),
}

pub fn simulate_from_yaml_file(
    path: &str,
    instances: usize,
    start_date: &str,
    include_events: bool,
) -> Result<SimulationOutput, SimulationError> {
    let experiment = load_experiment_from_yaml_file(path)?;
    let start_time = parse_start_time(start_date)?;
    let mut rng = rand::thread_rng();
    simulate_experiment_with_rng(
        &experiment.process,
        &experiment.scenarios,
        instances,
        start_date,
        start_time,
        include_events,
        &mut rng,
    )
}

/// Runs every scenario against the process and aggregates metrics per run.
/// An empty scenario list falls back to a single unmodified baseline. Event
/// logs are attached to the report only on request so large runs stay small
/// on the wire.
pub fn simulate_experiment_with_rng<R: Rng + ?Sized>(
    process: &ProcessStructure,
    scenarios: &[Scenario],
    instances: usize,
    start_date: &str,
    start_time: NaiveDateTime,
    include_events: bool,
    rng: &mut R,
) -> Result<SimulationOutput, SimulationError> {
    let baseline = [Scenario::baseline()];
    let selected: &[Scenario] = if scenarios.is_empty() {
        &baseline
    } else {
        scenarios
    };

    let mut reports = Vec::with_capacity(selected.len());
    for scenario in selected {
        let log = run_scenario_with_rng(process, scenario, instances, start_time, rng)?;
        let metrics = aggregate_metrics(&log, process);
        reports.push(ScenarioReport {
            scenario: scenario.name.clone(),
            description: scenario.description.clone(),
            instances,
            metrics,
            events: include_events.then_some(log.events),
        });
    }

    Ok(SimulationOutput {
        process: process.name.clone(),
        start_date: start_date.to_string(),
        reports,
    })
}

pub fn run_scenario(
    process: &ProcessStructure,
    scenario: &Scenario,
    instances: usize,
    start_time: NaiveDateTime,
) -> Result<ScenarioLog, SimulationError> {
    let mut rng = rand::thread_rng();
    run_scenario_with_rng(process, scenario, instances, start_time, &mut rng)
}

/// Simulates `instances` independent cases of one scenario from a fixed
/// calendar start time. Each case produces its own outcome which the driver
/// merges, so cases share no mutable state.
pub fn run_scenario_with_rng<R: Rng + ?Sized>(
    process: &ProcessStructure,
    scenario: &Scenario,
    instances: usize,
    start_time: NaiveDateTime,
    rng: &mut R,
) -> Result<ScenarioLog, SimulationError> {
    process.validate()?;
    if instances == 0 {
        return Err(SimulationError::InvalidInstanceCount);
    }

    let activities = apply_scenario(&process.activities, scenario);
    let runner = CaseRunner::new(&activities, &process.flows);
    let mut log = ScenarioLog::default();
    for case_id in 1..=instances {
        log.absorb(runner.run_case(case_id, start_time, rng));
    }
    Ok(log)
}

/// Diagnostic/export path: runs a single scenario and returns its full
/// event log, e.g. for a downstream tabular exporter.
pub fn export_event_log_from_yaml_file(
    path: &str,
    scenario_name: Option<&str>,
    instances: usize,
    start_date: &str,
) -> Result<Vec<SimulationEvent>, SimulationError> {
    let experiment = load_experiment_from_yaml_file(path)?;
    let start_time = parse_start_time(start_date)?;

    let scenario = match scenario_name {
        Some(name) => experiment
            .scenarios
            .iter()
            .find(|scenario| scenario.name == name)
            .cloned()
            .ok_or_else(|| SimulationError::UnknownScenario(name.to_string()))?,
        None => experiment
            .scenarios
            .first()
            .cloned()
            .unwrap_or_else(Scenario::baseline),
    };

    let log = run_scenario(&experiment.process, &scenario, instances, start_time)?;
    Ok(log.events)
}

fn parse_start_time(start_date: &str) -> Result<NaiveDateTime, SimulationError> {
    let date = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
        .map_err(|_| SimulationError::InvalidStartDate(start_date.to_string()))?;
    // Simulated business day starts at 08:00.
    Ok(date.and_hms_opt(8, 0, 0).unwrap())
}
