use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::activity::{Activity, ActivityKind, DurationRange};
use crate::domain::flow::Flow;
use crate::domain::process::ProcessStructure;
use crate::services::simulation_types::{EventPhase, SimulationEvent};

pub fn build_activity(id: &str, min: f32, max: f32, cost: f32) -> Activity {
    Activity {
        id: id.to_string(),
        name: id.to_string(),
        kind: ActivityKind::Task,
        performer: "unassigned".to_string(),
        duration: DurationRange::minutes(min, max),
        cost,
        resource_units: 1.0,
        weight: 1.0,
    }
}

pub fn build_process(activities: Vec<Activity>, flows: Vec<Flow>) -> ProcessStructure {
    ProcessStructure {
        name: "Test process".to_string(),
        activities,
        flows,
        resources: Vec::new(),
    }
}

pub fn conditional_flow(from: &str, to: &str, condition: Option<&str>, probability: f32) -> Flow {
    Flow {
        from: from.to_string(),
        to: to.to_string(),
        condition: condition.map(str::to_string),
        probability,
    }
}

pub fn case_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 5)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

pub fn start_event(case_id: usize, id: &str, name: &str, timestamp: NaiveDateTime) -> SimulationEvent {
    SimulationEvent {
        case_id,
        activity_id: id.to_string(),
        activity_name: name.to_string(),
        phase: EventPhase::Start,
        timestamp,
        performer: "unassigned".to_string(),
        cost: 0.0,
        duration_minutes: None,
    }
}

pub fn complete_event(
    case_id: usize,
    id: &str,
    name: &str,
    timestamp: NaiveDateTime,
    cost: f32,
    duration: f32,
) -> SimulationEvent {
    SimulationEvent {
        case_id,
        activity_id: id.to_string(),
        activity_name: name.to_string(),
        phase: EventPhase::Complete,
        timestamp,
        performer: "unassigned".to_string(),
        cost,
        duration_minutes: Some(duration),
    }
}
