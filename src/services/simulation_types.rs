use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventPhase {
    Start,
    Complete,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimulationEvent {
    pub case_id: usize,
    pub activity_id: String,
    pub activity_name: String,
    pub phase: EventPhase,
    pub timestamp: NaiveDateTime,
    pub performer: String,
    pub cost: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<f32>,
}

/// Events and per-role busy minutes produced by a single case.
#[derive(Debug, Clone, Default)]
pub struct CaseOutcome {
    pub events: Vec<SimulationEvent>,
    pub busy_minutes: HashMap<String, f32>,
}

/// Accumulated output of one scenario run: the event log in emission order
/// plus total busy minutes per performer role. Busy minutes are a
/// bookkeeping sum of sampled durations, not a contention model.
#[derive(Debug, Clone, Default)]
pub struct ScenarioLog {
    pub events: Vec<SimulationEvent>,
    pub busy_minutes: HashMap<String, f32>,
}

impl ScenarioLog {
    pub fn absorb(&mut self, outcome: CaseOutcome) {
        self.events.extend(outcome.events);
        for (role, minutes) in outcome.busy_minutes {
            *self.busy_minutes.entry(role).or_insert(0.0) += minutes;
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ThroughputStats {
    pub average_hours: f32,
    pub min_hours: f32,
    pub max_hours: f32,
    pub median_hours: f32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CostStats {
    pub average: f32,
    pub total: f32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PerformanceMetrics {
    pub cases_completed: usize,
    pub throughput: ThroughputStats,
    pub cost: CostStats,
    pub waiting_minutes: BTreeMap<String, f32>,
    pub utilization_percent: BTreeMap<String, f32>,
}

impl PerformanceMetrics {
    /// Well-defined record for a log with no completed cases.
    pub fn empty() -> Self {
        Self {
            cases_completed: 0,
            throughput: ThroughputStats {
                average_hours: 0.0,
                min_hours: 0.0,
                max_hours: 0.0,
                median_hours: 0.0,
            },
            cost: CostStats {
                average: 0.0,
                total: 0.0,
            },
            waiting_minutes: BTreeMap::new(),
            utilization_percent: BTreeMap::new(),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct ScenarioReport {
    pub scenario: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub instances: usize,
    pub metrics: PerformanceMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<SimulationEvent>>,
}

#[derive(Serialize, Debug, Clone)]
pub struct SimulationOutput {
    pub process: String,
    pub start_date: String,
    pub reports: Vec<ScenarioReport>,
}
