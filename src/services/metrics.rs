use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDateTime;

use crate::domain::process::ProcessStructure;
use crate::services::simulation_types::{
    CostStats, EventPhase, PerformanceMetrics, ScenarioLog, SimulationEvent, ThroughputStats,
};

#[derive(Debug, Default)]
struct CaseSpan {
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    cost: f32,
}

/// Reduces one scenario's event log to performance statistics. Pure
/// function over the log; recomputed on every call.
pub fn aggregate_metrics(log: &ScenarioLog, process: &ProcessStructure) -> PerformanceMetrics {
    let spans = reconstruct_cases(&log.events);
    let completed: Vec<&CaseSpan> = spans
        .values()
        .filter(|span| span.start.is_some() && span.end.is_some())
        .collect();

    if completed.is_empty() {
        return PerformanceMetrics::empty();
    }

    let mut durations_hours: Vec<f32> = completed
        .iter()
        .map(|span| {
            let start = span.start.unwrap();
            let end = span.end.unwrap();
            (end - start).num_seconds() as f32 / 3600.0
        })
        .collect();
    durations_hours.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let total_cost: f32 = completed.iter().map(|span| span.cost).sum();
    let count = completed.len();

    PerformanceMetrics {
        cases_completed: count,
        throughput: ThroughputStats {
            average_hours: durations_hours.iter().sum::<f32>() / count as f32,
            min_hours: durations_hours[0],
            max_hours: durations_hours[count - 1],
            median_hours: median(&durations_hours),
        },
        cost: CostStats {
            average: total_cost / count as f32,
            total: total_cost,
        },
        waiting_minutes: average_waiting_minutes(&log.events),
        utilization_percent: utilization_percent(&log.busy_minutes, process, count),
    }
}

fn reconstruct_cases(events: &[SimulationEvent]) -> HashMap<usize, CaseSpan> {
    let mut spans: HashMap<usize, CaseSpan> = HashMap::new();
    for event in events {
        let span = spans.entry(event.case_id).or_default();
        match event.phase {
            EventPhase::Start => {
                if span.start.is_none_or(|start| event.timestamp < start) {
                    span.start = Some(event.timestamp);
                }
            }
            EventPhase::Complete => {
                if span.end.is_none_or(|end| event.timestamp > end) {
                    span.end = Some(event.timestamp);
                }
                span.cost += event.cost;
            }
        }
    }
    spans
}

/// Median of a sorted sequence; an even length averages the two middle
/// elements.
fn median(sorted: &[f32]) -> f32 {
    let len = sorted.len();
    if len == 0 {
        return 0.0;
    }
    if len % 2 == 1 {
        sorted[len / 2]
    } else {
        (sorted[len / 2 - 1] + sorted[len / 2]) / 2.0
    }
}

/// Gap between a case's most recent completion and the next start it
/// encounters, bucketed by activity name. Linear flows record zeros;
/// non-zero waits only arise from interleavings across concurrently
/// enqueued branches.
fn average_waiting_minutes(events: &[SimulationEvent]) -> BTreeMap<String, f32> {
    let mut ordered: Vec<&SimulationEvent> = events.iter().collect();
    ordered.sort_by_key(|event| event.timestamp);

    let mut last_complete: HashMap<usize, NaiveDateTime> = HashMap::new();
    let mut waits: BTreeMap<String, Vec<f32>> = BTreeMap::new();
    for event in ordered {
        match event.phase {
            EventPhase::Start => {
                if let Some(prior) = last_complete.get(&event.case_id) {
                    let minutes = (event.timestamp - *prior).num_seconds() as f32 / 60.0;
                    waits
                        .entry(event.activity_name.clone())
                        .or_default()
                        .push(minutes);
                }
            }
            EventPhase::Complete => {
                last_complete.insert(event.case_id, event.timestamp);
            }
        }
    }

    waits
        .into_iter()
        .map(|(name, values)| {
            let average = values.iter().sum::<f32>() / values.len() as f32;
            (name, average)
        })
        .collect()
}

/// Busy minutes over a business-day-equivalent capacity heuristic:
/// `(8h x 60) x (completed / 5) x capacity`. Undeclared performer roles
/// count as capacity 1. Declared roles with no recorded work report 0%.
fn utilization_percent(
    busy_minutes: &HashMap<String, f32>,
    process: &ProcessStructure,
    completed_cases: usize,
) -> BTreeMap<String, f32> {
    let mut utilization: BTreeMap<String, f32> = process
        .resources
        .iter()
        .map(|resource| (resource.role.clone(), 0.0))
        .collect();

    for (role, minutes) in busy_minutes {
        let capacity = process
            .resource(role)
            .map(|resource| resource.capacity)
            .unwrap_or(1.0);
        let denominator = 8.0 * 60.0 * (completed_cases as f32 / 5.0) * capacity;
        let percent = if denominator > 0.0 {
            minutes / denominator * 100.0
        } else {
            0.0
        };
        utilization.insert(role.clone(), percent);
    }

    utilization
}
