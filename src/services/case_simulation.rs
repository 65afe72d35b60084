use std::collections::{HashMap, VecDeque};

use chrono::{Duration, NaiveDateTime};
use rand::Rng;

use crate::domain::activity::{Activity, DurationRange};
use crate::domain::flow::Flow;
use crate::services::simulation_types::{CaseOutcome, EventPhase, SimulationEvent};

struct PendingItem<'a> {
    activity_id: &'a str,
    time: NaiveDateTime,
}

/// Replays single cases through a (possibly scenario-modified) activity set.
/// Activities live in an arena indexed by id; each case walks a FIFO work
/// queue with a per-case visited marker, so every activity fires at most
/// once per case and cyclic flows terminate after each node has been
/// attempted once.
pub struct CaseRunner<'a> {
    activities: &'a [Activity],
    index_by_id: HashMap<&'a str, usize>,
    outgoing: HashMap<&'a str, Vec<&'a Flow>>,
}

impl<'a> CaseRunner<'a> {
    pub fn new(activities: &'a [Activity], flows: &'a [Flow]) -> Self {
        let index_by_id = activities
            .iter()
            .enumerate()
            .map(|(index, activity)| (activity.id.as_str(), index))
            .collect();

        let mut outgoing: HashMap<&str, Vec<&Flow>> = HashMap::new();
        for flow in flows {
            outgoing.entry(flow.from.as_str()).or_default().push(flow);
        }

        Self {
            activities,
            index_by_id,
            outgoing,
        }
    }

    pub fn run_case<R: Rng + ?Sized>(
        &self,
        case_id: usize,
        start_time: NaiveDateTime,
        rng: &mut R,
    ) -> CaseOutcome {
        let mut outcome = CaseOutcome::default();
        let mut visited = vec![false; self.activities.len()];
        let mut queue = VecDeque::new();

        if let Some(entry) = self.activities.first() {
            queue.push_back(PendingItem {
                activity_id: entry.id.as_str(),
                time: start_time,
            });
        }

        while let Some(item) = queue.pop_front() {
            // Dangling references are tolerated: unknown ids are dropped.
            let Some(&index) = self.index_by_id.get(item.activity_id) else {
                continue;
            };
            if visited[index] {
                continue;
            }
            let activity = &self.activities[index];

            outcome.events.push(SimulationEvent {
                case_id,
                activity_id: activity.id.clone(),
                activity_name: activity.name.clone(),
                phase: EventPhase::Start,
                timestamp: item.time,
                performer: activity.performer.clone(),
                cost: 0.0,
                duration_minutes: None,
            });

            let duration = sample_duration(&activity.duration, rng);
            let completion = add_minutes(item.time, duration);
            outcome.events.push(SimulationEvent {
                case_id,
                activity_id: activity.id.clone(),
                activity_name: activity.name.clone(),
                phase: EventPhase::Complete,
                timestamp: completion,
                performer: activity.performer.clone(),
                cost: activity.cost,
                duration_minutes: Some(duration),
            });

            visited[index] = true;
            *outcome
                .busy_minutes
                .entry(activity.performer.clone())
                .or_insert(0.0) += duration;

            for flow in self.outgoing.get(item.activity_id).into_iter().flatten() {
                let fires =
                    flow.condition.is_none() || rng.gen_range(0.0..1.0f32) < flow.probability;
                if fires {
                    queue.push_back(PendingItem {
                        activity_id: flow.to.as_str(),
                        time: completion,
                    });
                }
            }
        }

        outcome
    }
}

fn sample_duration<R: Rng + ?Sized>(range: &DurationRange, rng: &mut R) -> f32 {
    if (range.max - range.min).abs() < f32::EPSILON {
        return range.min;
    }
    rng.gen_range(range.min..=range.max)
}

fn add_minutes(time: NaiveDateTime, minutes: f32) -> NaiveDateTime {
    time + Duration::seconds((minutes * 60.0).round() as i64)
}
