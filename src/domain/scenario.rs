use std::collections::HashMap;

use crate::domain::activity::DurationRange;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityOverride {
    pub duration: Option<DurationRange>,
    pub cost: Option<f32>,
    pub resource_units: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceOverride {
    pub capacity: Option<f32>,
    pub hourly_rate: Option<f32>,
}

/// Named bundle of parameter overrides applied to a process before a run.
/// Resource overrides are accepted in the input shape but are not consumed
/// by the simulator; only activity overrides take effect.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    pub activity_overrides: HashMap<String, ActivityOverride>,
    pub resource_overrides: HashMap<String, ResourceOverride>,
}

impl Scenario {
    pub fn baseline() -> Self {
        Self {
            name: "Baseline".to_string(),
            ..Self::default()
        }
    }
}
