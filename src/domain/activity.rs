#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Task,
    Decision,
    Parallel,
    Approval,
}

/// Execution time bounds in `unit` (arithmetic downstream assumes minutes).
#[derive(Debug, Clone, PartialEq)]
pub struct DurationRange {
    pub min: f32,
    pub max: f32,
    pub unit: String,
}

impl DurationRange {
    pub fn minutes(min: f32, max: f32) -> Self {
        Self {
            min,
            max,
            unit: "minutes".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub kind: ActivityKind,
    pub performer: String,
    pub duration: DurationRange,
    pub cost: f32,
    pub resource_units: f32,
    /// Legacy informational weight. The simulator never reads it; flow
    /// gating uses `Flow::probability` instead.
    pub weight: f32,
}
