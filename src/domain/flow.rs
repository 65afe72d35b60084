/// Directed edge between two activities, referenced by id. Endpoints are
/// not required to resolve; unresolved targets are skipped at simulation
/// time. The `condition` label is never evaluated: a flow without one is
/// always traversed, a flow with one is gated by an independent Bernoulli
/// draw against `probability`.
#[derive(Debug, Clone, PartialEq)]
pub struct Flow {
    pub from: String,
    pub to: String,
    pub condition: Option<String>,
    pub probability: f32,
}

impl Flow {
    pub fn unconditional(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            condition: None,
            probability: 1.0,
        }
    }
}
