use crate::domain::process::ProcessStructure;
use crate::domain::scenario::Scenario;

/// One simulation request: a process plus the scenarios to run against it.
#[derive(Debug, Clone, PartialEq)]
pub struct Experiment {
    pub process: ProcessStructure,
    pub scenarios: Vec<Scenario>,
}
