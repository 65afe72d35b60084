use std::collections::HashSet;

use thiserror::Error;

use crate::domain::activity::Activity;
use crate::domain::flow::Flow;
use crate::domain::resource::Resource;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("process has no activities")]
    EmptyActivities,
    #[error("duplicate activity id: {0}")]
    DuplicateActivityId(String),
    #[error("invalid duration range for activity {0}")]
    InvalidDurationRange(String),
    #[error("invalid probability {probability} on flow {from} -> {to}")]
    InvalidFlowProbability {
        from: String,
        to: String,
        probability: f32,
    },
    #[error("duplicate resource role: {0}")]
    DuplicateResourceRole(String),
}

/// Immutable description of a process. The first activity is the entry
/// point of every simulated case. Flow endpoints may dangle; they are
/// resolved (and skipped when absent) during traversal, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessStructure {
    pub name: String,
    pub activities: Vec<Activity>,
    pub flows: Vec<Flow>,
    pub resources: Vec<Resource>,
}

impl ProcessStructure {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.activities.is_empty() {
            return Err(ValidationError::EmptyActivities);
        }

        let mut ids = HashSet::new();
        for activity in &self.activities {
            if !ids.insert(activity.id.as_str()) {
                return Err(ValidationError::DuplicateActivityId(activity.id.clone()));
            }
            let range = &activity.duration;
            if range.min < 0.0 || range.max < 0.0 || range.min > range.max {
                return Err(ValidationError::InvalidDurationRange(activity.id.clone()));
            }
        }

        for flow in &self.flows {
            if flow.probability <= 0.0 || flow.probability > 1.0 {
                return Err(ValidationError::InvalidFlowProbability {
                    from: flow.from.clone(),
                    to: flow.to.clone(),
                    probability: flow.probability,
                });
            }
        }

        let mut roles = HashSet::new();
        for resource in &self.resources {
            if !roles.insert(resource.role.as_str()) {
                return Err(ValidationError::DuplicateResourceRole(resource.role.clone()));
            }
        }

        Ok(())
    }

    pub fn resource(&self, role: &str) -> Option<&Resource> {
        self.resources.iter().find(|resource| resource.role == role)
    }
}
