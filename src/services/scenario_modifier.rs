use crate::domain::activity::Activity;
use crate::domain::scenario::Scenario;

/// Produces the effective activity list for a scenario. Activities with a
/// matching override are copied with the overridden fields replaced and the
/// rest inherited; all other activities pass through unchanged. Overrides
/// referencing unknown ids are ignored. Input ordering is preserved.
pub fn apply_scenario(activities: &[Activity], scenario: &Scenario) -> Vec<Activity> {
    activities
        .iter()
        .map(|activity| match scenario.activity_overrides.get(&activity.id) {
            Some(overrides) => {
                let mut modified = activity.clone();
                if let Some(duration) = &overrides.duration {
                    modified.duration = duration.clone();
                }
                if let Some(cost) = overrides.cost {
                    modified.cost = cost;
                }
                if let Some(resource_units) = overrides.resource_units {
                    modified.resource_units = resource_units;
                }
                modified
            }
            None => activity.clone(),
        })
        .collect()
}
