pub mod case_simulation;
pub mod metrics;
pub mod process_yaml;
pub mod scenario_modifier;
pub mod simulation;
pub mod simulation_types;
