pub mod base_commands;
pub mod export_events_cmd;
pub mod simulate_cmd;
