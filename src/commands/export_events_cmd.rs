use crate::commands::base_commands::Commands;
use crate::services::simulation::export_event_log_from_yaml_file;

pub fn export_events_command(cmd: Commands) {
    if let Commands::ExportEvents {
        input,
        output,
        scenario,
        instances,
        start_date,
    } = cmd
    {
        let events = match export_event_log_from_yaml_file(
            &input,
            scenario.as_deref(),
            instances,
            &start_date,
        ) {
            Ok(events) => events,
            Err(e) => {
                eprintln!("Failed to export event log: {e}");
                return;
            }
        };

        let json = match serde_json::to_string_pretty(&events) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize event log: {e}");
                return;
            }
        };

        if let Err(e) = std::fs::write(&output, json) {
            eprintln!("Failed to write event log: {e}");
        } else {
            println!("{} events written to {output}", events.len());
        }
    }
}
