use crate::commands::base_commands::Commands;
use crate::services::simulation::simulate_from_yaml_file;

pub fn simulate_command(cmd: Commands) {
    if let Commands::Simulate {
        input,
        output,
        instances,
        start_date,
        include_events,
    } = cmd
    {
        let result =
            match simulate_from_yaml_file(&input, instances, &start_date, include_events) {
                Ok(result) => result,
                Err(e) => {
                    eprintln!("Failed to simulate process: {e}");
                    return;
                }
            };

        let yaml = match serde_yaml::to_string(&result) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize simulation report: {e}");
                return;
            }
        };

        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write simulation report: {e}");
        } else {
            println!("Simulation report written to {output}");
        }
    }
}
