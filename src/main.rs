mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use clap::{CommandFactory, Parser};

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::export_events_cmd::export_events_command;
use crate::commands::simulate_cmd::simulate_command;

fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Simulate { .. } => simulate_command(cmd),
        cmd @ Commands::ExportEvents { .. } => export_events_command(cmd),
        Commands::Completions { shell } => {
            let mut cmd = CliArgs::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
    }
}
