use chrono::Local;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate every scenario of a process and report metrics as YAML
    Simulate {
        /// Experiment YAML file (process, flows, resources, scenarios)
        #[arg(short, long)]
        input: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Number of case instances per scenario
        #[arg(short = 'n', long, default_value_t = 100)]
        instances: usize,
        /// Simulated calendar start date (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_start_date())]
        start_date: String,
        /// Include the full event log of each scenario in the report
        #[arg(long)]
        include_events: bool,
    },
    /// Export one scenario's full event log as JSON
    ExportEvents {
        /// Experiment YAML file
        #[arg(short, long)]
        input: String,
        /// Output JSON file
        #[arg(short, long)]
        output: String,
        /// Scenario name (defaults to the first scenario, or the baseline)
        #[arg(long)]
        scenario: Option<String>,
        /// Number of case instances
        #[arg(short = 'n', long, default_value_t = 100)]
        instances: usize,
        /// Simulated calendar start date (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_start_date())]
        start_date: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn default_start_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
