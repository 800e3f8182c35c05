use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchcard
/// CLI application to analyze a CSV timesheet of clock in/out times
#[derive(Parser)]
#[command(
    name = "punchcard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Tidy a CSV timesheet into per-day event indicators and time-of-day statistics",
    long_about = None
)]
pub struct Cli {
    /// Override the configured input file path
    #[arg(global = true, long = "input", short = 'i')]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full report: tidy table plus overall and per-event statistics
    Report,

    /// Print the tidy per-day table
    Tidy,

    /// Print the long per-(day, event) table
    Events,

    /// Print time-of-day statistics
    Summary {
        /// Group statistics by event category
        #[arg(long = "by-event", help = "Group statistics by event category")]
        by_event: bool,
    },

    /// Parse and validate the input file without printing tables
    Check,

    /// Export the tidy table for downstream plotting tools
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Export the long per-(day, event) form instead of the wide table
        #[arg(long, help = "Export the long per-(day, event) form")]
        long: bool,

        /// Overwrite the output file if it already exists
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file
    Config {
        /// Print the effective configuration
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },
}
