use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worklog
/// CLI application to log working hours against a spreadsheet-style table
#[derive(Parser)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work-hours logging CLI: log shifts and track progress toward a target using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Log a work entry: compute net duration, append it, report totals
    Log {
        /// Date of the entry (YYYY-MM-DD, defaults to today)
        date: Option<String>,

        /// Shift start time (HH:MM)
        #[arg(long = "start", default_value = "09:00")]
        start: String,

        /// Shift end time (HH:MM)
        #[arg(long = "end", default_value = "16:00")]
        end: String,

        /// Break start time (HH:MM)
        #[arg(long = "break-start", default_value = "00:00")]
        break_start: String,

        /// Break end time (HH:MM)
        #[arg(long = "break-end", default_value = "00:00")]
        break_end: String,
    },

    /// Rewrite the entries of a date with new times and a recomputed duration
    Edit {
        /// Date of the entries to rewrite (YYYY-MM-DD)
        date: String,

        /// New shift start time (HH:MM, keeps the current value if omitted)
        #[arg(long = "start")]
        start: Option<String>,

        /// New shift end time (HH:MM)
        #[arg(long = "end")]
        end: Option<String>,

        /// New break start time (HH:MM)
        #[arg(long = "break-start")]
        break_start: Option<String>,

        /// New break end time (HH:MM)
        #[arg(long = "break-end")]
        break_end: Option<String>,
    },

    /// List logged entries, newest first
    List {
        #[arg(long, short, help = "Restrict to the current pay period")]
        period: bool,
    },

    /// Show total logged hours and remaining hours to target
    Summary {
        #[arg(long, short, help = "Restrict to the current pay period")]
        period: bool,

        #[arg(
            long = "all-periods",
            help = "Also show totals and overtime for every completed pay period"
        )]
        all_periods: bool,
    },

    /// Delete all entries for a date
    Del {
        date: String,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Export logged entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// Print the internal audit log
    History,
}
