use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tyme
/// CLI application to track employee work hours
#[derive(Parser)]
#[command(
    name = "tyme",
    version = env!("CARGO_PKG_VERSION"),
    about = "Tyme - Work Hours: track employee clock-in/clock-out entries and total worked time",
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

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Add a new entry (New_Employee, 00:00-00:00 unless overridden)
    Add {
        /// Employee name for the new entry
        #[arg(long = "employee", short = 'e')]
        employee: Option<String>,
        /// In time (HH:MM)
        #[arg(long = "in")]
        in_time: Option<String>,
        /// Out time (HH:MM)
        #[arg(long = "out")]
        out_time: Option<String>,
    },

    /// Edit one field of an entry; the total is recomputed
    Edit {
        /// Entry id
        id: u32,
        /// Field: employee, inTime (in) or outTime (out)
        field: String,
        /// New value (HH:MM for times)
        value: String,
    },

    /// Delete an entry by id
    Del {
        /// Entry id
        id: u32,
        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// List all entries with the total work hours
    List,

    /// Print only the total work hours (H:MM)
    Total,

    /// Print the internal log table
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export all entries to a file
    Export {
        /// Output format
        #[arg(long, value_enum)]
        format: ExportFormat,

        /// Destination file
        #[arg(long)]
        file: String,

        /// Overwrite without asking
        #[arg(long)]
        force: bool,
    },
}
