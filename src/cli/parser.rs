use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeclock
/// Employee time clock backed by SQLite
#[derive(Parser)]
#[command(
    name = "rtimeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employee time clock: clock in/out, today's status and weekly hour totals",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Employee to act as (defaults to `employee` in the configuration)
    #[arg(global = true, long = "employee", short = 'e')]
    pub employee: Option<String>,

    /// Pretend the current time is this instant (RFC 3339 or "YYYY-MM-DD HH:MM", UTC)
    #[arg(global = true, long = "at")]
    pub at: Option<String>,

    /// Use a throwaway in-memory store instead of the database
    #[arg(global = true, long = "memory")]
    pub memory: bool,

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
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Clock in: open today's session
    In,

    /// Clock out: close today's open session
    Out,

    /// Show today's entry and this week's total
    Status,

    /// Weekly hours (Sunday to Saturday) with per-day totals
    Week {
        /// Any date inside the week (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// List time entries
    List {
        #[arg(long, short, help = "Filter by YYYY, YYYY-MM, YYYY-MM-DD or A:B")]
        period: Option<String>,

        #[arg(
            long,
            num_args = 0..=1,
            value_name = "N",
            conflicts_with = "period",
            help = "Show only the N most recent entries (default: recent_limit from config)"
        )]
        recent: Option<Option<usize>>,
    },

    /// Correct a recorded entry
    Edit {
        #[arg(long)]
        id: i64,

        #[arg(long, help = "New calendar date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "in", help = "New clock-in timestamp")]
        start: Option<String>,

        #[arg(long = "out", help = "New clock-out timestamp")]
        end: Option<String>,

        #[arg(long, conflicts_with = "end", help = "Remove the clock-out and reopen the entry")]
        reopen: bool,
    },

    /// Delete a time entry by id
    Del {
        #[arg(long)]
        id: i64,

        #[arg(long, short, help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Manage employee profiles
    Employee {
        #[command(subcommand)]
        action: EmployeeCommand,
    },

    /// Export time entries of the employee
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_name = "RANGE", help = "YYYY, YYYY-MM, YYYY-MM-DD or A:B")]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeCommand {
    /// Create a profile
    Add {
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        department: String,

        #[arg(long, default_value = "")]
        position: String,

        #[arg(long = "start-date", help = "YYYY-MM-DD")]
        start_date: Option<String>,
    },

    /// Show a profile (defaults to the current employee)
    Show { id: Option<String> },

    /// List all profiles
    List,

    /// Update fields of a profile
    Update {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        department: Option<String>,

        #[arg(long)]
        position: Option<String>,

        #[arg(long = "start-date", help = "YYYY-MM-DD")]
        start_date: Option<String>,
    },
}
