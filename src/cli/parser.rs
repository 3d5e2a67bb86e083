use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rPunchclock
#[derive(Parser)]
#[command(
    name = "rpunchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A tiny punch clock: record check-ins and check-outs in a local SQLite ledger",
    long_about = None
)]
pub struct Cli {
    /// Override the snapshot directory (useful for tests or a portable ledger)
    #[arg(global = true, long = "store", value_name = "DIR")]
    pub store: Option<String>,

    /// Override the snapshot key
    #[arg(global = true, long = "key", value_name = "KEY")]
    pub key: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the snapshot directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Inspect the ledger snapshot
    Db {
        #[arg(long = "info", help = "Show snapshot information")]
        info: bool,

        #[arg(long = "check", help = "Check ledger integrity")]
        check: bool,
    },

    /// Record a check-in
    In {
        /// Who is checking in (defaults to `default_actor` from the config)
        actor: Option<String>,

        #[arg(long = "at", value_name = "TIMESTAMP", help = "Store this timestamp verbatim instead of now")]
        at: Option<String>,
    },

    /// Record a check-out
    Out {
        /// Who is checking out (defaults to `default_actor` from the config)
        actor: Option<String>,

        #[arg(long = "at", value_name = "TIMESTAMP", help = "Store this timestamp verbatim instead of now")]
        at: Option<String>,
    },

    /// List every recorded event
    List {
        #[arg(long = "actor", help = "Only show events for this actor")]
        actor: Option<String>,

        #[arg(long = "json", help = "Print records as JSON")]
        json: bool,
    },

    /// Write the current snapshot to a file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export the ledger
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "actor", help = "Only export events for this actor")]
        actor: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
