use clap::{Parser, Subcommand};

/// Command-line interface definition for quelio
/// Weekly effective and paid work time from badge punches
#[derive(Parser)]
#[command(
    name = "quelio",
    version = env!("CARGO_PKG_VERSION"),
    about = "Weekly work time from your badge punches: effective, paid (with break bonuses) and remaining",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Read badge data from a saved JSON payload instead of calling the API
    #[arg(global = true, long = "from-file", value_name = "FILE")]
    pub from_file: Option<String>,

    /// Fixed reference time "YYYY-MM-DD HH:MM" (reproducible output)
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    /// Disable ANSI colors
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Defaults to `dashboard`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure the API access and test the connection
    Setup,

    /// Delete the stored configuration
    Logout,

    /// Non-interactive weekly recap in plain text
    Status {
        /// Print the recap as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Weekly dashboard with day timelines (default)
    #[command(visible_aliases = ["ui", "tui"])]
    Dashboard {
        /// Keep repainting the dashboard until interrupted
        #[arg(long = "watch", short = 'w')]
        watch: bool,

        /// Seconds between two repaints (with --watch)
        #[arg(long = "interval", default_value_t = 1)]
        interval: u64,

        /// Seconds between two fetches of the badge data (with --watch)
        #[arg(long = "refresh", default_value_t = 300)]
        refresh: u64,

        /// Show in/out pairs for every day
        #[arg(long = "details", short = 'd')]
        details: bool,
    },

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
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}

impl Commands {
    /// The command run when none is given.
    pub fn default_dashboard() -> Self {
        Commands::Dashboard {
            watch: false,
            interval: 1,
            refresh: 300,
            details: false,
        }
    }
}
