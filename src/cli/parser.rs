use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for guruhadir
#[derive(Parser)]
#[command(
    name = "guruhadir",
    version = env!("CARGO_PKG_VERSION"),
    about = "Teacher attendance CLI: check in/out, SPPD and leave reports, synced to the school sheet",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the remote endpoint for this run ("" = offline mode)
    #[arg(global = true, long = "endpoint", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Debug logging on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Only log errors
    #[arg(global = true, short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Fields shared by check-in and check-out.
#[derive(Args, Debug, Clone)]
pub struct AttendArgs {
    /// Full name (defaults to the saved profile)
    #[arg(long)]
    pub name: Option<String>,

    /// NIP / NUPTK (defaults to the saved profile)
    #[arg(long)]
    pub nip: Option<String>,

    #[arg(long = "lat", allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    #[arg(long = "lon", allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// Human-readable place name
    #[arg(long = "location")]
    pub location_name: Option<String>,

    /// Photo file to attach (compressed before saving)
    #[arg(long, value_name = "FILE")]
    pub photo: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
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

    /// Log in (offline demo password: 123456)
    Login { username: String, password: String },

    /// Close the session
    Logout,

    /// Absen datang
    Checkin(AttendArgs),

    /// Absen pulang
    Checkout(AttendArgs),

    /// File an SPPD (duty travel) report
    Sppd {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        nip: Option<String>,

        #[arg(long)]
        destination: String,

        /// Jenis kegiatan
        #[arg(long)]
        activity: String,

        /// Start date (YYYY-MM-DD, default today)
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD, default start)
        #[arg(long)]
        end: Option<String>,

        /// Laporan hasil kegiatan
        #[arg(long, default_value = "")]
        summary: String,

        /// Photo attachment, repeatable (max 4)
        #[arg(long = "attachment", value_name = "FILE")]
        attachments: Vec<String>,

        #[arg(long = "lat", allow_negative_numbers = true)]
        latitude: Option<f64>,

        #[arg(long = "lon", allow_negative_numbers = true)]
        longitude: Option<f64>,
    },

    /// File a leave (ijin) or sick (sakit) report
    Leave {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        nip: Option<String>,

        /// ijin | sakit
        #[arg(long = "kind", default_value = "ijin")]
        kind: String,

        #[arg(long)]
        reason: String,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,

        /// Supporting photo or doctor's note
        #[arg(long, value_name = "FILE")]
        photo: Option<String>,
    },

    /// List local history, newest first
    History {
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Only one record type (DATANG, PULANG, SPPD, IJIN)
        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(long, help = "Show every field of each record")]
        details: bool,
    },

    /// Today's check-in status
    Status,

    /// School-wide attendance for today, from the server
    Recap,

    /// Show or set the remote endpoint
    Endpoint { url: Option<String> },

    /// Show the saved profile
    Profile,

    /// Delete all local records, profile and endpoint
    Reset {
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export local history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "type")]
        kind: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
