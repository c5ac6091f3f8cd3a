//! Clap derive structures for the `pgdesk` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// pgdesk -- admin console for PG (shared housing) operations
#[derive(Debug, Parser)]
#[command(
    name = "pgdesk",
    version,
    about = "Manage rooms, tenants, tickets, and notices from the command line",
    long_about = "Admin console for PG (paying-guest / shared housing) operators.\n\n\
        Talks to the operations gateway; sign in once with `pgdesk auth login`\n\
        and the session persists across invocations.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Gateway profile to use
    #[arg(long, short = 'p', env = "PGDESK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Gateway URL (overrides profile)
    #[arg(long, short = 'g', env = "PGDESK_GATEWAY", global = true)]
    pub gateway: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "PGDESK_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "PGDESK_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "PGDESK_TIMEOUT", default_value = "30", global = true)]
    pub timeout: u64,

    /// Store the session token in a plaintext file instead of the keyring
    #[arg(long, env = "PGDESK_NO_KEYRING", global = true)]
    pub no_keyring: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in, sign out, register
    Auth(AuthArgs),

    /// Manage rooms and occupancy
    #[command(alias = "room", alias = "r")]
    Rooms(RoomsArgs),

    /// Manage tenants
    #[command(alias = "tenant", alias = "t")]
    Tenants(TenantsArgs),

    /// Manage maintenance tickets
    #[command(alias = "ticket")]
    Tickets(TicketsArgs),

    /// Manage notices
    #[command(alias = "notice")]
    Notices(NoticesArgs),

    /// Manage configuration profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Auth ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Sign in (prompts for the password when not piped)
    Login {
        /// Account email
        #[arg(long, env = "PGDESK_EMAIL")]
        email: Option<String>,
    },

    /// Sign out and discard the stored session token
    Logout,

    /// Register a new operator account
    Register {
        /// Full name
        #[arg(long)]
        name: String,

        /// Account email
        #[arg(long)]
        email: String,

        /// Contact phone
        #[arg(long)]
        phone: String,
    },

    /// Show whether a session token is held
    Status,
}

// ── Rooms ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct RoomsArgs {
    #[command(subcommand)]
    pub command: RoomsCommand,
}

#[derive(Debug, Subcommand)]
pub enum RoomsCommand {
    /// List rooms
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get room details
    Get {
        /// Room id
        id: i64,
    },

    /// Add a room
    Create {
        /// Room name (e.g. "A-101")
        #[arg(long)]
        name: String,

        /// Sharing type (e.g. "2-sharing")
        #[arg(long = "type")]
        sharing_type: String,

        /// Bed capacity
        #[arg(long)]
        capacity: u32,

        /// Beds currently occupied
        #[arg(long, default_value = "0")]
        occupied: u32,

        /// Monthly price per bed
        #[arg(long)]
        price: f64,
    },

    /// Update a room
    Update {
        /// Room id
        id: i64,

        #[arg(long)]
        name: String,

        #[arg(long = "type")]
        sharing_type: String,

        #[arg(long)]
        capacity: u32,

        #[arg(long)]
        occupied: u32,

        #[arg(long)]
        price: f64,
    },

    /// Allocate one bed (server-side occupancy increment)
    Allocate {
        /// Room id
        id: i64,
    },

    /// Delete a room
    #[command(alias = "rm")]
    Delete {
        /// Room id
        id: i64,
    },
}

// ── Tenants ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct TenantsArgs {
    #[command(subcommand)]
    pub command: TenantsCommand,
}

#[derive(Debug, Subcommand)]
pub enum TenantsCommand {
    /// List tenants
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get tenant details
    Get {
        /// Tenant record id
        id: i64,
    },

    /// Add a tenant
    Create {
        /// Business id (generated when omitted)
        #[arg(long)]
        tenant_id: Option<String>,

        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        /// Assigned room name
        #[arg(long)]
        room: String,

        /// Check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: chrono::NaiveDate,

        /// Outstanding due amount
        #[arg(long, default_value = "0")]
        due: f64,
    },

    /// Update a tenant
    Update {
        /// Tenant record id
        id: i64,

        #[arg(long)]
        tenant_id: Option<String>,

        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        room: String,

        #[arg(long)]
        check_in: chrono::NaiveDate,

        #[arg(long, default_value = "0")]
        due: f64,
    },

    /// Delete a tenant
    #[command(alias = "rm")]
    Delete {
        /// Tenant record id
        id: i64,
    },

    /// Export tenants as CSV
    Export {
        /// Server-side filter
        #[arg(long)]
        filter: Option<String>,

        /// Output file (stdout when omitted)
        #[arg(long, short = 'f')]
        file: Option<std::path::PathBuf>,
    },
}

// ── Tickets ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct TicketsArgs {
    #[command(subcommand)]
    pub command: TicketsCommand,
}

#[derive(Debug, Subcommand)]
pub enum TicketsCommand {
    /// List maintenance tickets
    #[command(alias = "ls")]
    List(ListArgs),

    /// Get ticket details
    Get {
        /// Ticket record id
        id: i64,
    },

    /// Raise a ticket
    Create {
        #[arg(long)]
        title: String,

        /// Affected room name
        #[arg(long)]
        room: String,

        /// low, medium, or high
        #[arg(long, default_value = "low")]
        priority: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Move a ticket to a new status
    SetStatus {
        /// Ticket record id
        id: i64,

        /// open, in-progress, or closed
        status: String,
    },

    /// Delete a ticket
    #[command(alias = "rm")]
    Delete {
        /// Ticket record id
        id: i64,
    },
}

// ── Notices ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct NoticesArgs {
    #[command(subcommand)]
    pub command: NoticesCommand,
}

#[derive(Debug, Subcommand)]
pub enum NoticesCommand {
    /// List notices
    #[command(alias = "ls")]
    List,

    /// Post a notice
    Create {
        /// Notice text
        title: String,
    },

    /// Reword an existing notice
    Update {
        /// Notice id
        id: String,

        /// New notice text
        title: String,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file path
    Path,

    /// Show the effective configuration
    Show,

    /// Create or update a profile
    SetProfile {
        /// Profile name
        name: String,

        /// Gateway base URL
        #[arg(long)]
        gateway: String,

        /// Make this the default profile
        #[arg(long)]
        default: bool,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

// ── Shared list flags ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Server-side filter passed through as the `q` query parameter
    #[arg(long, short = 'f')]
    pub filter: Option<String>,
}
