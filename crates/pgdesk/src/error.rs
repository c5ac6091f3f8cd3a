//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use pgdesk_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the gateway: {message}")]
    #[diagnostic(
        code(pgdesk::connection_failed),
        help(
            "Check that the gateway is running and accessible.\n\
             Try: pgdesk rooms list -g http://localhost:8086"
        )
    )]
    ConnectionFailed { message: String },

    // ── Authentication ───────────────────────────────────────────────

    #[error("Not signed in, or the session has expired")]
    #[diagnostic(
        code(pgdesk::auth_required),
        help("Sign in with: pgdesk auth login")
    )]
    AuthRequired,

    #[error("Authentication failed: {message}")]
    #[diagnostic(code(pgdesk::auth_failed), help("Verify the email and password."))]
    AuthFailed { message: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(pgdesk::not_found),
        help("Run: pgdesk {list_command} to see available entries")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── Gateway ──────────────────────────────────────────────────────

    #[error("Gateway error: {message}")]
    #[diagnostic(code(pgdesk::gateway_error))]
    Gateway { message: String },

    // ── Input ────────────────────────────────────────────────────────

    #[error("Invalid {field}: {reason}")]
    #[diagnostic(code(pgdesk::validation))]
    Validation { field: String, reason: String },

    #[error("Nothing to do: {reason}")]
    #[diagnostic(code(pgdesk::rejected))]
    Rejected { reason: String },

    // ── Config ───────────────────────────────────────────────────────

    #[error("Config error: {0}")]
    #[diagnostic(code(pgdesk::config))]
    Config(#[from] pgdesk_config::ConfigError),

    // ── IO ───────────────────────────────────────────────────────────

    #[error("IO error: {0}")]
    #[diagnostic(code(pgdesk::io))]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthRequired | Self::AuthFailed { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::Rejected { .. } => exit_code::USAGE,
            Self::Gateway { .. } | Self::Config(_) | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            // Outside of `auth login`, a 401 means the stored session
            // is gone; the login handler maps this variant itself.
            CoreError::AuthenticationFailed { .. } => Self::AuthRequired,
            CoreError::NotFound { entity, identifier } => Self::NotFound {
                list_command: format!("{entity}s list"),
                resource_type: entity,
                identifier,
            },
            CoreError::Api { message, .. } | CoreError::OperationFailed { message } => {
                Self::Gateway { message }
            }
            CoreError::Config { message } => Self::Validation {
                field: "gateway".into(),
                reason: message,
            },
            CoreError::Connection { message } => Self::ConnectionFailed { message },
            CoreError::Credentials(e) => Self::Gateway {
                message: e.to_string(),
            },
        }
    }
}
