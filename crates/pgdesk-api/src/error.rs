use thiserror::Error;

/// Top-level error type for the `pgdesk-api` crate.
///
/// Covers every failure mode across the five gateway clients:
/// transport, server-reported errors, and payload decoding.
/// `pgdesk-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Server-reported ─────────────────────────────────────────────
    /// Bearer token missing or rejected by the gateway.
    #[error("Unauthorized -- sign in again")]
    Unauthorized,

    /// Non-2xx response, with the `message` field extracted from the
    /// error body when the service provided one.
    #[error("Gateway error (HTTP {status}): {message}")]
    Gateway { status: u16, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// The human-readable message suitable for an error banner.
    ///
    /// Server-provided messages pass through verbatim; transport
    /// failures collapse to their display form.
    pub fn server_message(&self) -> String {
        match self {
            Self::Gateway { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Gateway { status: 404, .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if re-authentication might resolve this error.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
