// ── Core error types ──
//
// User-facing errors from pgdesk-core. Consumers never see raw HTTP
// status codes or JSON parse failures directly; the
// `From<pgdesk_api::Error>` impl translates transport-layer errors
// into domain-appropriate variants.

use thiserror::Error;

use crate::credentials::CredentialError;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("{entity} not found: {identifier}")]
    NotFound { entity: String, identifier: String },

    #[error("Operation failed: {message}")]
    OperationFailed { message: String },

    #[error("Gateway error: {message}")]
    Api {
        message: String,
        status: Option<u16>,
    },

    #[error("Connection failed: {message}")]
    Connection { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Credential store error: {0}")]
    Credentials(#[from] CredentialError),
}

impl From<pgdesk_api::Error> for CoreError {
    fn from(err: pgdesk_api::Error) -> Self {
        match err {
            pgdesk_api::Error::Unauthorized => CoreError::AuthenticationFailed {
                message: err.to_string(),
            },
            pgdesk_api::Error::Gateway { status, message } => CoreError::Api {
                message,
                status: Some(status),
            },
            pgdesk_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            pgdesk_api::Error::Transport(e) if e.is_connect() || e.is_timeout() => {
                CoreError::Connection {
                    message: e.to_string(),
                }
            }
            other => CoreError::Api {
                message: other.server_message(),
                status: None,
            },
        }
    }
}
