// ── Durable token persistence ──
//
// The session token survives process restarts through exactly one
// string value in a durable client-local slot. The slot is an injected
// dependency: pgdesk-config supplies a keyring-backed implementation,
// tests use the in-memory one.

use std::sync::Mutex;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("credential store unavailable: {0}")]
    Unavailable(String),

    #[error("credential store I/O failed: {0}")]
    Io(String),
}

/// A durable slot holding at most one session token.
///
/// Absence of a stored value means unauthenticated on process start.
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Result<Option<SecretString>, CredentialError>;
    fn store(&self, token: &SecretString) -> Result<(), CredentialError>;
    fn clear(&self) -> Result<(), CredentialError>;
}

/// In-memory credential store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryCredentialStore {
    slot: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<SecretString>, CredentialError> {
        let slot = self
            .slot
            .lock()
            .map_err(|e| CredentialError::Unavailable(e.to_string()))?;
        Ok(slot.clone().map(SecretString::from))
    }

    fn store(&self, token: &SecretString) -> Result<(), CredentialError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| CredentialError::Unavailable(e.to_string()))?;
        *slot = Some(token.expose_secret().to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| CredentialError::Unavailable(e.to_string()))?;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryCredentialStore::new();
        assert!(store.load().unwrap().is_none());

        store.store(&SecretString::from("tok".to_owned())).unwrap();
        assert_eq!(store.load().unwrap().unwrap().expose_secret(), "tok");

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
