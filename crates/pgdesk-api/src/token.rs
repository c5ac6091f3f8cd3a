// ── Shared bearer-token slot ──
//
// One holder is shared by all five gateway clients. Every outbound
// request reads it at send time, so a login that lands mid-session
// takes effect on the next request without rebuilding any client.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use secrecy::{ExposeSecret, SecretString};

/// Process-wide slot for the current session token.
///
/// Cheaply cloneable; all clones observe the same slot. Reads are
/// lock-free (`arc-swap`), which matters because the clients read it
/// on every request.
#[derive(Clone, Default)]
pub struct TokenHolder {
    slot: Arc<ArcSwapOption<SecretString>>,
}

impl TokenHolder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held token.
    pub fn set(&self, token: SecretString) {
        self.slot.store(Some(Arc::new(token)));
    }

    /// Clear the held token (logout).
    pub fn clear(&self) {
        self.slot.store(None);
    }

    /// Whether a token is currently held.
    pub fn is_present(&self) -> bool {
        self.slot.load().is_some()
    }

    /// Expose the token for header construction, if held.
    pub(crate) fn bearer_value(&self) -> Option<String> {
        self.slot
            .load()
            .as_ref()
            .map(|t| t.expose_secret().to_owned())
    }
}

impl std::fmt::Debug for TokenHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenHolder")
            .field("present", &self.is_present())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let holder = TokenHolder::new();
        assert!(!holder.is_present());
        assert!(holder.bearer_value().is_none());
    }

    #[test]
    fn set_and_clear() {
        let holder = TokenHolder::new();
        holder.set(SecretString::from("tok-123".to_owned()));
        assert!(holder.is_present());
        assert_eq!(holder.bearer_value().unwrap(), "tok-123");

        holder.clear();
        assert!(!holder.is_present());
    }

    #[test]
    fn clones_share_the_slot() {
        let a = TokenHolder::new();
        let b = a.clone();
        a.set(SecretString::from("shared".to_owned()));
        assert_eq!(b.bearer_value().unwrap(), "shared");

        b.clear();
        assert!(!a.is_present());
    }
}
