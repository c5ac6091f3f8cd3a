// ── Console facade ──
//
// The single entry point for consumers. Owns the five gateway clients,
// the shared token holder, the injected credential store, and the
// central Store. Built once at process start and passed by reference;
// there is no ambient global.

use std::sync::Arc;
use std::time::Duration;

use secrecy::SecretString;
use tracing::{info, warn};
use url::Url;

use pgdesk_api::auth::AuthClient;
use pgdesk_api::gateway::TransportConfig;
use pgdesk_api::notices::NoticesClient;
use pgdesk_api::rooms::RoomsClient;
use pgdesk_api::tenants::TenantsClient;
use pgdesk_api::tickets::TicketsClient;
use pgdesk_api::TokenHolder;

use crate::credentials::CredentialStore;
use crate::error::CoreError;
use crate::store::Store;

/// How to reach the gateway. Built by CLI/config code and handed in;
/// core never reads config files.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Gateway host, e.g. `http://localhost:8086`.
    pub url: Url,
    pub timeout: Duration,
    /// Accept self-signed TLS certificates (local deployments).
    pub insecure: bool,
}

impl GatewayConfig {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            timeout: Duration::from_secs(30),
            insecure: false,
        }
    }
}

/// The console: cheaply cloneable via `Arc` inner, shared by all
/// consumers of one session.
#[derive(Clone)]
pub struct Console {
    pub(crate) inner: Arc<ConsoleInner>,
}

pub(crate) struct ConsoleInner {
    pub(crate) auth: AuthClient,
    pub(crate) rooms: RoomsClient,
    pub(crate) tenants: TenantsClient,
    pub(crate) tickets: TicketsClient,
    pub(crate) notices: NoticesClient,
    pub(crate) token: TokenHolder,
    pub(crate) credentials: Arc<dyn CredentialStore>,
    pub(crate) store: Store,
}

impl Console {
    /// Build the console: one HTTP connection pool shared by the five
    /// domain clients, the token holder hydrated from the credential
    /// store. A broken credential store degrades to an unauthenticated
    /// session instead of failing construction.
    pub fn new(
        config: &GatewayConfig,
        credentials: Arc<dyn CredentialStore>,
    ) -> Result<Self, CoreError> {
        let transport = TransportConfig {
            timeout: config.timeout,
            danger_accept_invalid_certs: config.insecure,
        };
        let http = transport.build_client()?;
        let token = TokenHolder::new();

        match credentials.load() {
            Ok(Some(stored)) => {
                token.set(stored);
                info!("session token restored from credential store");
            }
            Ok(None) => {}
            Err(e) => warn!("credential store unavailable, starting unauthenticated: {e}"),
        }

        let store = Store::new();
        store
            .session
            .send_modify(|s| s.authenticated = token.is_present());

        Ok(Self {
            inner: Arc::new(ConsoleInner {
                auth: AuthClient::with_client(&config.url, http.clone(), token.clone())?,
                rooms: RoomsClient::with_client(&config.url, http.clone(), token.clone())?,
                tenants: TenantsClient::with_client(&config.url, http.clone(), token.clone())?,
                tickets: TicketsClient::with_client(&config.url, http.clone(), token.clone())?,
                notices: NoticesClient::with_client(&config.url, http, token.clone())?,
                token,
                credentials,
                store,
            }),
        })
    }

    /// The central store, for snapshots and subscriptions.
    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    /// Derived: a token is currently held. Says nothing about whether
    /// the gateway will still accept it.
    pub fn is_authenticated(&self) -> bool {
        self.inner.token.is_present()
    }

    /// Write a token through to the holder and the durable store.
    /// Persistence failure is downgraded to a warning; the in-memory
    /// session is already live.
    pub(crate) fn adopt_token(&self, token: &str) {
        let secret = SecretString::from(token.to_owned());
        if let Err(e) = self.inner.credentials.store(&secret) {
            warn!("failed to persist session token: {e}");
        }
        self.inner.token.set(secret);
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}
