//! Session container operations.
//!
//! A successful login or register writes the returned token through to
//! the holder and the durable store. A failed attempt clears nothing
//! already held. Logout is a local-only operation that cannot fail.

use tracing::info;

use pgdesk_api::auth::{LoginRequest, RegisterRequest};

use crate::console::Console;
use crate::error::CoreError;
use crate::model::{Credentials, RegisterProfile};

use super::is_blank;

impl Console {
    /// Register a new operator account. Returns `Ok(false)` when
    /// validation aborts before any request.
    pub async fn register(&self, profile: RegisterProfile) -> Result<bool, CoreError> {
        if is_blank(&profile.name) || is_blank(&profile.email) || is_blank(&profile.password) {
            return Ok(false);
        }

        let session = &self.inner.store.session;
        session.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        let request = RegisterRequest {
            name: profile.name,
            email: profile.email,
            phone: profile.phone,
            password: profile.password,
        };
        match self.inner.auth.register(&request).await {
            Ok(response) => {
                if let Some(token) = response.token.as_deref() {
                    self.adopt_token(token);
                }
                let authenticated = self.is_authenticated();
                session.send_modify(|s| {
                    s.loading = false;
                    s.current_user = response.name.clone();
                    s.authenticated = authenticated;
                });
                info!("operator account registered");
                Ok(true)
            }
            Err(e) => {
                let message = e.server_message();
                session.send_modify(|s| {
                    s.loading = false;
                    s.error = Some(message);
                });
                Err(e.into())
            }
        }
    }

    /// Sign in. Returns `Ok(false)` when validation aborts before any
    /// request.
    pub async fn login(&self, credentials: Credentials) -> Result<bool, CoreError> {
        if is_blank(&credentials.email) || is_blank(&credentials.password) {
            return Ok(false);
        }

        let session = &self.inner.store.session;
        session.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });

        let request = LoginRequest {
            email: credentials.email,
            password: credentials.password,
        };
        match self.inner.auth.login(&request).await {
            Ok(response) => {
                if let Some(token) = response.token.as_deref() {
                    self.adopt_token(token);
                }
                let authenticated = self.is_authenticated();
                session.send_modify(|s| {
                    s.loading = false;
                    s.current_user = None;
                    s.authenticated = authenticated;
                });
                info!("session opened");
                Ok(true)
            }
            Err(e) => {
                let message = e.server_message();
                session.send_modify(|s| {
                    s.loading = false;
                    s.error = Some(message);
                });
                Err(e.into())
            }
        }
    }

    /// Sign out: clear the held token and the durable slot. Local-only;
    /// a broken credential store is logged and ignored.
    pub fn logout(&self) {
        self.inner.token.clear();
        if let Err(e) = self.inner.credentials.clear() {
            tracing::warn!("failed to clear persisted token: {e}");
        }
        self.inner.store.session.send_modify(|s| {
            s.authenticated = false;
            s.current_user = None;
            s.error = None;
            s.loading = false;
        });
        info!("session closed");
    }
}
