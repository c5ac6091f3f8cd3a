// Auth service client.
//
// Gateway route: /usermicroservice/api/auth
// Register and login both return an `AuthResponse`; the token field
// may be absent when the service declines to open a session.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::gateway::{GatewayClient, TransportConfig};
use crate::token::TokenHolder;
use crate::Error;

pub const SERVICE_PATH: &str = "usermicroservice/api/auth";

// ── Wire types ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response to both `/register` and `/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Typed client for the auth service.
///
/// Requests here are deliberately sent through the same bearer-attach
/// path as every other client: a held token rides along, an empty
/// holder sends unauthenticated.
#[derive(Debug, Clone)]
pub struct AuthClient {
    gateway: GatewayClient,
}

impl AuthClient {
    pub fn new(gateway_url: &Url, transport: &TransportConfig, token: TokenHolder) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            gateway: GatewayClient::new(gateway_url, SERVICE_PATH, http, token)?,
        })
    }

    pub fn with_client(
        gateway_url: &Url,
        http: reqwest::Client,
        token: TokenHolder,
    ) -> Result<Self, Error> {
        Ok(Self {
            gateway: GatewayClient::new(gateway_url, SERVICE_PATH, http, token)?,
        })
    }

    /// POST `/register`.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<AuthResponse, Error> {
        self.gateway.post("register", payload).await
    }

    /// POST `/login`.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, Error> {
        self.gateway.post("login", payload).await
    }
}
