// Notices service client.
//
// Gateway route: /noticessmicroservice/notices
// The notice id is client-generated (UUID v4) and doubles as the
// route key for updates; there is no numeric database id on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::gateway::{GatewayClient, TransportConfig};
use crate::token::TokenHolder;
use crate::Error;

pub const SERVICE_PATH: &str = "noticessmicroservice/notices";

// ── Wire types ───────────────────────────────────────────────────────

/// A notice as it travels in both directions: the client constructs
/// the full entity on create (id and issue timestamp included).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeWire {
    pub notice_id: String,
    pub title: String,
    /// Issue instant, set at creation and immutable.
    pub date: DateTime<Utc>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Typed client for the notices service.
#[derive(Debug, Clone)]
pub struct NoticesClient {
    gateway: GatewayClient,
}

impl NoticesClient {
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

    /// GET -- list all notices (no server-side filter on this service).
    pub async fn list(&self) -> Result<Vec<NoticeWire>, Error> {
        self.gateway.get_list_lenient("", &[]).await
    }

    /// POST -- create. The service may omit the echo.
    pub async fn create(&self, payload: &NoticeWire) -> Result<Option<NoticeWire>, Error> {
        self.gateway.post_maybe_echo("", payload).await
    }

    /// PUT `/{noticeId}` -- full update. The service may omit the echo.
    pub async fn update(
        &self,
        notice_id: &str,
        payload: &NoticeWire,
    ) -> Result<Option<NoticeWire>, Error> {
        self.gateway.put_maybe_echo(notice_id, payload).await
    }
}
