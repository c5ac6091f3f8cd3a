// Rooms service client.
//
// Gateway route: /roomsmicroservice/rooms
// Status travels as the wire enum `AVAILABLE` / `FULL`; display
// mapping lives in pgdesk-core.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::gateway::{GatewayClient, TransportConfig, query_params};
use crate::token::TokenHolder;
use crate::Error;

pub const SERVICE_PATH: &str = "roomsmicroservice/rooms";

// ── Wire types ───────────────────────────────────────────────────────

/// A room as the rooms service serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomWire {
    pub id: i64,
    pub name: String,
    /// Sharing category, e.g. `"3-sharing"`.
    #[serde(rename = "type")]
    pub sharing_type: String,
    pub capacity: u32,
    pub occupied: u32,
    pub price: f64,
    /// Wire enum: `AVAILABLE` or `FULL`.
    #[serde(default)]
    pub status: Option<String>,
}

/// Create/update payload. Status is derived server-side.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub sharing_type: String,
    pub capacity: u32,
    pub occupied: u32,
    pub price: f64,
}

// ── Client ───────────────────────────────────────────────────────────

/// Typed client for the rooms service.
#[derive(Debug, Clone)]
pub struct RoomsClient {
    gateway: GatewayClient,
}

impl RoomsClient {
    pub fn new(gateway_url: &Url, transport: &TransportConfig, token: TokenHolder) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            gateway: GatewayClient::new(gateway_url, SERVICE_PATH, http, token)?,
        })
    }

    /// Share an already-built HTTP client (the console builds one pool
    /// for all five domains).
    pub fn with_client(
        gateway_url: &Url,
        http: reqwest::Client,
        token: TokenHolder,
    ) -> Result<Self, Error> {
        Ok(Self {
            gateway: GatewayClient::new(gateway_url, SERVICE_PATH, http, token)?,
        })
    }

    /// GET `?q=` -- list rooms, optionally server-side filtered.
    pub async fn list(&self, q: Option<&str>) -> Result<Vec<RoomWire>, Error> {
        self.gateway.get_list_lenient("", &query_params(q)).await
    }

    /// GET `/{id}`.
    pub async fn get(&self, id: i64) -> Result<RoomWire, Error> {
        self.gateway.get(&id.to_string()).await
    }

    /// POST -- create. The service may omit the echo.
    pub async fn create(&self, payload: &RoomRequest) -> Result<Option<RoomWire>, Error> {
        self.gateway.post_maybe_echo("", payload).await
    }

    /// PUT `/{id}` -- full update. The service may omit the echo.
    pub async fn update(&self, id: i64, payload: &RoomRequest) -> Result<Option<RoomWire>, Error> {
        self.gateway.put_maybe_echo(&id.to_string(), payload).await
    }

    /// POST `/{id}/allocate` -- server-side capacity increment.
    pub async fn allocate(&self, id: i64) -> Result<RoomWire, Error> {
        self.gateway.post_empty(&format!("{id}/allocate")).await
    }

    /// DELETE `/{id}`.
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.gateway.delete(&id.to_string()).await
    }
}
