// Tickets service client.
//
// Gateway route: /ticketssmicroservice/tickets
// Priority and status travel as upper-case wire enums
// (`LOW|MEDIUM|HIGH`, `OPEN|IN_PROGRESS|CLOSED`); display mapping
// lives in pgdesk-core. Status changes go through a dedicated PATCH.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::gateway::{GatewayClient, TransportConfig, query_params};
use crate::token::TokenHolder;
use crate::Error;

pub const SERVICE_PATH: &str = "ticketssmicroservice/tickets";

// ── Wire types ───────────────────────────────────────────────────────

/// A ticket as the tickets service serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketWire {
    pub id: i64,
    /// Server-generated human id (e.g. `"TCK-4821"`); display only.
    #[serde(default)]
    pub ticket_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub room: Option<String>,
    /// Wire enum: `LOW`, `MEDIUM`, or `HIGH`.
    pub priority: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Wire enum: `OPEN`, `IN_PROGRESS`, or `CLOSED`.
    pub status: String,
    /// Server-assigned, immutable after creation.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create payload; the service assigns id, status, and timestamps.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRequest {
    pub title: String,
    pub room: String,
    /// Wire enum form, already upper-cased by the caller.
    pub priority: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateStatusRequest {
    /// Wire enum form, already upper-cased by the caller.
    pub status: String,
}

// ── Client ───────────────────────────────────────────────────────────

/// Typed client for the tickets service.
#[derive(Debug, Clone)]
pub struct TicketsClient {
    gateway: GatewayClient,
}

impl TicketsClient {
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

    /// GET `?q=` -- list tickets, optionally server-side filtered.
    pub async fn list(&self, q: Option<&str>) -> Result<Vec<TicketWire>, Error> {
        self.gateway.get_list_lenient("", &query_params(q)).await
    }

    /// GET `/{id}`.
    pub async fn get(&self, id: i64) -> Result<TicketWire, Error> {
        self.gateway.get(&id.to_string()).await
    }

    /// POST -- create. The service may omit the echo.
    pub async fn create(&self, payload: &TicketRequest) -> Result<Option<TicketWire>, Error> {
        self.gateway.post_maybe_echo("", payload).await
    }

    /// PATCH `/{id}/status` -- any status may move to any other;
    /// there is no client-side transition guard.
    pub async fn update_status(&self, id: i64, status: &str) -> Result<TicketWire, Error> {
        let body = UpdateStatusRequest {
            status: status.to_owned(),
        };
        self.gateway.patch(&format!("{id}/status"), &body).await
    }

    /// DELETE `/{id}`.
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.gateway.delete(&id.to_string()).await
    }
}
