// Tenants service client.
//
// Gateway route: /tenantsmicroservice/tenants
// `checkIn` is a calendar date with no time component; the export
// endpoint streams CSV bytes back to the caller untouched.

use bytes::Bytes;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::gateway::{GatewayClient, TransportConfig, query_params};
use crate::token::TokenHolder;
use crate::Error;

pub const SERVICE_PATH: &str = "tenantsmicroservice/tenants";

// ── Wire types ───────────────────────────────────────────────────────

/// A tenant as the tenants service serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantWire {
    pub id: i64,
    /// Short business id, e.g. `"T001"`. Column length is 16.
    #[serde(default)]
    pub tenant_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Free-text cross-reference to a room name, not a foreign key.
    #[serde(default)]
    pub room: Option<String>,
    pub check_in: NaiveDate,
    /// Outstanding amount; zero means settled.
    #[serde(default)]
    pub due: f64,
}

/// Create/update payload. `tenant_id` is required by the service;
/// callers generate one when the operator leaves it blank.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantRequest {
    pub tenant_id: String,
    pub name: String,
    pub phone: String,
    pub room: String,
    pub check_in: NaiveDate,
    pub due: f64,
}

// ── Client ───────────────────────────────────────────────────────────

/// Typed client for the tenants service.
#[derive(Debug, Clone)]
pub struct TenantsClient {
    gateway: GatewayClient,
}

impl TenantsClient {
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

    /// GET `?q=` -- list tenants, optionally server-side filtered.
    pub async fn list(&self, q: Option<&str>) -> Result<Vec<TenantWire>, Error> {
        self.gateway.get_list_lenient("", &query_params(q)).await
    }

    /// GET `/{id}`.
    pub async fn get(&self, id: i64) -> Result<TenantWire, Error> {
        self.gateway.get(&id.to_string()).await
    }

    /// POST -- create. The service may omit the echo.
    pub async fn create(&self, payload: &TenantRequest) -> Result<Option<TenantWire>, Error> {
        self.gateway.post_maybe_echo("", payload).await
    }

    /// PUT `/{id}` -- full update. The service may omit the echo.
    pub async fn update(
        &self,
        id: i64,
        payload: &TenantRequest,
    ) -> Result<Option<TenantWire>, Error> {
        self.gateway.put_maybe_echo(&id.to_string(), payload).await
    }

    /// DELETE `/{id}`.
    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        self.gateway.delete(&id.to_string()).await
    }

    /// GET `/export?q=` -- CSV byte stream for the caller to save.
    pub async fn export_csv(&self, q: Option<&str>) -> Result<Bytes, Error> {
        self.gateway.get_bytes("export", &query_params(q)).await
    }
}
