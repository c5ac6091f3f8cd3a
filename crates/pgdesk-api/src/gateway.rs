// Shared HTTP verb core for the five gateway clients.
//
// Each domain client wraps a `GatewayClient` pinned to its own base
// path (e.g. `/roomsmicroservice/rooms/`). The bearer token is read
// from the shared `TokenHolder` at send time, never baked into
// default headers, so a login or logout applies to the next request.

use std::time::Duration;

use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::Error;
use crate::token::TokenHolder;

// ── Error response shape from the gateway services ───────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

// ── Transport configuration ──────────────────────────────────────────

/// Transport settings shared by all domain clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub timeout: Duration,
    pub danger_accept_invalid_certs: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            danger_accept_invalid_certs: false,
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent("pgdesk/0.1.0");

        if self.danger_accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        Ok(builder.build()?)
    }
}

// ── Client ───────────────────────────────────────────────────────────

/// HTTP verb core pinned to one service base path.
#[derive(Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: Url,
    token: TokenHolder,
}

impl GatewayClient {
    /// Pin a client to `gateway_url` + `service_path`.
    ///
    /// `service_path` is the gateway route prefix for one domain,
    /// e.g. `"roomsmicroservice/rooms"`. The resulting base always
    /// ends with a slash so relative joins behave.
    pub fn new(
        gateway_url: &Url,
        service_path: &str,
        http: reqwest::Client,
        token: TokenHolder,
    ) -> Result<Self, Error> {
        let trimmed = service_path.trim_matches('/');
        let base_url = gateway_url.join(&format!("{trimmed}/"))?;
        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// The shared token holder this client reads on every request.
    pub fn token(&self) -> &TokenHolder {
        &self.token
    }

    /// Join a relative path (e.g. `"42/allocate"`) onto the base URL.
    ///
    /// An empty path addresses the collection root. The services map
    /// the exact unslashed route, so the trailing slash the base keeps
    /// for joining is stripped here.
    fn url(&self, path: &str) -> Result<Url, Error> {
        if path.is_empty() {
            let mut url = self.base_url.clone();
            let unslashed = url.path().trim_end_matches('/').to_owned();
            url.set_path(&unslashed);
            Ok(url)
        } else {
            Ok(self.base_url.join(path)?)
        }
    }

    /// Start a request, attaching `Authorization: Bearer` when a token
    /// is held and sending unauthenticated otherwise.
    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, url);
        match self.token.bearer_value() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.request(Method::GET, url).send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url} params={params:?}");

        let resp = self.request(Method::GET, url).query(params).send().await?;
        self.handle_response(resp).await
    }

    /// GET a raw byte payload (the tenants CSV export).
    pub(crate) async fn get_bytes(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Bytes, Error> {
        let url = self.url(path)?;
        debug!("GET {url} (bytes) params={params:?}");

        let resp = self.request(Method::GET, url).query(params).send().await?;
        let status = resp.status();
        if status.is_success() {
            Ok(resp.bytes().await?)
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.request(Method::POST, url).json(body).send().await?;
        self.handle_response(resp).await
    }

    /// POST with no request body, expecting an entity echo (allocate).
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.request(Method::POST, url).send().await?;
        self.handle_response(resp).await
    }

    /// POST where the server may or may not echo the created entity.
    pub(crate) async fn post_maybe_echo<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.request(Method::POST, url).json(body).send().await?;
        self.handle_optional(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("PUT {url}");

        let resp = self.request(Method::PUT, url).json(body).send().await?;
        self.handle_response(resp).await
    }

    /// PUT where the server may or may not echo the updated entity.
    pub(crate) async fn put_maybe_echo<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, Error> {
        let url = self.url(path)?;
        debug!("PUT {url}");

        let resp = self.request(Method::PUT, url).json(body).send().await?;
        self.handle_optional(resp).await
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("PATCH {url}");

        let resp = self.request(Method::PATCH, url).json(body).send().await?;
        self.handle_response(resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("DELETE {url}");

        let resp = self.request(Method::DELETE, url).send().await?;
        self.handle_empty(resp).await
    }

    // ── Lenient list fetch ───────────────────────────────────────────

    /// GET a JSON array, decoding elements individually.
    ///
    /// Malformed elements are quarantined with a warning instead of
    /// failing the whole response; the gateway aggregates independent
    /// services and one bad record must not blank the rest.
    pub(crate) async fn get_list_lenient<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>, Error> {
        let raw: Vec<serde_json::Value> = if params.is_empty() {
            self.get(path).await?
        } else {
            self.get_with_params(path, params).await?
        };

        let total = raw.len();
        let mut items = Vec::with_capacity(total);
        for value in raw {
            match serde_json::from_value::<T>(value.clone()) {
                Ok(item) => items.push(item),
                Err(e) => warn!("quarantined malformed list element: {e} ({value})"),
            }
        }
        if items.len() < total {
            warn!(
                dropped = total - items.len(),
                kept = items.len(),
                "list response contained malformed elements"
            );
        }
        Ok(items)
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview = truncate_on_char_boundary(&body, 200);
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    /// Like `handle_response` but treats an empty 2xx body as `None`,
    /// for services that do not echo the entity on create/update.
    async fn handle_optional<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<Option<T>, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            if body.trim().is_empty() || body.trim() == "null" {
                return Ok(None);
            }
            serde_json::from_str(&body).map(Some).map_err(|e| {
                let preview = truncate_on_char_boundary(&body, 200);
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn handle_empty(&self, resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(self.parse_error(status, resp).await)
        }
    }

    async fn parse_error(&self, status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Error::Unauthorized;
        }

        let raw = resp.text().await.unwrap_or_default();

        if let Ok(err) = serde_json::from_str::<ErrorResponse>(&raw) {
            if let Some(message) = err.message {
                return Error::Gateway {
                    status: status.as_u16(),
                    message,
                };
            }
        }

        Error::Gateway {
            status: status.as_u16(),
            message: if raw.is_empty() {
                status.to_string()
            } else {
                raw
            },
        }
    }
}

impl std::fmt::Debug for GatewayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Build the optional `q` filter parameter used by every list endpoint.
pub(crate) fn query_params(q: Option<&str>) -> Vec<(&'static str, String)> {
    match q {
        Some(q) if !q.is_empty() => vec![("q", q.to_owned())],
        _ => Vec::new(),
    }
}

/// Truncate `s` to at most `max` bytes, backing up to the nearest
/// char boundary so multibyte bodies never split mid-character.
fn truncate_on_char_boundary(s: &str, max: usize) -> &str {
    let mut end = s.len().min(max);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
