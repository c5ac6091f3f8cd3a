//! Tenant container operations.

use bytes::Bytes;

use crate::console::Console;
use crate::convert;
use crate::error::CoreError;
use crate::fallback;
use crate::model::{Tenant, TenantDraft};

use super::is_blank;

impl Console {
    /// Fetch the tenant list, optionally server-side filtered by `q`.
    pub async fn fetch_tenants(&self, q: Option<&str>) -> Result<(), CoreError> {
        let res = &self.inner.store.tenants;
        let token = res.begin_fetch(q.unwrap_or(""));

        match self.inner.tenants.list(q).await {
            Ok(wire) => {
                let tenants: Vec<Tenant> =
                    wire.into_iter().map(convert::tenant_from_wire).collect();
                res.finish_fetch(token, Ok(tenants), Some(&fallback::tenants()));
                Ok(())
            }
            Err(e) => {
                res.finish_fetch(token, Err(e.server_message()), Some(&fallback::tenants()));
                Err(e.into())
            }
        }
    }

    /// Fetch one tenant by id; sets `current` and upserts into the cache.
    pub async fn fetch_tenant(&self, id: i64) -> Result<Tenant, CoreError> {
        let res = &self.inner.store.tenants;
        res.begin_fetch_one();

        match self.inner.tenants.get(id).await {
            Ok(wire) => {
                let tenant = convert::tenant_from_wire(wire);
                res.finish_fetch_one(Ok(tenant.clone()));
                Ok(tenant)
            }
            Err(e) => {
                res.finish_fetch_one(Err(e.server_message()));
                Err(e.into())
            }
        }
    }

    /// Create a tenant. A blank `tenant_id` in the draft gets a
    /// generated one (`T` + six digits) before transmission. Returns
    /// `Ok(None)` when validation aborts before any request.
    pub async fn create_tenant(&self, draft: TenantDraft) -> Result<Option<Tenant>, CoreError> {
        if is_blank(&draft.name) {
            return Ok(None);
        }

        let res = &self.inner.store.tenants;
        let _gate = res.gate().lock().await;
        res.begin_save();

        let request = convert::tenant_request(&draft);
        match self.inner.tenants.create(&request).await {
            Ok(echo) => {
                let tenant = echo
                    .map(convert::tenant_from_wire)
                    .unwrap_or_else(|| convert::tenant_from_request(&request));
                res.finish_create(Ok(tenant.clone()));
                Ok(Some(tenant))
            }
            Err(e) => {
                res.finish_create(Err(e.server_message()));
                Err(e.into())
            }
        }
    }

    /// Update a tenant by id, replacing it in place in the cache.
    pub async fn update_tenant(
        &self,
        id: i64,
        draft: TenantDraft,
    ) -> Result<Option<Tenant>, CoreError> {
        if is_blank(&draft.name) {
            return Ok(None);
        }

        let res = &self.inner.store.tenants;
        let _gate = res.gate().lock().await;
        res.begin_save();

        let request = convert::tenant_request(&draft);
        match self.inner.tenants.update(id, &request).await {
            Ok(echo) => {
                let tenant = echo.map(convert::tenant_from_wire).unwrap_or_else(|| Tenant {
                    id,
                    ..convert::tenant_from_request(&request)
                });
                res.finish_update(Ok(tenant.clone()));
                Ok(Some(tenant))
            }
            Err(e) => {
                res.finish_update(Err(e.server_message()));
                Err(e.into())
            }
        }
    }

    /// Delete a tenant; the cache entry goes away only on a successful
    /// acknowledgment.
    pub async fn delete_tenant(&self, id: i64) -> Result<(), CoreError> {
        let res = &self.inner.store.tenants;
        let _gate = res.gate().lock().await;
        res.begin_save();

        match self.inner.tenants.delete(id).await {
            Ok(()) => {
                res.finish_delete(&id, Ok(()));
                Ok(())
            }
            Err(e) => {
                res.finish_delete(&id, Err(e.server_message()));
                Err(e.into())
            }
        }
    }

    /// Export the tenant list as CSV bytes for the caller to save.
    /// The payload is never cached; only the exporting flag is tracked.
    pub async fn export_tenants_csv(&self, q: Option<&str>) -> Result<Bytes, CoreError> {
        let store = &self.inner.store;
        // `send_replace` updates the value even with zero receivers.
        store.tenants_exporting.send_replace(true);

        let outcome = self.inner.tenants.export_csv(q).await;
        store.tenants_exporting.send_replace(false);

        match outcome {
            Ok(bytes) => Ok(bytes),
            Err(e) => {
                store.tenants.record_error(e.server_message());
                Err(e.into())
            }
        }
    }
}
