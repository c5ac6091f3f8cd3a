use chrono::NaiveDate;
use serde::Serialize;

use super::Entity;

/// A tenant, normalized to the UI shape.
#[derive(Debug, Clone, Serialize)]
pub struct Tenant {
    pub id: i64,
    /// Short business id (e.g. `"T001"`), generated client-side when
    /// the operator leaves it blank. Not guaranteed globally unique by
    /// the client; never used for cache identity.
    pub tenant_id: String,
    pub name: String,
    pub phone: String,
    /// Free-text cross-reference to a room name, not a foreign key.
    pub room: String,
    /// Calendar date, no time component.
    pub check_in: NaiveDate,
    /// Outstanding amount; zero means settled.
    pub due: f64,
}

impl Entity for Tenant {
    type Key = i64;

    fn key(&self) -> i64 {
        self.id
    }
}

/// Operator input for creating or updating a tenant.
#[derive(Debug, Clone)]
pub struct TenantDraft {
    /// Blank or `None` means "generate one".
    pub tenant_id: Option<String>,
    pub name: String,
    pub phone: String,
    pub room: String,
    pub check_in: NaiveDate,
    pub due: f64,
}
