use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Entity;

/// A notice-board entry.
///
/// The id is client-generated (UUID v4) at creation time and is the
/// only stable identity this domain has; the issue instant is set once
/// and never changes.
#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub notice_id: String,
    pub title: String,
    pub date: DateTime<Utc>,
}

impl Entity for Notice {
    type Key = String;

    fn key(&self) -> String {
        self.notice_id.clone()
    }
}

/// Operator input for posting a notice.
#[derive(Debug, Clone)]
pub struct NoticeDraft {
    pub title: String,
}
