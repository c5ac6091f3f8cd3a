//! Notice container operations.
//!
//! The notices service exposes no single-entity GET and no delete;
//! updates PUT the full merged entity keyed by the client-generated id.

use crate::console::Console;
use crate::convert;
use crate::error::CoreError;
use crate::fallback;
use crate::model::{Notice, NoticeDraft};

use super::is_blank;

impl Console {
    /// Fetch all notices (the service has no server-side filter).
    pub async fn fetch_notices(&self) -> Result<(), CoreError> {
        let res = &self.inner.store.notices;
        let token = res.begin_fetch("");

        match self.inner.notices.list().await {
            Ok(wire) => {
                let notices: Vec<Notice> =
                    wire.into_iter().map(convert::notice_from_wire).collect();
                res.finish_fetch(token, Ok(notices), Some(&fallback::notices()));
                Ok(())
            }
            Err(e) => {
                res.finish_fetch(token, Err(e.server_message()), Some(&fallback::notices()));
                Err(e.into())
            }
        }
    }

    /// Post a notice. The client constructs the whole entity: UUID id,
    /// issue instant fixed at creation. Returns `Ok(None)` when
    /// validation aborts before any request.
    pub async fn create_notice(&self, draft: NoticeDraft) -> Result<Option<Notice>, CoreError> {
        if is_blank(&draft.title) {
            return Ok(None);
        }

        let res = &self.inner.store.notices;
        let _gate = res.gate().lock().await;
        res.begin_save();

        let payload = convert::notice_wire_from_draft(&draft);
        match self.inner.notices.create(&payload).await {
            Ok(echo) => {
                let notice = convert::notice_from_wire(echo.unwrap_or(payload));
                res.finish_create(Ok(notice.clone()));
                Ok(Some(notice))
            }
            Err(e) => {
                res.finish_create(Err(e.server_message()));
                Err(e.into())
            }
        }
    }

    /// Retitle a notice. The new title is merged over the cached copy
    /// (the issue date is immutable) and the full entity is PUT back.
    /// An uncached id still goes through: the PUT carries a fresh issue
    /// instant and the echo is appended to the cache.
    pub async fn update_notice(
        &self,
        notice_id: &str,
        title: &str,
    ) -> Result<Option<Notice>, CoreError> {
        if is_blank(title) {
            return Ok(None);
        }

        let res = &self.inner.store.notices;
        let _gate = res.gate().lock().await;
        res.begin_save();

        let merged = match res
            .snapshot()
            .items
            .into_iter()
            .find(|n| n.notice_id == notice_id)
        {
            Some(existing) => Notice {
                title: title.to_owned(),
                ..existing
            },
            None => Notice {
                notice_id: notice_id.to_owned(),
                title: title.to_owned(),
                date: chrono::Utc::now(),
            },
        };
        let payload = convert::notice_to_wire(&merged);
        match self.inner.notices.update(notice_id, &payload).await {
            Ok(echo) => {
                let notice = echo.map(convert::notice_from_wire).unwrap_or(merged);
                res.finish_update(Ok(notice.clone()));
                Ok(Some(notice))
            }
            Err(e) => {
                res.finish_update(Err(e.server_message()));
                Err(e.into())
            }
        }
    }
}
