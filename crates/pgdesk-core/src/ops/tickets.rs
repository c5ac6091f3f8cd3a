//! Ticket container operations.
//!
//! Tickets have no fallback dataset: an empty board is a meaningful
//! state, not a degraded one.

use crate::console::Console;
use crate::convert;
use crate::error::CoreError;
use crate::model::{Ticket, TicketDraft, TicketStatus};

use super::is_blank;

impl Console {
    /// Fetch the ticket list, optionally server-side filtered by `q`.
    pub async fn fetch_tickets(&self, q: Option<&str>) -> Result<(), CoreError> {
        let res = &self.inner.store.tickets;
        let token = res.begin_fetch(q.unwrap_or(""));

        match self.inner.tickets.list(q).await {
            Ok(wire) => {
                let tickets: Vec<Ticket> =
                    wire.into_iter().map(convert::ticket_from_wire).collect();
                res.finish_fetch(token, Ok(tickets), None);
                Ok(())
            }
            Err(e) => {
                res.finish_fetch(token, Err(e.server_message()), None);
                Err(e.into())
            }
        }
    }

    /// Fetch one ticket by id; sets `current` and upserts into the cache.
    pub async fn fetch_ticket(&self, id: i64) -> Result<Ticket, CoreError> {
        let res = &self.inner.store.tickets;
        res.begin_fetch_one();

        match self.inner.tickets.get(id).await {
            Ok(wire) => {
                let ticket = convert::ticket_from_wire(wire);
                res.finish_fetch_one(Ok(ticket.clone()));
                Ok(ticket)
            }
            Err(e) => {
                res.finish_fetch_one(Err(e.server_message()));
                Err(e.into())
            }
        }
    }

    /// Raise a ticket. Returns `Ok(None)` when validation aborts the
    /// operation before any request is issued.
    pub async fn create_ticket(&self, draft: TicketDraft) -> Result<Option<Ticket>, CoreError> {
        if is_blank(&draft.title) {
            return Ok(None);
        }

        let res = &self.inner.store.tickets;
        let _gate = res.gate().lock().await;
        res.begin_save();

        let request = convert::ticket_request(&draft);
        match self.inner.tickets.create(&request).await {
            Ok(echo) => {
                let ticket = echo
                    .map(convert::ticket_from_wire)
                    .unwrap_or_else(|| convert::ticket_from_draft(draft));
                res.finish_create(Ok(ticket.clone()));
                Ok(Some(ticket))
            }
            Err(e) => {
                res.finish_create(Err(e.server_message()));
                Err(e.into())
            }
        }
    }

    /// Move a ticket to `status`. Any status may move to any other;
    /// a no-op transition still issues the request. The cached entity
    /// is replaced in place, or ignored when not cached.
    pub async fn update_ticket_status(
        &self,
        id: i64,
        status: &TicketStatus,
    ) -> Result<Ticket, CoreError> {
        let res = &self.inner.store.tickets;
        let _gate = res.gate().lock().await;
        res.begin_save();

        match self.inner.tickets.update_status(id, &status.to_wire()).await {
            Ok(wire) => {
                let ticket = convert::ticket_from_wire(wire);
                res.finish_replace(Ok(ticket.clone()));
                Ok(ticket)
            }
            Err(e) => {
                res.finish_replace(Err(e.server_message()));
                Err(e.into())
            }
        }
    }

    /// Delete a ticket; the cache entry goes away only on a successful
    /// acknowledgment.
    pub async fn delete_ticket(&self, id: i64) -> Result<(), CoreError> {
        let res = &self.inner.store.tickets;
        let _gate = res.gate().lock().await;
        res.begin_save();

        match self.inner.tickets.delete(id).await {
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
}
