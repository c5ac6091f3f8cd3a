// ── Domain model ──
//
// UI-stable entity shapes, normalized from the heterogeneous wire
// payloads of the five gateway services. Entities are immutable value
// snapshots: containers replace whole objects, never edit in place.

mod notice;
mod room;
mod session;
mod tenant;
mod ticket;

pub use notice::{Notice, NoticeDraft};
pub use room::{Room, RoomDraft, RoomStatus};
pub use session::{Credentials, RegisterProfile, SessionState};
pub use tenant::{Tenant, TenantDraft};
pub use ticket::{Ticket, TicketDraft, TicketPriority, TicketStatus};

/// Cache identity for reconciliation (upsert / replace / delete).
///
/// The key is always the stable primary id -- the numeric database id
/// where one exists, the client-generated notice id otherwise. Business
/// ids (tenant id, ticket display id) are never used for identity.
pub trait Entity: Clone + Send + Sync + 'static {
    type Key: PartialEq + Clone + Send + Sync;

    fn key(&self) -> Self::Key;
}
