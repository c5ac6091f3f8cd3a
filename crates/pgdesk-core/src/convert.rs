// ── Wire-to-domain normalization ──
//
// Pure mappings between the gateway wire shapes and the UI-stable
// domain types, plus outbound request construction (the inverse
// mapping). Schema validation happened one layer down in pgdesk-api;
// what arrives here is structurally sound, so these fill defaults and
// fold enums.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use pgdesk_api::notices::NoticeWire;
use pgdesk_api::rooms::{RoomRequest, RoomWire};
use pgdesk_api::tenants::{TenantRequest, TenantWire};
use pgdesk_api::tickets::{TicketRequest, TicketWire};

use crate::model::{
    Notice, NoticeDraft, Room, RoomDraft, RoomStatus, Tenant, TenantDraft, Ticket, TicketDraft,
    TicketStatus,
};

// ── Provisional ids ──────────────────────────────────────────────────

static PROVISIONAL_ID: AtomicI64 = AtomicI64::new(-1);

/// Next provisional (negative) id for surrogate entities built from a
/// submitted payload when the service did not echo the created object.
/// Negative so it can never collide with a server id; the next full
/// fetch replaces the surrogate with the real record.
fn next_provisional_id() -> i64 {
    PROVISIONAL_ID.fetch_sub(1, Ordering::Relaxed)
}

/// Generate a short friendly tenant id: `T` + last six digits of the
/// epoch-millisecond clock (the column is 16 chars, keep it compact).
pub fn generate_tenant_id() -> String {
    let suffix = Utc::now().timestamp_millis().rem_euclid(1_000_000);
    format!("T{suffix:06}")
}

// ── Rooms ────────────────────────────────────────────────────────────

pub fn room_from_wire(wire: RoomWire) -> Room {
    Room {
        id: wire.id,
        name: wire.name,
        sharing_type: wire.sharing_type,
        capacity: wire.capacity,
        occupied: wire.occupied,
        price: wire.price,
        status: RoomStatus::from_wire(wire.status.as_deref().unwrap_or("AVAILABLE")),
    }
}

/// Surrogate for a create the service acknowledged without an echo.
pub fn room_from_draft(draft: RoomDraft) -> Room {
    let status = if draft.occupied >= draft.capacity {
        RoomStatus::Full
    } else {
        RoomStatus::Available
    };
    Room {
        id: next_provisional_id(),
        name: draft.name,
        sharing_type: draft.sharing_type,
        capacity: draft.capacity,
        occupied: draft.occupied,
        price: draft.price,
        status,
    }
}

/// Surrogate for an update the service acknowledged without an echo.
pub fn room_from_update(id: i64, draft: RoomDraft) -> Room {
    Room {
        id,
        ..room_from_draft(draft)
    }
}

pub fn room_request(draft: &RoomDraft) -> RoomRequest {
    RoomRequest {
        name: draft.name.clone(),
        sharing_type: draft.sharing_type.clone(),
        capacity: draft.capacity,
        occupied: draft.occupied,
        price: draft.price,
    }
}

// ── Tenants ──────────────────────────────────────────────────────────

pub fn tenant_from_wire(wire: TenantWire) -> Tenant {
    Tenant {
        id: wire.id,
        tenant_id: wire.tenant_id.unwrap_or_default(),
        name: wire.name,
        phone: wire.phone.unwrap_or_default(),
        room: wire.room.unwrap_or_default(),
        check_in: wire.check_in,
        due: wire.due,
    }
}

pub fn tenant_from_request(request: &TenantRequest) -> Tenant {
    Tenant {
        id: next_provisional_id(),
        tenant_id: request.tenant_id.clone(),
        name: request.name.clone(),
        phone: request.phone.clone(),
        room: request.room.clone(),
        check_in: request.check_in,
        due: request.due,
    }
}

/// Build the wire payload, generating a tenant id when the draft has
/// none.
pub fn tenant_request(draft: &TenantDraft) -> TenantRequest {
    let tenant_id = match draft.tenant_id.as_deref() {
        Some(id) if !id.trim().is_empty() => id.to_owned(),
        _ => generate_tenant_id(),
    };
    TenantRequest {
        tenant_id,
        name: draft.name.clone(),
        phone: draft.phone.clone(),
        room: draft.room.clone(),
        check_in: draft.check_in,
        due: draft.due,
    }
}

// ── Tickets ──────────────────────────────────────────────────────────

pub fn ticket_from_wire(wire: TicketWire) -> Ticket {
    Ticket {
        id: wire.id,
        ticket_id: wire.ticket_id.unwrap_or_default(),
        title: wire.title,
        room: wire.room.unwrap_or_default(),
        priority: crate::model::TicketPriority::from_wire(&wire.priority),
        description: wire.description.unwrap_or_default(),
        status: TicketStatus::from_wire(&wire.status),
        created_at: wire.created_at,
    }
}

/// Surrogate for a create the service acknowledged without an echo.
/// New tickets open as `Open`; the server assigns id and timestamps.
pub fn ticket_from_draft(draft: TicketDraft) -> Ticket {
    Ticket {
        id: next_provisional_id(),
        ticket_id: String::new(),
        title: draft.title,
        room: draft.room,
        priority: draft.priority,
        description: draft.description,
        status: TicketStatus::Open,
        created_at: None,
    }
}

pub fn ticket_request(draft: &TicketDraft) -> TicketRequest {
    TicketRequest {
        title: draft.title.clone(),
        room: draft.room.clone(),
        priority: draft.priority.to_wire(),
        description: draft.description.clone(),
    }
}

// ── Notices ──────────────────────────────────────────────────────────

pub fn notice_from_wire(wire: NoticeWire) -> Notice {
    Notice {
        notice_id: wire.notice_id,
        title: wire.title,
        date: wire.date,
    }
}

/// Construct the full wire entity for a new notice: client-generated
/// UUID, issue instant fixed at creation.
pub fn notice_wire_from_draft(draft: &NoticeDraft) -> NoticeWire {
    NoticeWire {
        notice_id: uuid::Uuid::new_v4().to_string(),
        title: draft.title.clone(),
        date: Utc::now(),
    }
}

pub fn notice_to_wire(notice: &Notice) -> NoticeWire {
    NoticeWire {
        notice_id: notice.notice_id.clone(),
        title: notice.title.clone(),
        date: notice.date,
    }
}
