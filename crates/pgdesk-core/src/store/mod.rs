// ── Central store ──
//
// One cell per entity domain plus the session cell. Consumers observe
// through snapshots or `watch` subscriptions; mutation happens only
// from the owning container's operation handlers in `ops`.

mod resource;

pub use resource::ResourceState;
pub(crate) use resource::Resource;

use tokio::sync::watch;

use crate::model::{Notice, Room, SessionState, Tenant, Ticket};

/// Aggregate of the five container states. Single source of truth;
/// each container mutates only its own sub-tree.
pub struct Store {
    pub(crate) rooms: Resource<Room>,
    pub(crate) tenants: Resource<Tenant>,
    pub(crate) tickets: Resource<Ticket>,
    pub(crate) notices: Resource<Notice>,
    pub(crate) session: watch::Sender<SessionState>,
    /// CSV export in flight (tenants only; the payload itself is
    /// returned to the caller, never cached).
    pub(crate) tenants_exporting: watch::Sender<bool>,
}

impl Store {
    pub(crate) fn new() -> Self {
        let (session, _) = watch::channel(SessionState::default());
        let (tenants_exporting, _) = watch::channel(false);
        Self {
            rooms: Resource::new(),
            tenants: Resource::new(),
            tickets: Resource::new(),
            notices: Resource::new(),
            session,
            tenants_exporting,
        }
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn rooms_snapshot(&self) -> ResourceState<Room> {
        self.rooms.snapshot()
    }

    pub fn tenants_snapshot(&self) -> ResourceState<Tenant> {
        self.tenants.snapshot()
    }

    pub fn tickets_snapshot(&self) -> ResourceState<Ticket> {
        self.tickets.snapshot()
    }

    pub fn notices_snapshot(&self) -> ResourceState<Notice> {
        self.notices.snapshot()
    }

    pub fn session_snapshot(&self) -> SessionState {
        self.session.borrow().clone()
    }

    pub fn tenants_exporting(&self) -> bool {
        *self.tenants_exporting.borrow()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_rooms(&self) -> watch::Receiver<ResourceState<Room>> {
        self.rooms.subscribe()
    }

    pub fn subscribe_tenants(&self) -> watch::Receiver<ResourceState<Tenant>> {
        self.tenants.subscribe()
    }

    pub fn subscribe_tickets(&self) -> watch::Receiver<ResourceState<Ticket>> {
        self.tickets.subscribe()
    }

    pub fn subscribe_notices(&self) -> watch::Receiver<ResourceState<Notice>> {
        self.notices.subscribe()
    }

    pub fn subscribe_session(&self) -> watch::Receiver<SessionState> {
        self.session.subscribe()
    }

    pub fn subscribe_tenants_exporting(&self) -> watch::Receiver<bool> {
        self.tenants_exporting.subscribe()
    }
}
