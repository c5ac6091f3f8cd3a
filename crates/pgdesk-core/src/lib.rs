//! pgdesk-core: resource synchronization layer for the PG operator console.
//!
//! Five async CRUD containers (rooms, tenants, tickets, notices, session)
//! share one generic reconciliation cell and one central [`Store`]. The
//! [`Console`] facade owns the gateway clients and the store; consumers read
//! derived state through snapshots or `watch` subscriptions and dispatch
//! intents through the console's operation surface.

pub mod console;
pub mod convert;
pub mod credentials;
pub mod error;
pub mod fallback;
pub mod model;
pub mod ops;
pub mod query;
pub mod store;

pub use console::{Console, GatewayConfig};
pub use credentials::{CredentialError, CredentialStore, MemoryCredentialStore};
pub use error::CoreError;
pub use model::{
    Credentials, Entity, Notice, NoticeDraft, RegisterProfile, Room, RoomDraft, RoomStatus,
    SessionState, Tenant, TenantDraft, Ticket, TicketDraft, TicketPriority, TicketStatus,
};
pub use query::QueryDebouncer;
pub use store::{ResourceState, Store};
