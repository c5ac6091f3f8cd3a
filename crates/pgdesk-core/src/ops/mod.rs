// ── Container operations ──
//
// One module per resource container, each an `impl Console` block:
// issue the HTTP call through the domain client, normalize, reconcile
// into the owning cell. Errors are recorded in the container's error
// slot and returned to the caller.
//
// Local validation failures (required field blank) abort before any
// request is issued, with no state change and no error record: the
// operation returns `Ok(None)` and the container never notices.

mod notices;
mod rooms;
mod session;
mod tenants;
mod tickets;

/// Required-field check used by the create/update paths.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
