// ── Generic async resource cell ──
//
// One reconciliation pattern, instantiated for each entity domain.
// State lives behind a `watch` channel: subscribers receive cloned
// snapshots, mutations go through `send_modify` so every change is
// atomic relative to other handlers.
//
// Two guards close the races the pattern is prone to:
//  - a monotonically increasing sequence token per list fetch; a
//    completion applies only if its token is still the latest, so a
//    slow stale response can never overwrite a newer one;
//  - a single-slot mutation gate (async mutex) serializing
//    create/update/delete per resource, so rapid double-submits
//    cannot interleave.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{Mutex, watch};
use tracing::debug;

use crate::model::Entity;

/// Snapshot of one resource container, as presentation code reads it.
#[derive(Debug, Clone)]
pub struct ResourceState<T> {
    /// Ordered cache; insertion order is meaningful, newest mutations
    /// are surfaced first.
    pub items: Vec<T>,
    /// The single "current" entity (detail views).
    pub current: Option<T>,
    /// List fetch in flight.
    pub loading: bool,
    /// Mutation in flight.
    pub saving: bool,
    pub error: Option<String>,
    pub last_query: String,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            loading: false,
            saving: false,
            error: None,
            last_query: String::new(),
        }
    }
}

/// The reconciliation cell for one entity domain.
pub(crate) struct Resource<T: Entity> {
    state: watch::Sender<ResourceState<T>>,
    fetch_seq: AtomicU64,
    gate: Mutex<()>,
}

impl<T: Entity> Resource<T> {
    pub(crate) fn new() -> Self {
        let (state, _) = watch::channel(ResourceState::default());
        Self {
            state,
            fetch_seq: AtomicU64::new(0),
            gate: Mutex::new(()),
        }
    }

    // ── Observation ──────────────────────────────────────────────────

    pub(crate) fn snapshot(&self) -> ResourceState<T> {
        self.state.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<ResourceState<T>> {
        self.state.subscribe()
    }

    /// The mutation gate. Held for the full duration of any mutation
    /// operation; `saving` stays advisory for the UI.
    pub(crate) fn gate(&self) -> &Mutex<()> {
        &self.gate
    }

    // ── List fetch ───────────────────────────────────────────────────

    /// Mark a list fetch issued and take its sequence token.
    pub(crate) fn begin_fetch(&self, query: &str) -> u64 {
        let token = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
            s.last_query = query.to_owned();
        });
        token
    }

    /// Reconcile a completed list fetch.
    ///
    /// Stale completions (a newer fetch has been issued since) are
    /// discarded wholesale: the newer fetch owns the `loading` flag
    /// and the cache. On success an empty list is replaced by the
    /// domain's fallback dataset with the error slot left clear; on
    /// failure the error is recorded and the fallback only fills a
    /// still-empty cache.
    pub(crate) fn finish_fetch(
        &self,
        token: u64,
        outcome: Result<Vec<T>, String>,
        fallback: Option<&[T]>,
    ) {
        if token != self.fetch_seq.load(Ordering::SeqCst) {
            debug!(token, "discarding stale list fetch completion");
            return;
        }

        self.state.send_modify(|s| {
            s.loading = false;
            match outcome {
                Ok(items) => {
                    s.items = if items.is_empty() {
                        fallback.map(<[T]>::to_vec).unwrap_or_default()
                    } else {
                        items
                    };
                }
                Err(message) => {
                    s.error = Some(message);
                    if s.items.is_empty() {
                        if let Some(fallback) = fallback {
                            s.items = fallback.to_vec();
                        }
                    }
                }
            }
        });
    }

    // ── Single fetch ─────────────────────────────────────────────────

    pub(crate) fn begin_fetch_one(&self) {
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
            s.current = None;
        });
    }

    /// On success, set `current` and upsert into the cache by identity
    /// (replace in place, append when absent). On failure record the
    /// error; `current` stays empty.
    pub(crate) fn finish_fetch_one(&self, outcome: Result<T, String>) {
        self.state.send_modify(|s| {
            s.loading = false;
            match outcome {
                Ok(entity) => {
                    let key = entity.key();
                    match s.items.iter().position(|e| e.key() == key) {
                        Some(idx) => s.items[idx] = entity.clone(),
                        None => s.items.push(entity.clone()),
                    }
                    s.current = Some(entity);
                }
                Err(message) => s.error = Some(message),
            }
        });
    }

    // ── Mutations ────────────────────────────────────────────────────

    pub(crate) fn begin_save(&self) {
        self.state.send_modify(|s| {
            s.saving = true;
            s.error = None;
        });
    }

    /// Prepend on success (newest-first); the list is untouched on
    /// failure.
    pub(crate) fn finish_create(&self, outcome: Result<T, String>) {
        self.state.send_modify(|s| {
            s.saving = false;
            match outcome {
                Ok(entity) => s.items.insert(0, entity),
                Err(message) => s.error = Some(message),
            }
        });
    }

    /// Replace in place preserving list position; append when the
    /// identity is not cached (defensive fallback).
    pub(crate) fn finish_update(&self, outcome: Result<T, String>) {
        self.state.send_modify(|s| {
            s.saving = false;
            match outcome {
                Ok(entity) => {
                    let key = entity.key();
                    match s.items.iter().position(|e| e.key() == key) {
                        Some(idx) => s.items[idx] = entity,
                        None => s.items.push(entity),
                    }
                }
                Err(message) => s.error = Some(message),
            }
        });
    }

    /// Replace in place only; the operation is ignored entirely when
    /// the identity is absent from the cache (allocate, status change).
    pub(crate) fn finish_replace(&self, outcome: Result<T, String>) {
        self.state.send_modify(|s| {
            s.saving = false;
            match outcome {
                Ok(entity) => {
                    let key = entity.key();
                    if let Some(idx) = s.items.iter().position(|e| e.key() == key) {
                        s.items[idx] = entity;
                    }
                }
                Err(message) => s.error = Some(message),
            }
        });
    }

    /// Remove by identity on success; the list is unchanged on failure.
    pub(crate) fn finish_delete(&self, key: &T::Key, outcome: Result<(), String>) {
        self.state.send_modify(|s| {
            s.saving = false;
            match outcome {
                Ok(()) => s.items.retain(|e| e.key() != *key),
                Err(message) => s.error = Some(message),
            }
        });
    }

    /// Record an error outside the save cycle (the CSV export path).
    pub(crate) fn record_error(&self, message: String) {
        self.state.send_modify(|s| s.error = Some(message));
    }
}
