//! Per-session ingestion admission gate.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Session-scoped flag storage, injected into the guard so the admission
/// check can be exercised without a live server.
pub trait SessionStore: Send + Sync {
    /// True if the session has already produced a ledger entry.
    fn is_tracked(&self, session_id: &str) -> bool;
    /// Records that the session has produced a ledger entry.
    fn mark_tracked(&self, session_id: &str);
}

/// In-memory session store keyed by session id.
#[derive(Default)]
pub struct MemorySessionStore {
    tracked: Mutex<HashSet<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears a session's flag, as happens when a browsing session ends.
    pub fn end_session(&self, session_id: &str) {
        self.tracked
            .lock()
            .expect("session store lock poisoned")
            .remove(session_id);
    }
}

impl SessionStore for MemorySessionStore {
    fn is_tracked(&self, session_id: &str) -> bool {
        self.tracked
            .lock()
            .expect("session store lock poisoned")
            .contains(session_id)
    }

    fn mark_tracked(&self, session_id: &str) {
        self.tracked
            .lock()
            .expect("session store lock poisoned")
            .insert(session_id.to_string());
    }
}

/// At-most-once-per-session admission gate for visit ingestion.
///
/// Not a global dedup: the same physical visitor in a new session is
/// tracked again. The check-then-mark sequence is not atomic; concurrent
/// ingestion attempts in one session can both pass, which only affects
/// analytics accuracy, never the correctness of blocking.
pub struct IngestionGuard {
    store: Arc<dyn SessionStore>,
}

impl IngestionGuard {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// True when the session has not been tracked yet.
    pub fn should_track(&self, session_id: &str) -> bool {
        !self.store.is_tracked(session_id)
    }

    /// Marks the session as tracked.
    pub fn mark_tracked(&self, session_id: &str) {
        self.store.mark_tracked(session_id);
    }
}
