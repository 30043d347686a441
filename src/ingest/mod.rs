//! Visit ingestion: the per-session guard and the tracking pipeline.

mod guard;
mod tracker;

pub use guard::{IngestionGuard, MemorySessionStore, SessionStore};
pub use tracker::{new_session_id, Tracker};
