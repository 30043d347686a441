//! Error handling types.
//!
//! Per-concern error enums. The pipeline has no fatal errors: lookup
//! failures fall through resolver tiers, persistence failures are logged and
//! the ingestion attempt dropped, and mutations of unknown ids are logged
//! no-ops.

mod types;

pub use types::{DatabaseError, InitializationError, LookupError};
