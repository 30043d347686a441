//! Network location resolution.
//!
//! Resolves the visitor's best-effort public address and geolocation
//! through an ordered chain of external lookup tiers with graceful
//! degradation. The external contract is "always returns a
//! [`LocationResult`]": no tier failure propagates past this module.

mod tiers;
mod types;

pub use tiers::{lookup_tiers, resolve_location, LookupTier};
pub use types::LocationResult;
