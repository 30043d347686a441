//! The ordered lookup tier chain.
//!
//! Each tier is data: a name, an endpoint, and a parser. The combinator
//! walks the list in order and consults the next tier only after the
//! previous one fails, never in parallel. When every tier fails, a
//! synthetic placeholder result is produced so callers never branch on
//! "no location".

use rand::Rng;

use super::types::{parse_address_only, parse_geolocation, LocationResult};
use crate::config::{Config, DEMO_ADDRESS, DEMO_CITY, DEMO_COUNTRY};
use crate::error_handling::LookupError;

/// One attempt in the ordered lookup sequence.
pub struct LookupTier {
    /// Short name used in logs
    pub name: &'static str,
    /// Endpoint queried with a plain GET
    pub endpoint: String,
    parse: fn(&str) -> Result<LocationResult, LookupError>,
}

impl LookupTier {
    /// A geolocation-by-requester-address tier (tier 1 shape).
    pub fn geolocation(endpoint: impl Into<String>) -> Self {
        Self {
            name: "geolocation",
            endpoint: endpoint.into(),
            parse: parse_geolocation,
        }
    }

    /// A public-address-only tier (tier 2 shape).
    pub fn address_only(endpoint: impl Into<String>) -> Self {
        Self {
            name: "address-only",
            endpoint: endpoint.into(),
            parse: parse_address_only,
        }
    }
}

/// The production tier chain for a configuration.
pub fn lookup_tiers(config: &Config) -> Vec<LookupTier> {
    vec![
        LookupTier::geolocation(config.primary_lookup_url.clone()),
        LookupTier::address_only(config.secondary_lookup_url.clone()),
    ]
}

/// Resolves the visitor's network location through the tier chain.
///
/// Never fails outward: each tier's failure is logged and swallowed, and
/// when the whole chain is exhausted a synthetic placeholder takes its
/// place. Tiers run strictly in sequence.
pub async fn resolve_location(client: &reqwest::Client, tiers: &[LookupTier]) -> LocationResult {
    for tier in tiers {
        match try_tier(client, tier).await {
            Ok(location) => {
                log::debug!(
                    "resolved visitor location via {} lookup ({})",
                    tier.name,
                    location.network_address
                );
                return location;
            }
            Err(e) => {
                log::warn!("{} lookup failed, falling through: {e}", tier.name);
            }
        }
    }

    log::warn!("all location lookups failed, using synthetic placeholder");
    synthetic_location()
}

async fn try_tier(
    client: &reqwest::Client,
    tier: &LookupTier,
) -> Result<LocationResult, LookupError> {
    let response = client.get(&tier.endpoint).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::Status(status.as_u16()));
    }
    let body = response.text().await?;
    (tier.parse)(&body)
}

/// Placeholder result with demo sentinels and pseudo-random coordinates
/// inside valid ranges.
pub(crate) fn synthetic_location() -> LocationResult {
    let mut rng = rand::rng();
    LocationResult {
        network_address: DEMO_ADDRESS.to_string(),
        country: DEMO_COUNTRY.to_string(),
        city: DEMO_CITY.to_string(),
        latitude: rng.random_range(-90.0..=90.0),
        longitude: rng.random_range(-180.0..=180.0),
    }
}
