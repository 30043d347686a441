//! Location data structures and response parsing.

use serde::{Deserialize, Serialize};

use crate::config::UNKNOWN;
use crate::error_handling::LookupError;

/// Best-effort network location of a visitor.
///
/// Every field is always populated; lookup failure degrades to the
/// "Unknown"/0,0 defaults rather than an absent value. `0,0` coordinates are
/// valid-but-suspicious, not an error state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationResult {
    /// Public network identifier, or a sentinel when unknown
    pub network_address: String,
    /// Country name, "Unknown" when unresolved
    pub country: String,
    /// City name, "Unknown" when unresolved
    pub city: String,
    /// Latitude in [-90, 90]
    pub latitude: f64,
    /// Longitude in [-180, 180]
    pub longitude: f64,
}

impl LocationResult {
    /// A result carrying only a network address, location fields defaulted.
    pub fn address_only(network_address: String) -> Self {
        Self {
            network_address,
            country: UNKNOWN.to_string(),
            city: UNKNOWN.to_string(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

/// A coordinate that the lookup service may encode as a number or a
/// numeric string. Unparseable text degrades to 0.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    fn value(&self) -> f64 {
        match self {
            Coordinate::Number(n) => *n,
            Coordinate::Text(s) => s.trim().parse().unwrap_or(0.0),
        }
    }
}

/// Tier-1 response shape: geolocation by requester address.
#[derive(Debug, Deserialize)]
struct GeoResponse {
    ip: Option<String>,
    country_name: Option<String>,
    country: Option<String>,
    city: Option<String>,
    latitude: Option<Coordinate>,
    longitude: Option<Coordinate>,
}

/// Tier-2 response shape: public address only.
#[derive(Debug, Deserialize)]
struct AddressResponse {
    ip: Option<String>,
}

/// Parses a tier-1 geolocation response.
///
/// Absence of the `ip` field counts as failure; every other field is
/// individually defaulted when missing.
pub(crate) fn parse_geolocation(body: &str) -> Result<LocationResult, LookupError> {
    let response: GeoResponse = serde_json::from_str(body)?;
    let network_address = match response.ip {
        Some(ip) if !ip.is_empty() => ip,
        _ => return Err(LookupError::MissingAddress),
    };

    Ok(LocationResult {
        network_address,
        country: response
            .country_name
            .or(response.country)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        city: response
            .city
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| UNKNOWN.to_string()),
        latitude: bounded(response.latitude, 90.0),
        longitude: bounded(response.longitude, 180.0),
    })
}

/// A coordinate outside its valid range (or NaN) is a failed resolution of
/// that field and degrades to the 0 default.
fn bounded(coordinate: Option<Coordinate>, limit: f64) -> f64 {
    coordinate
        .map(|c| c.value())
        .filter(|v| (-limit..=limit).contains(v))
        .unwrap_or(0.0)
}

/// Parses a tier-2 address-only response.
pub(crate) fn parse_address_only(body: &str) -> Result<LocationResult, LookupError> {
    let response: AddressResponse = serde_json::from_str(body)?;
    match response.ip {
        Some(ip) if !ip.is_empty() => Ok(LocationResult::address_only(ip)),
        _ => Err(LookupError::MissingAddress),
    }
}
