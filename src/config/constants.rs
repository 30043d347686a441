//! Configuration constants.
//!
//! Central location for sentinels, lookup endpoints, timing intervals,
//! and other fixed values used throughout the application.

use std::time::Duration;

/// Sentinel used wherever an optional field could not be resolved.
pub const UNKNOWN: &str = "Unknown";

/// Primary lookup: geolocation-by-requester-address endpoint (JSON).
pub const PRIMARY_LOOKUP_URL: &str = "https://ipapi.co/json/";

/// Secondary lookup: public-address-only endpoint (JSON).
pub const SECONDARY_LOOKUP_URL: &str = "https://api.ipify.org?format=json";

/// Synthetic placeholder values returned when every lookup tier fails.
pub const DEMO_ADDRESS: &str = "Demo IP";
pub const DEMO_CITY: &str = "Demo City";
pub const DEMO_COUNTRY: &str = "Demo Country";

/// Interval between dashboard snapshot refreshes.
pub const DASHBOARD_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// Timeout applied to each outbound lookup request.
pub const LOOKUP_TIMEOUT_SECS: u64 = 10;

/// Name of the browsing-session cookie issued by the tracking endpoint.
pub const SESSION_COOKIE: &str = "vs_session";

/// Length of the random portion of generated session ids and record ids.
pub const RANDOM_ID_LEN: usize = 9;

/// Default SQLite database path.
pub const DB_PATH: &str = "./visitor_status.db";

/// Default operator credentials, a stand-in rather than real authentication.
/// Override via VISITOR_ADMIN_USER / VISITOR_ADMIN_PASS.
pub const DEFAULT_ADMIN_USER: &str = "admin";
pub const DEFAULT_ADMIN_PASS: &str = "cybersecure123";

/// Environment variable names for the operator credential pair.
pub const ADMIN_USER_ENV: &str = "VISITOR_ADMIN_USER";
pub const ADMIN_PASS_ENV: &str = "VISITOR_ADMIN_PASS";

/// Headers carrying operator credentials on `/api` requests.
pub const ADMIN_USER_HEADER: &str = "x-admin-user";
pub const ADMIN_PASS_HEADER: &str = "x-admin-pass";

/// User-Agent sent on outbound lookup requests.
pub const OUTBOUND_USER_AGENT: &str = concat!("visitor_status/", env!("CARGO_PKG_VERSION"));
