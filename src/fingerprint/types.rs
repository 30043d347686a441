//! Fingerprint data structures.

use serde::{Deserialize, Serialize};

use crate::config::UNKNOWN;

/// Structured device/browser descriptor derived from a client signature.
///
/// Every field is always populated: resolution never fails, it degrades to
/// the defaults below. `browser_version` is the one field whose "unknown"
/// value is the empty string rather than a sentinel, matching how version
/// tokens are rendered (`v1.2.3` suffix or nothing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    /// Operating system family, possibly with an embedded version ("Windows 10/11", "iOS 16.6")
    pub operating_system: String,
    /// Browser family ("Chrome", "Firefox", ...)
    pub browser: String,
    /// Browser version extracted from the signature, or empty
    pub browser_version: String,
    /// Device class: "Mobile", "Tablet", or "Desktop"
    pub device: String,
    /// Device type within the class ("iPhone", "Android Tablet", "Windows PC", ...)
    pub device_type: String,
    /// Free-text model guess ("Google Pixel", "iPad Pro", ...), heuristic only
    pub model: String,
}

impl Default for DeviceDescriptor {
    fn default() -> Self {
        Self {
            operating_system: UNKNOWN.to_string(),
            browser: UNKNOWN.to_string(),
            browser_version: String::new(),
            device: "Desktop".to_string(),
            device_type: "Laptop".to_string(),
            model: UNKNOWN.to_string(),
        }
    }
}

/// Browser family plus extracted version, produced by a browser rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BrowserInfo {
    pub family: String,
    pub version: String,
}

/// Device class produced by the class rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}
