//! Device/browser fingerprint resolution.
//!
//! Maps an opaque client signature string (in practice, a User-Agent header)
//! to a structured [`DeviceDescriptor`]. Resolution is pure and total: any
//! input, including empty or unrecognized strings, produces a fully
//! populated descriptor with "Unknown"/"Desktop"/"Laptop" fallbacks.
//!
//! Detection is driven by the prioritized rule lists in [`rules`], not
//! nested conditionals, so precedence can be inspected and tested as data.

mod rules;
#[cfg(test)]
mod tests;
mod types;

pub use types::DeviceDescriptor;

use rules::{desktop_device, first_match, mobile_device, tablet_device};
use types::DeviceClass;

/// Resolves a client signature into a device descriptor.
///
/// Never fails; unmatched concerns keep their defaults. Deterministic for a
/// given input, with no network or persistent I/O.
pub fn resolve(signature: &str) -> DeviceDescriptor {
    let mut descriptor = DeviceDescriptor::default();

    if let Some(os) = first_match(rules::OS_RULES, signature) {
        descriptor.operating_system = os;
    }

    if let Some(browser) = first_match(rules::BROWSER_RULES, signature) {
        descriptor.browser = browser.family;
        descriptor.browser_version = browser.version;
    }

    let class = first_match(rules::DEVICE_CLASS_RULES, signature).unwrap_or(DeviceClass::Desktop);
    let (device_type, model) = match class {
        DeviceClass::Mobile => {
            descriptor.device = "Mobile".to_string();
            mobile_device(signature)
        }
        DeviceClass::Tablet => {
            descriptor.device = "Tablet".to_string();
            tablet_device(signature)
        }
        DeviceClass::Desktop => desktop_device(signature),
    };
    descriptor.device_type = device_type;
    descriptor.model = model;

    descriptor
}
