//! Prioritized fingerprint rules.
//!
//! Each rule pairs a predicate with a producer, and each concern (OS,
//! browser, device class, device/model) is an ordered slice evaluated
//! first-match-wins. Precedence is data: most-specific rules come first, so
//! derivative tokens win over their parent engines (Edg before Chrome,
//! iPhone before Mac OS X, Android before Linux).

use std::sync::LazyLock;

use regex::Regex;

use super::types::{BrowserInfo, DeviceClass};
use crate::config::UNKNOWN;

/// One detection rule: a predicate over the raw signature and a producer
/// that builds the result from it.
pub(crate) struct Rule<T> {
    pub name: &'static str,
    pub applies: fn(&str) -> bool,
    pub produce: fn(&str) -> T,
}

/// Evaluates an ordered rule list, short-circuiting on the first match.
pub(crate) fn first_match<T>(rules: &[Rule<T>], signature: &str) -> Option<T> {
    rules
        .iter()
        .find(|rule| (rule.applies)(signature))
        .map(|rule| {
            log::trace!("fingerprint rule matched: {}", rule.name);
            (rule.produce)(signature)
        })
}

/// Case-insensitive substring check against the raw signature.
fn token(signature: &str, needle: &str) -> bool {
    signature.to_ascii_lowercase().contains(needle)
}

fn any_token(signature: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| token(signature, n))
}

// --- version extraction patterns ---------------------------------------

static MACOS_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Mac OS X (\d+[._]\d+(?:[._]\d+)?)").unwrap());
static ANDROID_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Android (\d+(?:\.\d+)*)").unwrap());
static IOS_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)OS (\d+[._]\d+(?:[._]\d+)?)").unwrap());

static EDGE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Edge?/(\d+(?:\.\d+)+)").unwrap());
static OPERA_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:Opera|OPR)/(\d+(?:\.\d+)+)").unwrap());
static FIREFOX_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Firefox/(\d+(?:\.\d+)+)").unwrap());
static CHROME_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Chrome/(\d+(?:\.\d+)+)").unwrap());
static SAFARI_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Version/(\d+(?:\.\d+)+)").unwrap());
static IE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:MSIE |rv:)(\d+(?:\.\d+)+)").unwrap());

static IPHONE_MODERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)iPhone1[0-5]").unwrap());
static IPHONE_MID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)iPhone\s?[7-9]").unwrap());

fn capture(re: &Regex, signature: &str) -> Option<String> {
    re.captures(signature)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().replace('_', "."))
}

// --- operating system ----------------------------------------------------

/// Windows NT token to marketing name, most recent first.
const WINDOWS_NT_VERSIONS: &[(&str, &str)] = &[
    ("windows nt 10.0", "Windows 10/11"),
    ("windows nt 6.3", "Windows 8.1"),
    ("windows nt 6.2", "Windows 8"),
    ("windows nt 6.1", "Windows 7"),
    ("windows nt 6.0", "Windows Vista"),
    ("windows nt 5.1", "Windows XP"),
];

fn windows_os(signature: &str) -> String {
    WINDOWS_NT_VERSIONS
        .iter()
        .find(|(nt, _)| token(signature, nt))
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| "Windows".to_string())
}

fn ios_os(signature: &str) -> String {
    capture(&IOS_VERSION, signature)
        .map(|v| format!("iOS {v}"))
        .unwrap_or_else(|| "iOS".to_string())
}

fn android_os(signature: &str) -> String {
    capture(&ANDROID_VERSION, signature)
        .map(|v| format!("Android {v}"))
        .unwrap_or_else(|| "Android".to_string())
}

fn macos_os(signature: &str) -> String {
    capture(&MACOS_VERSION, signature)
        .map(|v| format!("MacOS {v}"))
        .unwrap_or_else(|| "MacOS".to_string())
}

fn linux_os(signature: &str) -> String {
    if token(signature, "ubuntu") {
        "Ubuntu Linux".to_string()
    } else if token(signature, "fedora") {
        "Fedora Linux".to_string()
    } else if token(signature, "debian") {
        "Debian Linux".to_string()
    } else {
        "Linux".to_string()
    }
}

/// OS rules. iOS precedes MacOS ("like Mac OS X" appears in iOS signatures)
/// and Android precedes Linux ("Linux; Android" appears in Android ones).
pub(crate) static OS_RULES: &[Rule<String>] = &[
    Rule {
        name: "windows",
        applies: |s| token(s, "windows"),
        produce: windows_os,
    },
    Rule {
        name: "ios",
        applies: |s| any_token(s, &["iphone", "ipad", "ipod"]),
        produce: ios_os,
    },
    Rule {
        name: "android",
        applies: |s| token(s, "android"),
        produce: android_os,
    },
    Rule {
        name: "macos",
        applies: |s| token(s, "macintosh") || token(s, "mac os x"),
        produce: macos_os,
    },
    Rule {
        name: "linux",
        applies: |s| token(s, "linux"),
        produce: linux_os,
    },
];

// --- browser --------------------------------------------------------------

fn browser(family: &str, re: &Regex, signature: &str) -> BrowserInfo {
    BrowserInfo {
        family: family.to_string(),
        version: capture(re, signature).unwrap_or_default(),
    }
}

/// Browser rules in fixed precedence. Edge and Opera ship Chrome's token and
/// Chrome ships Safari's, so each derivative is tested before its parent.
pub(crate) static BROWSER_RULES: &[Rule<BrowserInfo>] = &[
    Rule {
        name: "edge",
        applies: |s| token(s, "edg"),
        produce: |s| browser("Edge", &EDGE_VERSION, s),
    },
    Rule {
        name: "opera",
        applies: |s| token(s, "opera") || token(s, "opr"),
        produce: |s| browser("Opera", &OPERA_VERSION, s),
    },
    Rule {
        name: "firefox",
        applies: |s| token(s, "firefox"),
        produce: |s| browser("Firefox", &FIREFOX_VERSION, s),
    },
    Rule {
        name: "chrome",
        applies: |s| token(s, "chrome"),
        produce: |s| browser("Chrome", &CHROME_VERSION, s),
    },
    Rule {
        name: "safari",
        applies: |s| token(s, "safari"),
        produce: |s| browser("Safari", &SAFARI_VERSION, s),
    },
    Rule {
        name: "internet-explorer",
        applies: |s| token(s, "msie") || token(s, "trident"),
        produce: |s| browser("Internet Explorer", &IE_VERSION, s),
    },
];

// --- device class ----------------------------------------------------------

/// Class rules: tablet indicators are more specific than the mobile set
/// (an Android signature without the Mobile token is a tablet), so they are
/// tested first. Anything unmatched is a desktop.
pub(crate) static DEVICE_CLASS_RULES: &[Rule<DeviceClass>] = &[
    Rule {
        name: "tablet",
        applies: |s| token(s, "ipad") || (token(s, "android") && !token(s, "mobile")),
        produce: |_| DeviceClass::Tablet,
    },
    Rule {
        name: "mobile",
        applies: |s| {
            any_token(
                s,
                &[
                    "android",
                    "webos",
                    "iphone",
                    "ipod",
                    "blackberry",
                    "iemobile",
                    "opera mini",
                ],
            )
        },
        produce: |_| DeviceClass::Mobile,
    },
];

// --- device type and model ---------------------------------------------------

fn iphone_model(signature: &str) -> String {
    if IPHONE_MODERN.is_match(signature) {
        "iPhone X or newer".to_string()
    } else if IPHONE_MID.is_match(signature) {
        "iPhone 7-9".to_string()
    } else {
        "iPhone (older model)".to_string()
    }
}

fn android_phone_model(signature: &str) -> String {
    if token(signature, "samsung") {
        let mut model = "Samsung".to_string();
        if token(signature, "sm-g") {
            model.push_str(" Galaxy");
        }
        if token(signature, "sm-n") {
            model.push_str(" Note");
        }
        if token(signature, "sm-a") {
            model.push_str(" A Series");
        }
        model
    } else if token(signature, "lg") {
        "LG".to_string()
    } else if token(signature, "pixel") {
        "Google Pixel".to_string()
    } else if token(signature, "oneplus") {
        "OnePlus".to_string()
    } else if token(signature, "xiaomi") {
        "Xiaomi".to_string()
    } else if token(signature, "huawei") {
        "Huawei".to_string()
    } else if token(signature, "oppo") {
        "OPPO".to_string()
    } else if token(signature, "motorola") {
        "Motorola".to_string()
    } else {
        UNKNOWN.to_string()
    }
}

fn ipad_model(signature: &str) -> String {
    if token(signature, "ipad pro") {
        "iPad Pro".to_string()
    } else if token(signature, "ipad air") {
        "iPad Air".to_string()
    } else if token(signature, "ipad mini") {
        "iPad Mini".to_string()
    } else {
        "iPad".to_string()
    }
}

fn android_tablet_model(signature: &str) -> String {
    if token(signature, "samsung") {
        "Samsung Galaxy Tab".to_string()
    } else if token(signature, "pixel") {
        "Google Pixel Tablet".to_string()
    } else if token(signature, "huawei") {
        "Huawei Tablet".to_string()
    } else if token(signature, "lenovo") {
        "Lenovo Tablet".to_string()
    } else if token(signature, "asus") {
        "ASUS Tablet".to_string()
    } else {
        UNKNOWN.to_string()
    }
}

/// Device type + model for a signature already classified as mobile.
pub(crate) fn mobile_device(signature: &str) -> (String, String) {
    if token(signature, "iphone") {
        ("iPhone".to_string(), iphone_model(signature))
    } else if token(signature, "android") {
        ("Android Phone".to_string(), android_phone_model(signature))
    } else {
        // webOS, BlackBerry, etc: class is known but the type is not
        ("Laptop".to_string(), UNKNOWN.to_string())
    }
}

/// Device type + model for a signature already classified as a tablet.
pub(crate) fn tablet_device(signature: &str) -> (String, String) {
    if token(signature, "ipad") {
        ("iPad".to_string(), ipad_model(signature))
    } else if token(signature, "android") {
        ("Android Tablet".to_string(), android_tablet_model(signature))
    } else {
        ("Laptop".to_string(), UNKNOWN.to_string())
    }
}

/// Device type + model for a desktop-class signature.
pub(crate) fn desktop_device(signature: &str) -> (String, String) {
    if token(signature, "windows") {
        let model = if token(signature, "surface") {
            "Microsoft Surface".to_string()
        } else {
            "Windows PC".to_string()
        };
        ("Windows PC".to_string(), model)
    } else if token(signature, "macintosh") || token(signature, "mac os x") {
        if token(signature, "macbook pro") {
            ("MacBook".to_string(), "MacBook Pro".to_string())
        } else if token(signature, "macbook air") {
            ("MacBook".to_string(), "MacBook Air".to_string())
        } else if token(signature, "imac") {
            ("Desktop".to_string(), "iMac".to_string())
        } else if token(signature, "mac mini") {
            ("Desktop".to_string(), "Mac Mini".to_string())
        } else if token(signature, "mac pro") {
            ("Desktop".to_string(), "Mac Pro".to_string())
        } else {
            ("MacBook".to_string(), UNKNOWN.to_string())
        }
    } else if token(signature, "linux") {
        let model = if token(signature, "ubuntu") {
            "Ubuntu PC".to_string()
        } else if token(signature, "fedora") {
            "Fedora PC".to_string()
        } else if token(signature, "debian") {
            "Debian PC".to_string()
        } else if token(signature, "centos") {
            "CentOS PC".to_string()
        } else {
            UNKNOWN.to_string()
        };
        ("Linux PC".to_string(), model)
    } else {
        ("Laptop".to_string(), UNKNOWN.to_string())
    }
}
