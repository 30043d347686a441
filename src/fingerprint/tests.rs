use super::*;

const WINDOWS_CHROME: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const MAC_SAFARI: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15";
const IPHONE_SAFARI: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1";
const PIXEL_CHROME: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.6099.144 Mobile Safari/537.36";
const IPAD_SAFARI: &str = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.6 Mobile/15E148 Safari/604.1";
const WINDOWS_EDGE: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.2210.91";
const LINUX_FIREFOX: &str = "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";
const SAMSUNG_CHROME: &str = "Mozilla/5.0 (Linux; Android 13; SAMSUNG SM-G991B) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Mobile Safari/537.36";
const OPERA_DESKTOP: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36 OPR/105.0.0.0";

#[test]
fn windows_chrome_desktop() {
    let d = resolve(WINDOWS_CHROME);
    assert_eq!(d.operating_system, "Windows 10/11");
    assert_eq!(d.browser, "Chrome");
    assert_eq!(d.browser_version, "120.0.0.0");
    assert_eq!(d.device, "Desktop");
    assert_eq!(d.device_type, "Windows PC");
    assert_eq!(d.model, "Windows PC");
}

#[test]
fn mac_safari_version_underscores_normalized() {
    let d = resolve(MAC_SAFARI);
    assert_eq!(d.operating_system, "MacOS 10.15.7");
    assert_eq!(d.browser, "Safari");
    assert_eq!(d.browser_version, "17.1");
    assert_eq!(d.device_type, "MacBook");
}

#[test]
fn iphone_is_ios_not_macos() {
    // iOS signatures carry "like Mac OS X"; the iOS rule must win
    let d = resolve(IPHONE_SAFARI);
    assert_eq!(d.operating_system, "iOS 16.6");
    assert_eq!(d.device, "Mobile");
    assert_eq!(d.device_type, "iPhone");
    assert_eq!(d.model, "iPhone (older model)");
}

#[test]
fn android_phone_is_android_not_linux() {
    // Android signatures carry "Linux;"; the Android rule must win
    let d = resolve(PIXEL_CHROME);
    assert_eq!(d.operating_system, "Android 14");
    assert_eq!(d.device, "Mobile");
    assert_eq!(d.device_type, "Android Phone");
    assert_eq!(d.model, "Google Pixel");
}

#[test]
fn ipad_is_tablet() {
    let d = resolve(IPAD_SAFARI);
    assert_eq!(d.device, "Tablet");
    assert_eq!(d.device_type, "iPad");
    assert_eq!(d.model, "iPad");
    assert_eq!(d.operating_system, "iOS 16.6");
}

#[test]
fn android_without_mobile_token_is_tablet() {
    let sig = "Mozilla/5.0 (Linux; Android 13; SAMSUNG SM-X906C) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";
    let d = resolve(sig);
    assert_eq!(d.device, "Tablet");
    assert_eq!(d.device_type, "Android Tablet");
    assert_eq!(d.model, "Samsung Galaxy Tab");
}

#[test]
fn edge_wins_over_chrome() {
    let d = resolve(WINDOWS_EDGE);
    assert_eq!(d.browser, "Edge");
    assert_eq!(d.browser_version, "120.0.2210.91");
}

#[test]
fn opera_wins_over_chrome() {
    let d = resolve(OPERA_DESKTOP);
    assert_eq!(d.browser, "Opera");
    assert_eq!(d.browser_version, "105.0.0.0");
}

#[test]
fn ubuntu_firefox() {
    let d = resolve(LINUX_FIREFOX);
    assert_eq!(d.operating_system, "Ubuntu Linux");
    assert_eq!(d.browser, "Firefox");
    assert_eq!(d.browser_version, "121.0");
    assert_eq!(d.device_type, "Linux PC");
    assert_eq!(d.model, "Ubuntu PC");
}

#[test]
fn samsung_galaxy_model_suffix() {
    let d = resolve(SAMSUNG_CHROME);
    assert_eq!(d.model, "Samsung Galaxy");
    assert_eq!(d.device_type, "Android Phone");
}

#[test]
fn empty_signature_yields_defaults() {
    let d = resolve("");
    assert_eq!(d.operating_system, "Unknown");
    assert_eq!(d.browser, "Unknown");
    assert_eq!(d.browser_version, "");
    assert_eq!(d.device, "Desktop");
    assert_eq!(d.device_type, "Laptop");
    assert_eq!(d.model, "Unknown");
}

#[test]
fn garbage_signature_fully_populated() {
    for sig in ["{}{}%%", "curl/8.4.0", "🤖", "a".repeat(10_000).as_str()] {
        let d = resolve(sig);
        assert!(!d.operating_system.is_empty());
        assert!(!d.browser.is_empty());
        assert!(!d.device.is_empty());
        assert!(!d.device_type.is_empty());
        assert!(!d.model.is_empty());
    }
}

#[test]
fn resolution_is_deterministic() {
    assert_eq!(resolve(PIXEL_CHROME), resolve(PIXEL_CHROME));
}
