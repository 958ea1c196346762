//! Device Fingerprint Generator
//!
//! Derives a stable, non-PII, semi-unique identifier for the calling
//! device: an ordered snapshot of host signals is serialized to
//! canonical JSON, hashed with SHA-256, and the hex digest truncated to
//! 24 characters.
//!
//! The fingerprint is a heuristic, not a cryptographic identity. Same
//! device and same environment give the same value with high
//! probability; an OS update or locale change may shift it, which is an
//! accepted limitation. Nothing is persisted - the fingerprint is
//! recomputed on every use.

pub mod render;
pub mod signals;

pub use signals::DeviceSignals;

use rewards_core::canon;
use rewards_core::constants::FINGERPRINT_HEX_LEN;

/// Generate the fingerprint for the current device.
///
/// Never fails: individual signal collectors degrade to omission, and a
/// serialization failure degrades to a fixed fallback input.
pub fn generate() -> String {
    let signals = DeviceSignals::collect();
    fingerprint_of(&signals)
}

/// Fingerprint of an explicit signal set.
pub fn fingerprint_of(signals: &DeviceSignals) -> String {
    let bytes = canon::stable_json_bytes(signals)
        .unwrap_or_else(|_| b"signals-unavailable".to_vec());
    let mut hex = canon::digest_hex(&bytes);
    hex.truncate(FINGERPRINT_HEX_LEN);
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthetic_signals() -> DeviceSignals {
        DeviceSignals {
            user_agent: "rewards-client/0.1.0 (linux; x86_64)".to_string(),
            language: Some("en-GB".to_string()),
            platform: "linux-x86_64".to_string(),
            hardware_concurrency: Some(8),
            device_memory: Some(16),
            max_touch_points: None,
            screen_resolution: Some("1920x1080".to_string()),
            color_depth: Some(24),
            pixel_depth: Some(24),
            canvas_fingerprint: "deadbeef".to_string(),
            timezone: Some("Europe/London".to_string()),
        }
    }

    #[test]
    fn test_fingerprint_is_24_lowercase_hex() {
        let fp = fingerprint_of(&synthetic_signals());
        assert_eq!(fp.len(), FINGERPRINT_HEX_LEN);
        assert!(fp
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_same_signals_same_fingerprint() {
        let signals = synthetic_signals();
        assert_eq!(fingerprint_of(&signals), fingerprint_of(&signals));
    }

    #[test]
    fn test_repeated_generation_is_stable() {
        // Environment is unchanged between two rapid calls.
        assert_eq!(generate(), generate());
    }

    #[test]
    fn test_single_signal_change_changes_fingerprint() {
        let base = synthetic_signals();
        let mut changed = synthetic_signals();
        changed.screen_resolution = Some("1280x720".to_string());
        assert_ne!(fingerprint_of(&base), fingerprint_of(&changed));
    }

    #[test]
    fn test_omitted_signal_differs_from_present() {
        let base = synthetic_signals();
        let mut omitted = synthetic_signals();
        omitted.device_memory = None;
        assert_ne!(fingerprint_of(&base), fingerprint_of(&omitted));
    }
}
