//! Protocol Constants

/// Number of hex characters kept from the fingerprint digest.
///
/// 96 bits of a SHA-256 digest. The fingerprint is a soft heuristic
/// identifier, so the truncation trades collision resistance for a
/// shorter transport string; collision handling stays server-side.
pub const FINGERPRINT_HEX_LEN: usize = 24;

/// Length of the render-signature suffix kept from the encoded raster.
pub const RENDER_SIGNATURE_LEN: usize = 50;

/// Sentinel used when the render-signature raster cannot be produced.
pub const RENDER_UNSUPPORTED: &str = "canvas-unsupported";

/// Seconds in one day, used for the `days_remaining` derivation.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Default wait after the review hand-off before issuance, in milliseconds.
///
/// The flow is trust-based: there is no proof a review was posted, only
/// that the hand-off happened and this delay elapsed.
pub const DEFAULT_REVIEW_DELAY_MS: u64 = 500;
