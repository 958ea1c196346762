//! Device Signal Collection
//!
//! Each collector degrades to omission on failure, never to an error.
//! Omitted signals are skipped during serialization, so an absent value
//! never appears in the hashed canonical string.

use crate::render;
use serde::Serialize;
use std::env;

/// Ordered snapshot of host signals feeding the fingerprint digest.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSignals {
    pub user_agent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_concurrency: Option<usize>,
    /// Approximate memory in GiB, when the host exposes it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_memory: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_touch_points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_depth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_depth: Option<u32>,
    /// Render signature, or the sentinel when rendering is unavailable
    pub canvas_fingerprint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl DeviceSignals {
    /// Collect the signal snapshot for the current host.
    pub fn collect() -> Self {
        Self {
            user_agent: default_user_agent(),
            language: detect_language(),
            platform: format!("{}-{}", env::consts::OS, env::consts::ARCH),
            hardware_concurrency: std::thread::available_parallelism()
                .ok()
                .map(|n| n.get()),
            device_memory: detect_memory_gib(),
            // No native analog to touch points; always omitted.
            max_touch_points: None,
            screen_resolution: detect_screen_resolution(),
            color_depth: detect_color_depth(),
            pixel_depth: detect_color_depth(),
            canvas_fingerprint: render::render_signature(),
            timezone: iana_time_zone::get_timezone().ok(),
        }
    }
}

/// Composed identification string, also submitted alongside the
/// fingerprint at issuance.
pub fn default_user_agent() -> String {
    format!(
        "rewards-client/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        env::consts::OS,
        env::consts::ARCH
    )
}

fn detect_language() -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .find_map(|key| env::var(key).ok())
        .filter(|v| !v.is_empty())
}

fn detect_memory_gib() -> Option<u64> {
    let meminfo = std::fs::read_to_string("/proc/meminfo").ok()?;
    let line = meminfo.lines().find(|l| l.starts_with("MemTotal:"))?;
    let kib: u64 = line.split_whitespace().nth(1)?.parse().ok()?;
    // Round to whole GiB, floor at 1 for any machine that boots.
    Some((kib / (1024 * 1024)).max(1))
}

fn detect_screen_resolution() -> Option<String> {
    let cols: u32 = env::var("COLUMNS").ok()?.parse().ok()?;
    let lines: u32 = env::var("LINES").ok()?.parse().ok()?;
    Some(format!("{}x{}", cols, lines))
}

fn detect_color_depth() -> Option<u32> {
    if env::var("COLORTERM")
        .map(|v| v == "truecolor" || v == "24bit")
        .unwrap_or(false)
    {
        return Some(24);
    }
    match env::var("TERM") {
        Ok(term) if term.contains("256") => Some(8),
        Ok(_) => Some(4),
        Err(_) => None,
    }
}
