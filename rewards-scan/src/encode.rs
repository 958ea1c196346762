//! Reward QR Encoding
//!
//! The reward display renders the QR payload (the JSON string carrying
//! `rewardId` and `discount`) at error-correction level H, either as
//! terminal unicode art or as a PNG written next to the reward code.

use crate::error::{ScanError, ScanResult};
use crate::frame::Frame;
use image::{GrayImage, ImageBuffer, Luma};
use qrcode::render::unicode;
use qrcode::{EcLevel, QrCode};
use std::path::Path;

/// Modules of quiet zone around the rendered code.
const QUIET_ZONE: u32 = 4;

/// An encoded reward QR code.
pub struct RewardQr {
    code: QrCode,
}

impl RewardQr {
    /// Encode a payload at error-correction level H.
    pub fn encode(payload: &str) -> ScanResult<Self> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::H)
            .map_err(|e| ScanError::encode(e.to_string()))?;
        Ok(Self { code })
    }

    /// Render as terminal unicode art.
    pub fn to_unicode(&self) -> String {
        self.code
            .render::<unicode::Dense1x2>()
            .quiet_zone(true)
            .build()
    }

    /// Rasterize to an RGBA frame, `scale` pixels per module.
    pub fn to_frame(&self, scale: u32) -> ScanResult<Frame> {
        let raster = self.rasterize(scale);
        let (width, height) = raster.dimensions();
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for luma in raster.pixels() {
            let v = luma.0[0];
            pixels.extend_from_slice(&[v, v, v, 255]);
        }
        Frame::from_rgba(pixels, width, height)
    }

    /// Write the code as a PNG file.
    pub fn save_png(&self, path: &Path, scale: u32) -> ScanResult<()> {
        self.rasterize(scale)
            .save(path)
            .map_err(|e| ScanError::encode(e.to_string()))
    }

    fn rasterize(&self, scale: u32) -> GrayImage {
        let scale = scale.max(1);
        let modules = self.code.width() as u32;
        let size = (modules + 2 * QUIET_ZONE) * scale;
        let colors = self.code.to_colors();

        ImageBuffer::from_fn(size, size, |x, y| {
            let mx = (x / scale) as i64 - QUIET_ZONE as i64;
            let my = (y / scale) as i64 - QUIET_ZONE as i64;
            let dark = mx >= 0
                && my >= 0
                && (mx as u32) < modules
                && (my as u32) < modules
                && colors[my as usize * modules as usize + mx as usize] == qrcode::Color::Dark;
            if dark {
                Luma([0u8])
            } else {
                Luma([255u8])
            }
        })
    }
}
