//! Captured Frame

use crate::error::{ScanError, ScanResult};

/// One captured video frame as raw RGBA pixels.
#[derive(Clone, Debug)]
pub struct Frame {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl Frame {
    /// Wrap an RGBA buffer, validating its geometry.
    pub fn from_rgba(pixels: Vec<u8>, width: u32, height: u32) -> ScanResult<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(ScanError::invalid_frame(format!(
                "expected {} bytes for {}x{} RGBA, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Greyscale value at (x, y) using integer Rec.601 weights.
    pub fn luma(&self, x: u32, y: u32) -> u8 {
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let r = self.pixels[offset] as u32;
        let g = self.pixels[offset + 1] as u32;
        let b = self.pixels[offset + 2] as u32;
        ((299 * r + 587 * g + 114 * b) / 1000) as u8
    }
}
