//! Render Signature
//!
//! Native analog of the browser canvas fingerprint: a fixed scene is
//! drawn onto an in-memory raster, PNG-encoded, base64-wrapped behind a
//! data-URI prefix, and the final 50 characters of that string become
//! the sub-fingerprint. Text is stamped with a deterministic
//! per-character glyph pattern rather than a font, so the output is
//! stable across hosts with the same rendering code.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{DynamicImage, ImageBuffer, ImageOutputFormat, Rgba, RgbaImage};
use rewards_core::constants::{RENDER_SIGNATURE_LEN, RENDER_UNSUPPORTED};
use std::io::Cursor;
use tracing::debug;

const SCENE_WIDTH: u32 = 300;
const SCENE_HEIGHT: u32 = 60;
const SCENE_TEXT: &str = "Canvas Fingerprint";

const GLYPH_WIDTH: i64 = 6;
const GLYPH_HEIGHT: i64 = 10;

/// Produce the render signature, substituting the sentinel if any part
/// of the raster or encode path fails.
pub fn render_signature() -> String {
    match try_render() {
        Ok(signature) => signature,
        Err(e) => {
            debug!(error = %e, "render signature unavailable, using sentinel");
            RENDER_UNSUPPORTED.to_string()
        }
    }
}

fn try_render() -> Result<String, image::ImageError> {
    let mut scene: RgbaImage =
        ImageBuffer::from_pixel(SCENE_WIDTH, SCENE_HEIGHT, Rgba([255, 255, 255, 255]));

    fill_rect(&mut scene, 125, 1, 62, 20, [255, 102, 0]);
    stamp_text(&mut scene, SCENE_TEXT, 2, 15, [0, 102, 153], 1.0);
    stamp_text(&mut scene, SCENE_TEXT, 4, 17, [102, 204, 0], 0.7);

    let mut png = Vec::new();
    DynamicImage::ImageRgba8(scene).write_to(&mut Cursor::new(&mut png), ImageOutputFormat::Png)?;

    let data_uri = format!("data:image/png;base64,{}", STANDARD.encode(&png));
    let start = data_uri.len().saturating_sub(RENDER_SIGNATURE_LEN);
    Ok(data_uri[start..].to_string())
}

fn fill_rect(scene: &mut RgbaImage, x0: i64, y0: i64, w: i64, h: i64, rgb: [u8; 3]) {
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            blend_pixel(scene, x, y, rgb, 1.0);
        }
    }
}

fn stamp_text(scene: &mut RgbaImage, text: &str, x0: i64, baseline: i64, rgb: [u8; 3], alpha: f32) {
    for (index, byte) in text.bytes().enumerate() {
        let origin_x = x0 + index as i64 * (GLYPH_WIDTH + 1);
        let origin_y = baseline - GLYPH_HEIGHT + 2;
        stamp_glyph(scene, byte, origin_x, origin_y, rgb, alpha);
    }
}

/// Deterministic glyph: which cells of the 6x10 grid are filled depends
/// only on the character byte and the cell coordinates.
fn stamp_glyph(scene: &mut RgbaImage, byte: u8, x0: i64, y0: i64, rgb: [u8; 3], alpha: f32) {
    if byte == b' ' {
        return;
    }
    for dy in 0..GLYPH_HEIGHT {
        for dx in 0..GLYPH_WIDTH {
            let seed = (byte as i64)
                .wrapping_mul(31)
                .wrapping_add(dx * 7)
                .wrapping_add(dy * 13);
            if seed.rem_euclid(3) == 0 {
                blend_pixel(scene, x0 + dx, y0 + dy, rgb, alpha);
            }
        }
    }
}

fn blend_pixel(scene: &mut RgbaImage, x: i64, y: i64, rgb: [u8; 3], alpha: f32) {
    if x < 0 || y < 0 || x >= scene.width() as i64 || y >= scene.height() as i64 {
        return;
    }
    let pixel = scene.get_pixel_mut(x as u32, y as u32);
    for channel in 0..3 {
        let src = rgb[channel] as f32;
        let dst = pixel.0[channel] as f32;
        pixel.0[channel] = (src * alpha + dst * (1.0 - alpha)).round() as u8;
    }
    pixel.0[3] = 255;
}
