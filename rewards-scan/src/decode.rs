//! QR Decode Routine
//!
//! One frame in, one optional payload out. A frame without a decodable
//! QR code returns `None` - expected and common, the caller simply
//! retries on the next user-triggered capture.

use crate::frame::Frame;
use tracing::debug;

/// Attempt QR detection on a single captured frame.
pub fn decode_frame(frame: &Frame) -> Option<String> {
    let width = frame.width() as usize;
    let height = frame.height() as usize;
    if width == 0 || height == 0 {
        return None;
    }

    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(width, height, |x, y| {
        frame.luma(x as u32, y as u32)
    });

    let grids = prepared.detect_grids();
    debug!(grids = grids.len(), "frame prepared for decode");

    for grid in grids {
        match grid.decode() {
            Ok((_meta, content)) => return Some(content),
            // A located grid that fails to decode is still "no code".
            Err(e) => debug!(error = %e, "grid located but decode failed"),
        }
    }
    None
}
