//! Rewards Scan
//!
//! QR handling for the rewards protocol:
//!
//! - [`decode::decode_frame`] extracts a text payload from a captured
//!   RGBA frame; a frame with no code is a normal outcome, not an error
//! - [`encode::RewardQr`] renders the reward QR payload for display
//! - [`session::ScanSession`] owns the frame source while scanning is
//!   active and guarantees its release on every exit path
//!
//! Capture is manually triggered per attempt; there is no continuous
//! scan loop.

pub mod decode;
pub mod encode;
pub mod error;
pub mod frame;
pub mod session;

pub use decode::decode_frame;
pub use encode::RewardQr;
pub use error::{ScanError, ScanResult};
pub use frame::Frame;
pub use session::{Capture, FrameSource, ImageFileSource, ScanSession};
