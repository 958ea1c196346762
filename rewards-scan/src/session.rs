//! Scan Session Lifecycle
//!
//! The frame source (a camera in spirit, an image file or test double
//! in practice) is the one resource in the client with mandatory scoped
//! release. A [`ScanSession`] takes exclusive ownership of its source,
//! gates captures so at most one attempt is in flight, and releases the
//! source on every exit path: explicit stop, fatal source error, or
//! drop.

use crate::decode::decode_frame;
use crate::error::{ScanError, ScanResult};
use crate::frame::Frame;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Provider of captured frames.
pub trait FrameSource {
    /// Human-readable source name for logs and prompts
    fn label(&self) -> &str;

    /// Capture one frame
    fn grab(&mut self) -> ScanResult<Frame>;

    /// Release the underlying resource. Called at most once.
    fn release(&mut self);
}

/// Frame source backed by a still image, re-read on every trigger.
///
/// This is the CLI's capture device: the operator points a phone camera
/// app or a webcam utility at the code, saves a still, and triggers a
/// decode attempt against that file.
pub struct ImageFileSource {
    path: PathBuf,
    label: String,
}

impl ImageFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = format!("image:{}", path.display());
        Self { path, label }
    }
}

impl FrameSource for ImageFileSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn grab(&mut self) -> ScanResult<Frame> {
        let decoded = image::open(&self.path)
            .map_err(|e| ScanError::source_unavailable(e.to_string()))?
            .to_rgba8();
        let (width, height) = decoded.dimensions();
        Frame::from_rgba(decoded.into_raw(), width, height)
    }

    fn release(&mut self) {
        // Nothing held between grabs; the file handle closes per read.
    }
}

/// Outcome of one capture attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum Capture {
    /// A QR code was decoded to this payload
    Found(String),
    /// No code in the frame; the session stays open for another attempt
    NothingDetected,
}

/// Exclusive owner of a frame source while scanning is active.
pub struct ScanSession {
    source: Option<Box<dyn FrameSource>>,
    busy: bool,
}

impl ScanSession {
    /// Open a session, taking exclusive ownership of the source.
    pub fn open(source: Box<dyn FrameSource>) -> Self {
        info!(source = source.label(), "scan session opened");
        Self {
            source: Some(source),
            busy: false,
        }
    }

    /// Whether the session can still capture.
    pub fn is_active(&self) -> bool {
        self.source.is_some()
    }

    /// Grab one frame and attempt a decode.
    ///
    /// A source failure is fatal: the session stops (releasing the
    /// source) before the error is returned. A frame without a code is
    /// the normal [`Capture::NothingDetected`] outcome.
    pub fn capture(&mut self) -> ScanResult<Capture> {
        self.begin_attempt()?;
        let result = self.grab_and_decode();
        self.busy = false;

        match result {
            Ok(Some(payload)) => {
                debug!("qr payload decoded");
                Ok(Capture::Found(payload))
            }
            Ok(None) => Ok(Capture::NothingDetected),
            Err(e) => {
                warn!(error = %e, "frame source failed, stopping session");
                self.stop();
                Err(e)
            }
        }
    }

    /// Stop the session and release the source. Idempotent.
    pub fn stop(&mut self) {
        if let Some(mut source) = self.source.take() {
            source.release();
            info!(source = source.label(), "scan session stopped");
        }
        self.busy = false;
    }

    fn begin_attempt(&mut self) -> ScanResult<()> {
        if self.source.is_none() {
            return Err(ScanError::Stopped);
        }
        if self.busy {
            return Err(ScanError::Busy);
        }
        self.busy = true;
        Ok(())
    }

    fn grab_and_decode(&mut self) -> ScanResult<Option<String>> {
        let source = self.source.as_mut().ok_or(ScanError::Stopped)?;
        let frame = source.grab()?;
        Ok(decode_frame(&frame))
    }
}

impl Drop for ScanSession {
    fn drop(&mut self) {
        self.stop();
    }
}
