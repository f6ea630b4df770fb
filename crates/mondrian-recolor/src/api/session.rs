//! Session -- the trigger contract around the compositor.
//!
//! [`Session`] pairs one source image with the last published frame and
//! exposes the two triggers a front end needs: recompute with a snapshot, and
//! reset.

use std::sync::Arc;

use crate::image::{Frame, SourceImage};
use crate::params::Snapshot;
use crate::pipeline::Compositor;

/// Single-owner recoloring session.
///
/// The published frame is replaced only after a pass completes, and handed
/// out as an `Arc` so readers keep a consistent frame even while a new one is
/// being published.
///
/// # Example
///
/// ```
/// use mondrian_recolor::{Reference, Rgb, Session, Snapshot, SourceImage};
///
/// let source = SourceImage::from_rgb(2, 1, &[255, 0, 0, 10, 10, 10]).unwrap();
/// let mut session = Session::new(source);
///
/// let snapshot = Snapshot::new(Rgb::new(200, 200, 200))
///     .substitute(Reference::Red, Rgb::new(0, 255, 0));
/// session.request_recompute(&snapshot);
/// assert_eq!(session.frame().pixel(0, 0), Some([0, 255, 0, 255]));
///
/// session.request_reset();
/// assert_eq!(session.frame().pixel(0, 0), Some([255, 0, 0, 255]));
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    source: Arc<SourceImage>,
    frame: Arc<Frame>,
}

impl Session {
    /// Start a session; the initial frame is the reset frame.
    pub fn new(source: impl Into<Arc<SourceImage>>) -> Self {
        let source = source.into();
        let frame = Arc::new(Compositor::reset(&source));
        Self { source, frame }
    }

    /// Run a full pass with `snapshot` and publish the result.
    pub fn request_recompute(&mut self, snapshot: &Snapshot) -> Arc<Frame> {
        let frame = Arc::new(Compositor::recompute(&self.source, snapshot));
        self.frame = frame.clone();
        frame
    }

    /// Publish an exact copy of the source (alpha forced opaque).
    pub fn request_reset(&mut self) -> Arc<Frame> {
        let frame = Arc::new(Compositor::reset(&self.source));
        self.frame = frame.clone();
        frame
    }

    /// The last published frame.
    #[inline]
    pub fn frame(&self) -> Arc<Frame> {
        self.frame.clone()
    }

    /// The immutable source image.
    #[inline]
    pub fn source(&self) -> &Arc<SourceImage> {
        &self.source
    }
}
