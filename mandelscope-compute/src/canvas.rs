//! The narrow seam between the engine and whatever presents frames.

use mandelscope_core::Rect;

/// Destination for finished frames.
///
/// The windowing layer owns presentation; the engine only needs to retarget
/// the canvas on resize and hand over finished RGBA frames.
pub trait CanvasSink {
    /// Retarget the canvas to a new raster rectangle.
    fn set_bounds(&mut self, bounds: &Rect);

    /// Accept a full frame: row-major RGBA, row 0 at the bottom.
    fn set_pixels(&mut self, pixels: &[u8]);
}

/// Canvas backed by an owned pixel buffer.
///
/// The presentation layer reads [`BufferCanvas::pixels`] after each engine
/// update and blits it however it likes.
#[derive(Clone, Debug, Default)]
pub struct BufferCanvas {
    bounds: Option<Rect>,
    pixels: Vec<u8>,
}

impl BufferCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounds(&self) -> Option<&Rect> {
        self.bounds.as_ref()
    }

    /// The most recent frame, or an empty slice before the first blit.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl CanvasSink for BufferCanvas {
    fn set_bounds(&mut self, bounds: &Rect) {
        self.bounds = Some(*bounds);
        self.pixels.clear();
    }

    fn set_pixels(&mut self, pixels: &[u8]) {
        self.pixels.clear();
        self.pixels.extend_from_slice(pixels);
    }
}
