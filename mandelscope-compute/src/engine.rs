//! Frame engine: one fractal view with its viewport, its reusable frame
//! buffers, and the canvas it blits to.

use std::time::Instant;

use log::info;

use mandelscope_core::{Point, Rect, Viewport};

use crate::canvas::CanvasSink;
use crate::render::{render_frame, worker_count};

/// An independent Mandelbrot view.
///
/// Owns everything one view needs: viewport, iteration grid, pixel buffer,
/// and the canvas sink, so multiple views can coexist in one process. The
/// iteration grid is retained across frames so a future recolor pass can
/// reuse it without recomputing.
pub struct Engine<C: CanvasSink> {
    viewport: Viewport,
    canvas: C,
    iter_counts: Vec<u64>,
    pixels: Vec<u8>,
}

impl<C: CanvasSink> Engine<C> {
    /// Create a view over the given window raster. The canvas is retargeted
    /// to `bounds` and the first `update` call renders the home view.
    pub fn new(bounds: Rect, mut canvas: C) -> Self {
        canvas.set_bounds(&bounds);
        let (iter_counts, pixels) = alloc_frame_buffers(&bounds);
        Self {
            viewport: Viewport::new(bounds),
            canvas,
            iter_counts,
            pixels,
        }
    }

    /// Recompute and blit the frame if any viewport mutation left it dirty.
    ///
    /// A degenerate raster (zero area) produces no frame and stays dirty
    /// until a real resize arrives.
    pub fn update(&mut self) {
        if !self.viewport.is_dirty() {
            return;
        }

        let window = *self.viewport.window_bounds();
        if window.area() as usize == 0 {
            return;
        }

        let plane = *self.viewport.plane_bounds();
        let limit = self.viewport.iterations_limit();

        let start = Instant::now();
        render_frame(
            &window,
            &plane,
            limit,
            worker_count(window.height()),
            &mut self.iter_counts,
            &mut self.pixels,
        );
        info!("frame computed in {:?}", start.elapsed());

        self.canvas.set_pixels(&self.pixels);
        self.viewport.clear_dirty();
    }

    pub fn camera_move_up(&mut self) {
        self.viewport.move_up();
    }

    pub fn camera_move_down(&mut self) {
        self.viewport.move_down();
    }

    pub fn camera_move_left(&mut self) {
        self.viewport.move_left();
    }

    pub fn camera_move_right(&mut self) {
        self.viewport.move_right();
    }

    /// Pan by a window-space displacement, e.g. a mouse drag.
    pub fn camera_move(&mut self, v: Point) {
        self.viewport.move_by(v);
    }

    /// Center the view on a window-pixel point, e.g. a click.
    pub fn camera_move_center(&mut self, p: Point) {
        self.viewport.center_on(p);
    }

    /// Zoom by `n` steps about the view center; positive zooms in.
    pub fn camera_zoom(&mut self, n: f64) {
        self.viewport.zoom(n);
    }

    pub fn iterations_up(&mut self) {
        self.viewport.iterations_up();
    }

    pub fn iterations_down(&mut self) {
        self.viewport.iterations_down();
    }

    /// React to a window resize: retarget the canvas and regrow the frame
    /// buffers. The visible plane region is left as-is.
    pub fn update_win_bounds(&mut self, bounds: Rect) {
        self.viewport.set_window_bounds(bounds);
        self.canvas.set_bounds(&bounds);
        let (iter_counts, pixels) = alloc_frame_buffers(&bounds);
        self.iter_counts = iter_counts;
        self.pixels = pixels;
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Escape counts of the last computed frame, row-major. Kept so a
    /// recolor pass could repaint without rerunning the kernel.
    pub fn iteration_counts(&self) -> &[u64] {
        &self.iter_counts
    }
}

fn alloc_frame_buffers(bounds: &Rect) -> (Vec<u64>, Vec<u8>) {
    let cells = (bounds.width().max(0.0) as usize) * (bounds.height().max(0.0) as usize);
    (vec![0; cells], vec![0; cells * 4])
}
