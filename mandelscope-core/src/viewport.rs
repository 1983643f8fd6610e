//! Viewport state machine: which rectangle of the complex plane is visible,
//! at what iteration cap, and whether the frame needs recomputing.

use crate::points::{Point, Rect};
use crate::transforms::{map_value_to_range, pixel_to_plane, scale_rect_to_rect};
use serde::{Deserialize, Serialize};

/// Starting escape-iteration cap.
pub const INITIAL_ITERATIONS: u64 = 20;

/// Additive step applied by [`Viewport::iterations_up`] and
/// [`Viewport::iterations_down`].
pub const ITERATIONS_JUMP: u64 = 20;

/// Keyboard pan speed, in window heights per call.
pub const MOVE_SPEED: f64 = 1e-4;

/// Zoom base: one positive zoom step multiplies the visible plane span by
/// this factor.
pub const CAM_ZOOM_SPEED: f64 = 0.5;

/// Canonical plane region shown at startup, before aspect correction.
const HOME_PLANE: Rect = Rect::new(Point::new(-2.0, -2.0), Point::new(2.0, 2.0));

/// Visible-region state for one fractal view.
///
/// All mutating operations mark the viewport dirty; the frame engine polls
/// [`Viewport::is_dirty`] and recomputes at most once per mutation batch.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Viewport {
    window_bounds: Rect,
    plane_bounds: Rect,
    iterations_limit: u64,
    dirty: bool,
}

impl Viewport {
    /// Create a viewport for a window raster, fitting the canonical plane
    /// region to the window's aspect ratio.
    pub fn new(window_bounds: Rect) -> Self {
        let plane_bounds = scale_rect_to_rect(&window_bounds, &HOME_PLANE);
        Self {
            window_bounds,
            plane_bounds,
            iterations_limit: INITIAL_ITERATIONS,
            dirty: true,
        }
    }

    pub fn window_bounds(&self) -> &Rect {
        &self.window_bounds
    }

    pub fn plane_bounds(&self) -> &Rect {
        &self.plane_bounds
    }

    pub fn iterations_limit(&self) -> u64 {
        self.iterations_limit
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Called by the frame engine after a frame has been computed and blitted.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn move_up(&mut self) {
        self.translate(Point::new(0.0, self.window_bounds.height() * MOVE_SPEED));
    }

    pub fn move_down(&mut self) {
        self.translate(Point::new(0.0, -self.window_bounds.height() * MOVE_SPEED));
    }

    // Horizontal keyboard pans also step by window *height*, so both axes
    // move at the same rate regardless of the window's aspect ratio.
    pub fn move_right(&mut self) {
        self.translate(Point::new(self.window_bounds.height() * MOVE_SPEED, 0.0));
    }

    pub fn move_left(&mut self) {
        self.translate(Point::new(-self.window_bounds.height() * MOVE_SPEED, 0.0));
    }

    /// Pan by a window-space displacement (e.g. a mouse drag), remapped to
    /// plane units.
    pub fn move_by(&mut self, v: Point) {
        let dx = map_value_to_range(v.x, 0.0, self.window_bounds.width(), 0.0, self.plane_bounds.width());
        let dy = map_value_to_range(v.y, 0.0, self.window_bounds.height(), 0.0, self.plane_bounds.height());
        self.translate(Point::new(dx, dy));
    }

    /// Re-center the visible region on a window-pixel point.
    pub fn center_on(&mut self, p: Point) {
        let target = pixel_to_plane(p, &self.window_bounds, &self.plane_bounds);
        let offset = target - self.plane_bounds.center();
        self.translate(offset);
    }

    /// Zoom by `n` steps about the current plane center. Positive `n` zooms
    /// in (the visible region shrinks). Always pivots on the center, not the
    /// cursor.
    pub fn zoom(&mut self, n: f64) {
        let scale = CAM_ZOOM_SPEED.powf(n);
        self.plane_bounds = self.plane_bounds.resized_about_center(Point::new(scale, scale));
        self.dirty = true;
    }

    pub fn iterations_up(&mut self) {
        self.iterations_limit += ITERATIONS_JUMP;
        self.dirty = true;
    }

    /// Lower the iteration cap, clamping at 1 so the kernel always runs.
    pub fn iterations_down(&mut self) {
        self.iterations_limit = self.iterations_limit.saturating_sub(ITERATIONS_JUMP).max(1);
        self.dirty = true;
    }

    /// Replace the window raster after a resize. The plane region is left
    /// untouched, so the aspect ratio drifts until the next pan; a known
    /// limitation of this design.
    pub fn set_window_bounds(&mut self, bounds: Rect) {
        self.window_bounds = bounds;
        self.dirty = true;
    }

    fn translate(&mut self, v: Point) {
        self.plane_bounds = self.plane_bounds.moved(v);
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport_800x600() -> Viewport {
        Viewport::new(Rect::new(Point::new(0.0, 0.0), Point::new(800.0, 600.0)))
    }

    #[test]
    fn new_viewport_matches_window_aspect() {
        let vp = viewport_800x600();
        let plane = vp.plane_bounds();
        let plane_aspect = plane.width() / plane.height();
        assert!((plane_aspect - 800.0 / 600.0).abs() < 1e-12);
        assert_eq!(plane.center(), Point::new(0.0, 0.0));
        assert_eq!(plane.height(), 4.0);
        assert!(vp.is_dirty());
        assert_eq!(vp.iterations_limit(), INITIAL_ITERATIONS);
    }

    #[test]
    fn pans_preserve_plane_size() {
        let mut vp = viewport_800x600();
        let before = *vp.plane_bounds();
        vp.move_up();
        vp.move_left();
        vp.move_by(Point::new(40.0, -25.0));
        let after = vp.plane_bounds();
        assert!((after.width() - before.width()).abs() < 1e-12);
        assert!((after.height() - before.height()).abs() < 1e-12);
    }

    #[test]
    fn keyboard_pans_step_by_window_height_on_both_axes() {
        let mut vp = viewport_800x600();
        let start = *vp.plane_bounds();

        vp.move_right();
        let dx = vp.plane_bounds().min.x - start.min.x;
        assert!((dx - 600.0 * MOVE_SPEED).abs() < 1e-12);

        vp.move_up();
        let dy = vp.plane_bounds().min.y - start.min.y;
        assert!((dy - 600.0 * MOVE_SPEED).abs() < 1e-12);
    }

    #[test]
    fn move_by_remaps_window_spans_to_plane_spans() {
        let mut vp = viewport_800x600();
        let start = *vp.plane_bounds();

        // A drag across the full window width pans a full plane width.
        vp.move_by(Point::new(800.0, 0.0));
        let moved = vp.plane_bounds();
        assert!((moved.min.x - (start.min.x + start.width())).abs() < 1e-12);
        assert_eq!(moved.min.y, start.min.y);
    }

    #[test]
    fn center_on_window_center_is_a_noop_translation() {
        let mut vp = viewport_800x600();
        let before = *vp.plane_bounds();
        vp.center_on(Point::new(400.0, 300.0));
        let after = vp.plane_bounds();
        assert!((after.center().x - before.center().x).abs() < 1e-12);
        assert!((after.center().y - before.center().y).abs() < 1e-12);
    }

    #[test]
    fn center_on_lands_plane_center_on_remapped_point() {
        let mut vp = viewport_800x600();
        let window = *vp.window_bounds();
        let plane = *vp.plane_bounds();
        let target_px = Point::new(200.0, 450.0);
        let expected = pixel_to_plane(target_px, &window, &plane);

        vp.center_on(target_px);
        let center = vp.plane_bounds().center();
        assert!((center.x - expected.x).abs() < 1e-12);
        assert!((center.y - expected.y).abs() < 1e-12);
    }

    #[test]
    fn zoom_in_shrinks_visible_region_about_center() {
        let mut vp = viewport_800x600();
        let before = *vp.plane_bounds();
        vp.zoom(1.0);
        let after = vp.plane_bounds();
        assert!((after.width() - before.width() * CAM_ZOOM_SPEED).abs() < 1e-12);
        assert_eq!(after.center(), before.center());
    }

    #[test]
    fn zoom_roundtrip_restores_plane_bounds() {
        let mut vp = viewport_800x600();
        let before = *vp.plane_bounds();
        vp.zoom(3.0);
        vp.zoom(-3.0);
        let after = vp.plane_bounds();
        assert!((after.width() - before.width()).abs() / before.width() < 1e-9);
        assert!((after.height() - before.height()).abs() / before.height() < 1e-9);
        assert_eq!(after.center(), before.center());
    }

    #[test]
    fn iteration_cap_steps_and_clamps() {
        let mut vp = viewport_800x600();
        vp.iterations_up();
        assert_eq!(vp.iterations_limit(), INITIAL_ITERATIONS + ITERATIONS_JUMP);

        vp.iterations_down();
        assert_eq!(vp.iterations_limit(), INITIAL_ITERATIONS);

        vp.iterations_down();
        assert_eq!(vp.iterations_limit(), 1, "cap clamps instead of wrapping");
        vp.iterations_down();
        assert_eq!(vp.iterations_limit(), 1);
    }

    #[test]
    fn resize_keeps_plane_bounds_unchanged() {
        let mut vp = viewport_800x600();
        vp.clear_dirty();
        let plane = *vp.plane_bounds();

        let new_window = Rect::new(Point::new(0.0, 0.0), Point::new(300.0, 900.0));
        vp.set_window_bounds(new_window);

        assert_eq!(*vp.window_bounds(), new_window);
        assert_eq!(*vp.plane_bounds(), plane);
        assert!(vp.is_dirty());
    }

    #[test]
    fn every_mutation_sets_dirty() {
        let ops: Vec<fn(&mut Viewport)> = vec![
            |vp| vp.move_up(),
            |vp| vp.move_down(),
            |vp| vp.move_left(),
            |vp| vp.move_right(),
            |vp| vp.move_by(Point::new(1.0, 1.0)),
            |vp| vp.center_on(Point::new(10.0, 10.0)),
            |vp| vp.zoom(1.0),
            |vp| vp.iterations_up(),
            |vp| vp.iterations_down(),
            |vp| vp.set_window_bounds(Rect::new(Point::new(0.0, 0.0), Point::new(64.0, 64.0))),
        ];
        for op in ops {
            let mut vp = viewport_800x600();
            vp.clear_dirty();
            op(&mut vp);
            assert!(vp.is_dirty());
        }
    }

    #[test]
    fn viewport_serialization_roundtrip() {
        let mut vp = viewport_800x600();
        vp.zoom(2.0);
        vp.iterations_up();
        let json = serde_json::to_string(&vp).unwrap();
        let restored: Viewport = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.plane_bounds(), vp.plane_bounds());
        assert_eq!(restored.iterations_limit(), vp.iterations_limit());
    }
}
