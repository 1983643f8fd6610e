//! Affine maps between window-pixel space and plane space, plus the band
//! chopping used to hand raster rows to parallel workers.

use crate::points::{Point, Rect};

/// Linearly remap `v` from `[in_min, in_max]` to `[out_min, out_max]`.
pub fn map_value_to_range(v: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (v - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Grow `inner` uniformly about its center until it has `container`'s aspect
/// ratio.
///
/// The result contains `inner` and shares its extent on one axis: a landscape
/// container keeps `inner`'s height and widens, a portrait container keeps
/// `inner`'s width and grows taller. Used at init to fit the canonical plane
/// region to the window.
pub fn scale_rect_to_rect(container: &Rect, inner: &Rect) -> Rect {
    let container_aspect = container.width() / container.height();
    let inner_aspect = inner.width() / inner.height();

    let (width, height) = if container_aspect > inner_aspect {
        (inner.height() * container_aspect, inner.height())
    } else {
        (inner.width(), inner.width() / container_aspect)
    };

    let center = inner.center();
    let half = Point::new(width / 2.0, height / 2.0);
    Rect::new(center - half, center + half)
}

/// Split `rect` into `n` horizontal bands of equal integer row count and
/// return the `i`-th (0-indexed, bottom first). The final band absorbs the
/// remainder rows so the bands tile `rect` exactly.
pub fn chop_hor(rect: &Rect, n: u32, i: u32) -> Rect {
    debug_assert!(n >= 1 && i < n);

    let rows = (rect.height() / n as f64).floor();
    let min_y = rect.min.y + rows * i as f64;
    let max_y = if i == n - 1 {
        rect.max.y
    } else {
        min_y + rows
    };

    Rect::new(
        Point::new(rect.min.x, min_y),
        Point::new(rect.max.x, max_y),
    )
}

/// Map a window-pixel point to its plane coordinates.
pub fn pixel_to_plane(p: Point, window: &Rect, plane: &Rect) -> Point {
    Point::new(
        map_value_to_range(p.x, window.min.x, window.max.x, plane.min.x, plane.max.x),
        map_value_to_range(p.y, window.min.y, window.max.y, plane.min.y, plane.max.y),
    )
}

/// Inverse of [`pixel_to_plane`].
pub fn plane_to_pixel(p: Point, window: &Rect, plane: &Rect) -> Point {
    Point::new(
        map_value_to_range(p.x, plane.min.x, plane.max.x, window.min.x, window.max.x),
        map_value_to_range(p.y, plane.min.y, plane.max.y, window.min.y, window.max.y),
    )
}
