//! Band distributor: chops the raster into horizontal bands and renders them
//! on the rayon pool, each band writing to its own disjoint buffer slices.

use log::debug;
use rayon::prelude::*;

use mandelscope_core::{chop_hor, Rect};

use crate::colorize::colorize;
use crate::mandelbrot::escape_time;

/// Upper bound on parallel band workers per frame.
pub const MAX_WORKERS: u32 = 25;

/// Number of bands for a raster of the given height: one worker per row when
/// the window is thinner than [`MAX_WORKERS`].
pub fn worker_count(height: f64) -> u32 {
    MAX_WORKERS.min(height.max(0.0) as u32)
}

/// Compute one frame of the raster described by `window` over the plane
/// region `plane`.
///
/// `iter_counts` receives the per-pixel escape counts (row-major, `W * H`
/// entries) and `pixels` the RGBA bytes (`W * H * 4`, row 0 at the bottom).
/// Bands are contiguous row ranges, so each worker owns a disjoint slice of
/// both buffers and no synchronization beyond the final join is needed.
pub fn render_frame(
    window: &Rect,
    plane: &Rect,
    limit: u64,
    workers: u32,
    iter_counts: &mut [u64],
    pixels: &mut [u8],
) {
    if workers == 0 {
        return;
    }
    debug_assert_eq!(iter_counts.len(), window.area() as usize);
    debug_assert_eq!(pixels.len(), window.area() as usize * 4);

    let width = window.width() as usize;

    let mut jobs = Vec::with_capacity(workers as usize);
    let mut iter_rest = iter_counts;
    let mut pixel_rest = pixels;
    for i in 0..workers {
        let band = chop_hor(window, workers, i);
        let cells = band.height() as usize * width;
        let (iter_band, iter_tail) = std::mem::take(&mut iter_rest).split_at_mut(cells);
        let (pixel_band, pixel_tail) = std::mem::take(&mut pixel_rest).split_at_mut(cells * 4);
        iter_rest = iter_tail;
        pixel_rest = pixel_tail;
        jobs.push((band, iter_band, pixel_band));
    }

    debug!(
        "rendering {}x{} raster across {} bands, limit {}",
        window.width(),
        window.height(),
        workers,
        limit
    );

    jobs.into_par_iter().for_each(|(band, iter_band, pixel_band)| {
        render_band(&band, window, plane, limit, iter_band, pixel_band);
    });
}

/// Escape-time kernel over one horizontal band of the raster.
fn render_band(
    band: &Rect,
    window: &Rect,
    plane: &Rect,
    limit: u64,
    iter_band: &mut [u64],
    pixel_band: &mut [u8],
) {
    let slope_x = plane.width() / window.width();
    let slope_y = plane.height() / window.height();
    let width = window.width() as i64;
    let first_row = band.min.y as i64;

    for i in band.min.y as i64..band.max.y as i64 {
        for j in band.min.x as i64..band.max.x as i64 {
            let cx = (j as f64 - window.min.x) * slope_x + plane.min.x;
            let cy = (i as f64 - window.min.y) * slope_y + plane.min.y;

            let escape = escape_time(cx, cy, limit);

            let cell = ((i - first_row) * width + (j - window.min.x as i64)) as usize;
            iter_band[cell] = escape.iterations;
            pixel_band[cell * 4..cell * 4 + 4].copy_from_slice(&colorize(
                escape.iterations,
                limit,
                escape.zx,
                escape.zy,
            ));
        }
    }
}
