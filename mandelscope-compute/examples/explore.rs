//! Minimal driver: render the home view, then zoom toward the seahorse
//! valley and render again. Run with `RUST_LOG=debug` to see band and
//! frame-time diagnostics.

use mandelscope_compute::{BufferCanvas, Engine, Point, Rect};

fn main() {
    env_logger::init();

    let bounds = Rect::new(Point::new(0.0, 0.0), Point::new(800.0, 600.0));
    let mut engine = Engine::new(bounds, BufferCanvas::new());
    engine.update();

    engine.camera_move_center(Point::new(150.0, 320.0));
    engine.camera_zoom(2.0);
    engine.iterations_up();
    engine.update();

    let plane = engine.viewport().plane_bounds();
    println!(
        "rendered {} bytes over plane region ({:.4}, {:.4})..({:.4}, {:.4})",
        engine.canvas().pixels().len(),
        plane.min.x,
        plane.min.y,
        plane.max.x,
        plane.max.y,
    );
}
