pub mod canvas;
pub mod colorize;
pub mod engine;
pub mod mandelbrot;
pub mod render;

pub use canvas::{BufferCanvas, CanvasSink};
pub use colorize::colorize;
pub use engine::Engine;
pub use mandelbrot::{escape_time, in_cardioid, in_period2_bulb, Escape, BAILOUT_RANGE};
pub use render::{render_frame, worker_count, MAX_WORKERS};

// Re-export core types for convenience
pub use mandelscope_core::*;
