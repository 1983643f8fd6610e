pub mod points;
pub mod transforms;
pub mod viewport;

pub use points::{Point, Rect};
pub use transforms::{
    chop_hor, map_value_to_range, pixel_to_plane, plane_to_pixel, scale_rect_to_rect,
};
pub use viewport::{
    Viewport, CAM_ZOOM_SPEED, INITIAL_ITERATIONS, ITERATIONS_JUMP, MOVE_SPEED,
};
