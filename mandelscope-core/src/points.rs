use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point or displacement in 2-D space, in either pixel or plane units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

/// Axis-aligned rectangle with `max >= min` componentwise.
///
/// The same type describes both the window raster (integer-valued pixel
/// coordinates stored as floats) and the visible region of the complex plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Translate by `v`, preserving width and height.
    pub fn moved(&self, v: Point) -> Rect {
        Rect::new(self.min + v, self.max + v)
    }

    /// Scale width and height componentwise by `scale`, keeping the center fixed.
    pub fn resized_about_center(&self, scale: Point) -> Rect {
        let center = self.center();
        let half = Point::new(self.width() * scale.x / 2.0, self.height() * scale.y / 2.0);
        Rect::new(center - half, center + half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_add_and_sub() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 5.0);
        assert_eq!(a + b, Point::new(4.0, 7.0));
        assert_eq!(b - a, Point::new(2.0, 3.0));
    }

    #[test]
    fn rect_dimensions() {
        let rect = Rect::new(Point::new(-2.0, -1.0), Point::new(2.0, 3.0));
        assert_eq!(rect.width(), 4.0);
        assert_eq!(rect.height(), 4.0);
        assert_eq!(rect.area(), 16.0);
        assert_eq!(rect.center(), Point::new(0.0, 1.0));
        assert!(rect.is_valid());
    }

    #[test]
    fn rect_moved_preserves_size() {
        let rect = Rect::new(Point::new(-2.0, -2.0), Point::new(2.0, 2.0));
        let moved = rect.moved(Point::new(0.5, -1.5));
        assert_eq!(moved.width(), rect.width());
        assert_eq!(moved.height(), rect.height());
        assert_eq!(moved.center(), Point::new(0.5, -1.5));
    }

    #[test]
    fn rect_resized_keeps_center() {
        let rect = Rect::new(Point::new(-2.0, -2.0), Point::new(2.0, 2.0));
        let resized = rect.resized_about_center(Point::new(0.5, 0.25));
        assert_eq!(resized.center(), rect.center());
        assert_eq!(resized.width(), 2.0);
        assert_eq!(resized.height(), 1.0);
    }

    #[test]
    fn rect_resized_roundtrip() {
        let rect = Rect::new(Point::new(-1.5, -1.0), Point::new(2.5, 3.0));
        let back = rect
            .resized_about_center(Point::new(0.125, 0.125))
            .resized_about_center(Point::new(8.0, 8.0));
        assert!((back.min.x - rect.min.x).abs() < 1e-12);
        assert!((back.max.y - rect.max.y).abs() < 1e-12);
    }

    #[test]
    fn rect_serialization_roundtrip() {
        let original = Rect::new(Point::new(0.0, 0.0), Point::new(640.0, 480.0));
        let json = serde_json::to_string(&original).unwrap();
        let restored: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn degenerate_rect_is_detected() {
        let rect = Rect::new(Point::new(1.0, 0.0), Point::new(0.0, 1.0));
        assert!(!rect.is_valid());
    }
}
