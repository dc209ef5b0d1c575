use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// 2D point in document coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset of `length` along `angle` (radians).
    pub fn polar(angle: f64, length: f64) -> Self {
        Self::new(angle.cos(), angle.sin()) * length
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point { Point::new(self.x + rhs.x, self.y + rhs.y) }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point { Point::new(self.x - rhs.x, self.y - rhs.y) }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, k: f64) -> Point { Point::new(self.x * k, self.y * k) }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self { Self::new(x, y) }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}
