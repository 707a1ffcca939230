//! Millimetre vector primitives
//!
//! Plain `Copy` value types used by meshes, toolpaths, and polygons.
//! Construction never checks finiteness; that is the job of mesh validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Point or direction in 3D space, in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3d {
    /// X-axis coordinate
    pub x: f64,
    /// Y-axis coordinate
    pub y: f64,
    /// Z-axis coordinate
    pub z: f64,
}

impl Vector3d {
    /// The origin
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a vector from its three coordinates
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// True when no coordinate is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Self) -> f64 {
        (*self - *other).length()
    }

    /// Component-wise minimum
    pub fn min(&self, other: &Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum
    pub fn max(&self, other: &Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

impl Add for Vector3d {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3d {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector3d {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vector3d {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f64; 3]> for Vector3d {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vector3d> for [f64; 3] {
    fn from(v: Vector3d) -> Self {
        [v.x, v.y, v.z]
    }
}

impl fmt::Display for Vector3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{:.3} Y:{:.3} Z:{:.3}", self.x, self.y, self.z)
    }
}

/// Point or direction in the plane, in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2d {
    /// X-axis coordinate
    pub x: f64,
    /// Y-axis coordinate
    pub y: f64,
}

impl Vector2d {
    /// The origin
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a vector from its two coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when neither coordinate is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Z component of the 3D cross product (`self` × `other`)
    pub fn cross(&self, other: &Self) -> f64 {
        self.x * other.y - other.x * self.y
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Self) -> f64 {
        (*self - *other).length()
    }

    /// Component-wise minimum
    pub fn min(&self, other: &Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum
    pub fn max(&self, other: &Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl Add for Vector2d {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2d {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Vector2d {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Vector2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{:.3} Y:{:.3}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Vector3d::new(0.0, 0.0, 5.0);
        let b = Vector3d::new(10.0, 0.0, 5.0);
        assert_eq!(a.distance_to(&b), 10.0);
        assert_eq!(Vector2d::new(0.0, 0.0).distance_to(&Vector2d::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_cross_product() {
        let x = Vector3d::new(1.0, 0.0, 0.0);
        let y = Vector3d::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector3d::new(0.0, 0.0, 1.0));
        assert_eq!(Vector2d::new(1.0, 0.0).cross(&Vector2d::new(0.0, 1.0)), 1.0);
    }

    #[test]
    fn test_finiteness() {
        assert!(Vector3d::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Vector3d::new(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!Vector3d::new(0.0, 0.0, f64::INFINITY).is_finite());
        assert!(!Vector2d::new(0.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_component_min_max() {
        let a = Vector3d::new(1.0, -2.0, 3.0);
        let b = Vector3d::new(-1.0, 2.0, 0.5);
        assert_eq!(a.min(&b), Vector3d::new(-1.0, -2.0, 0.5));
        assert_eq!(a.max(&b), Vector3d::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3d::new(1.0, 2.5, -3.0).to_string(), "X:1.000 Y:2.500 Z:-3.000");
        assert_eq!(Vector2d::new(0.25, 4.0).to_string(), "X:0.250 Y:4.000");
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Vector3d::new(1.0, 2.0, 3.0)).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0,"z":3.0}"#);
    }
}
