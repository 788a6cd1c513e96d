//! 2D and 3D vectors over `f64`.
//!
//! Plain value types: every operation builds a fresh vector and leaves its
//! inputs alone. Nothing here guards against NaN or infinite components; they
//! flow through the arithmetic like any other float.

use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ─── Vec2 ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    /// Vector with every component equal to `s`.
    pub const fn splat(s: f64) -> Self { Self::new(s, s) }

    pub const fn to_array(self) -> [f64; 2] { [self.x, self.y] }

    pub fn scale(self, s: f64) -> Self { Self::new(self.x * s, self.y * s) }

    pub fn dot(self, other: Self) -> f64 { self.x * other.x + self.y * other.y }

    pub fn length_squared(self) -> f64 { self.dot(self) }

    pub fn length(self) -> f64 { self.dot(self).sqrt() }

    /// Scales to unit length. A zero vector yields NaN components; callers that
    /// can see one must check `length()` first.
    pub fn normalize(self) -> Self { self.scale(1.0 / self.length()) }

    pub fn distance(self, other: Self) -> f64 { (self - other).length() }

    /// Linear interpolation: `t = 0` gives `self`, `t = 1` gives `other`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from([x, y]: [f64; 2]) -> Self { Self::new(x, y) }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Self::new(self.x + rhs.x, self.y + rhs.y) }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Self::new(self.x - rhs.x, self.y - rhs.y) }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self { Self::new(-self.x, -self.y) }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, s: f64) -> Self { self.scale(s) }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;
    fn mul(self, v: Vec2) -> Vec2 { v.scale(self) }
}

// ─── Vec3 ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self { Self { x, y, z } }

    /// Vector with every component equal to `s`.
    pub const fn splat(s: f64) -> Self { Self::new(s, s, s) }

    pub const fn to_array(self) -> [f64; 3] { [self.x, self.y, self.z] }

    pub fn scale(self, s: f64) -> Self { Self::new(self.x * s, self.y * s, self.z * s) }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product. Zero when the inputs are parallel.
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length_squared(self) -> f64 { self.dot(self) }

    pub fn length(self) -> f64 { self.dot(self).sqrt() }

    /// Scales to unit length. A zero vector yields NaN components.
    pub fn normalize(self) -> Self { self.scale(1.0 / self.length()) }

    pub fn distance(self, other: Self) -> f64 { (self - other).length() }

    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self { Self::new(x, y, z) }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z) }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z) }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z) }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, s: f64) -> Self { self.scale(s) }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 { v.scale(self) }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splat_fills_every_component() {
        assert_eq!(Vec2::splat(2.5), Vec2::new(2.5, 2.5));
        assert_eq!(Vec3::splat(-1.0), Vec3::new(-1.0, -1.0, -1.0));
    }

    #[test]
    fn cross_of_x_and_y_is_z() {
        assert_eq!(Vec3::UNIT_X.cross(Vec3::UNIT_Y), Vec3::UNIT_Z);
        assert_eq!(Vec3::UNIT_Y.cross(Vec3::UNIT_X), -Vec3::UNIT_Z);
    }

    #[test]
    fn cross_of_parallel_vectors_is_zero() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(a.cross(a * 4.0), Vec3::ZERO);
    }

    #[test]
    fn length_is_euclidean() {
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Vec3::new(2.0, 3.0, 6.0).length(), 7.0);
        assert_eq!(Vec3::ZERO.length(), 0.0);
    }

    #[test]
    fn normalize_gives_unit_length() {
        let n = Vec3::new(0.0, 3.0, 4.0).normalize();
        assert!((n - Vec3::new(0.0, 0.6, 0.8)).length() < 1e-12);
        assert!((Vec2::new(-7.0, 1.5).normalize().length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_zero_vector_propagates_nan() {
        let n = Vec2::ZERO.normalize();
        assert!(n.x.is_nan() && n.y.is_nan());
    }

    #[test]
    fn arithmetic_is_component_wise() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::splat(3.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn lerp_and_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(4.0, -2.0);
        assert_eq!(a.lerp(b, 0.5), Vec2::new(2.0, -1.0));
        assert_eq!(a.distance(Vec2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn array_conversions() {
        assert_eq!(Vec3::from([1.0, 2.0, 3.0]).to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(Vec2::from([5.0, 6.0]), Vec2::new(5.0, 6.0));
    }
}
