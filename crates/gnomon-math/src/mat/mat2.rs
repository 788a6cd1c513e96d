use std::ops::Mul;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::MatrixKind;
use crate::error::MathError;
use crate::vector::Vec2;

/// 2×2 matrix. Columns `u`, `v`; rows `x`, `y`.
///
/// ```text
/// | ux vx |
/// | uy vy |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mat2 {
    pub ux: f64,
    pub vx: f64,
    pub uy: f64,
    pub vy: f64,
}

impl Mat2 {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Coefficients in row-major order.
    pub const fn new(ux: f64, vx: f64, uy: f64, vy: f64) -> Self {
        Self { ux, vx, uy, vy }
    }

    /// `u` becomes column 1, `v` column 2.
    pub const fn from_cols(u: Vec2, v: Vec2) -> Self {
        Self::new(u.x, v.x, u.y, v.y)
    }

    pub const fn from_rows(x: Vec2, y: Vec2) -> Self {
        Self::new(x.x, x.y, y.x, y.y)
    }

    /// Reads the first four entries of a row-major list `[ux, vx, uy, vy]`.
    /// Anything past the fourth is ignored.
    pub fn from_slice(data: &[f64]) -> Result<Self, MathError> {
        let &[ux, vx, uy, vy, ..] = data else {
            return Err(MathError::InvalidInput {
                kind: MatrixKind::Mat2,
                expected: MatrixKind::Mat2.coefficient_count(),
                got: data.len(),
            });
        };
        Ok(Self::new(ux, vx, uy, vy))
    }

    /// Row-major.
    pub const fn to_array(self) -> [f64; 4] { [self.ux, self.vx, self.uy, self.vy] }

    // ── Rows and columns ──────────────────────────────────────────────────────

    pub const fn col1(&self) -> Vec2 { Vec2::new(self.ux, self.uy) }
    pub const fn col2(&self) -> Vec2 { Vec2::new(self.vx, self.vy) }
    pub const fn row1(&self) -> Vec2 { Vec2::new(self.ux, self.vx) }
    pub const fn row2(&self) -> Vec2 { Vec2::new(self.uy, self.vy) }

    // ── Products ──────────────────────────────────────────────────────────────

    pub fn scale(&self, s: f64) -> Self {
        Self::new(self.ux * s, self.vx * s, self.uy * s, self.vy * s)
    }

    pub fn mul_vec(&self, v: Vec2) -> Vec2 {
        Vec2::new(self.row1().dot(v), self.row2().dot(v))
    }

    /// `self * rhs`. Entry (i, j) is `row_i(self) · col_j(rhs)`.
    pub fn mul_mat(&self, rhs: &Self) -> Self {
        let (r1, r2) = (self.row1(), self.row2());
        let (c1, c2) = (rhs.col1(), rhs.col2());
        Self::new(r1.dot(c1), r1.dot(c2), r2.dot(c1), r2.dot(c2))
    }

    // ── Decomposition ─────────────────────────────────────────────────────────

    pub fn trace(&self) -> f64 { self.ux + self.vy }

    pub fn determinant(&self) -> f64 { self.ux * self.vy - self.vx * self.uy }

    pub const fn transpose(&self) -> Self {
        Self::new(self.ux, self.uy, self.vx, self.vy)
    }

    /// Signed minors. Each 2×2 minor is the single entry on the opposite
    /// diagonal.
    pub fn cofactor(&self) -> Self {
        Self::new(self.vy, -self.uy, -self.vx, self.ux)
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Self {
        Self::new(self.vy, -self.vx, -self.uy, self.ux)
    }

    /// `adjugate / determinant`.
    ///
    /// Only an exactly-zero determinant is rejected. A near-singular matrix
    /// goes through and produces very large (or infinite) coefficients.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let det = self.determinant();
        if det == 0.0 {
            debug!(kind = %MatrixKind::Mat2, "inverse rejected, determinant is zero");
            return Err(MathError::NotInvertible { kind: MatrixKind::Mat2 });
        }
        Ok(self.adjugate().scale(1.0 / det))
    }
}

impl Default for Mat2 {
    fn default() -> Self { Self::IDENTITY }
}

impl From<[f64; 4]> for Mat2 {
    fn from([ux, vx, uy, vy]: [f64; 4]) -> Self { Self::new(ux, vx, uy, vy) }
}

impl Mul<f64> for Mat2 {
    type Output = Self;
    fn mul(self, s: f64) -> Self { self.scale(s) }
}

impl Mul<Mat2> for f64 {
    type Output = Mat2;
    fn mul(self, m: Mat2) -> Mat2 { m.scale(self) }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;
    fn mul(self, v: Vec2) -> Vec2 { self.mul_vec(v) }
}

impl Mul for Mat2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self { self.mul_mat(&rhs) }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
