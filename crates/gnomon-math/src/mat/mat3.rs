use std::ops::Mul;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::MatrixKind;
use crate::error::MathError;
use crate::vector::Vec3;

/// 3×3 matrix. Columns `u`, `v`, `w`; rows `x`, `y`, `z`.
///
/// ```text
/// | ux vx wx |
/// | uy vy wy |
/// | uz vz wz |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mat3 {
    pub ux: f64,
    pub vx: f64,
    pub wx: f64,
    pub uy: f64,
    pub vy: f64,
    pub wy: f64,
    pub uz: f64,
    pub vz: f64,
    pub wz: f64,
}

impl Mat3 {
    pub const IDENTITY: Self = Self::new(
        1.0, 0.0, 0.0,
        0.0, 1.0, 0.0,
        0.0, 0.0, 1.0,
    );
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    /// Tangent used by [`Mat3::build_tnb`] when the normal lies on the
    /// vertical axis (world west).
    pub const TNB_FALLBACK: Vec3 = Vec3::new(-1.0, 0.0, 0.0);

    /// Coefficients in row-major order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        ux: f64, vx: f64, wx: f64,
        uy: f64, vy: f64, wy: f64,
        uz: f64, vz: f64, wz: f64,
    ) -> Self {
        Self { ux, vx, wx, uy, vy, wy, uz, vz, wz }
    }

    pub const fn from_cols(u: Vec3, v: Vec3, w: Vec3) -> Self {
        Self::new(
            u.x, v.x, w.x,
            u.y, v.y, w.y,
            u.z, v.z, w.z,
        )
    }

    pub const fn from_rows(x: Vec3, y: Vec3, z: Vec3) -> Self {
        Self::new(
            x.x, x.y, x.z,
            y.x, y.y, y.z,
            z.x, z.y, z.z,
        )
    }

    /// Reads the first nine entries of a row-major list. Anything past the
    /// ninth is ignored.
    pub fn from_slice(data: &[f64]) -> Result<Self, MathError> {
        let &[ux, vx, wx, uy, vy, wy, uz, vz, wz, ..] = data else {
            return Err(MathError::InvalidInput {
                kind: MatrixKind::Mat3,
                expected: MatrixKind::Mat3.coefficient_count(),
                got: data.len(),
            });
        };
        Ok(Self::new(ux, vx, wx, uy, vy, wy, uz, vz, wz))
    }

    /// Row-major.
    pub const fn to_array(self) -> [f64; 9] {
        [
            self.ux, self.vx, self.wx,
            self.uy, self.vy, self.wy,
            self.uz, self.vz, self.wz,
        ]
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> f64 { self.to_array()[row * 3 + col] }

    // ── Rows and columns ──────────────────────────────────────────────────────

    pub const fn col1(&self) -> Vec3 { Vec3::new(self.ux, self.uy, self.uz) }
    pub const fn col2(&self) -> Vec3 { Vec3::new(self.vx, self.vy, self.vz) }
    pub const fn col3(&self) -> Vec3 { Vec3::new(self.wx, self.wy, self.wz) }
    pub const fn row1(&self) -> Vec3 { Vec3::new(self.ux, self.vx, self.wx) }
    pub const fn row2(&self) -> Vec3 { Vec3::new(self.uy, self.vy, self.wy) }
    pub const fn row3(&self) -> Vec3 { Vec3::new(self.uz, self.vz, self.wz) }

    // ── Products ──────────────────────────────────────────────────────────────

    pub fn scale(&self, s: f64) -> Self {
        Self::from_rows(self.row1().scale(s), self.row2().scale(s), self.row3().scale(s))
    }

    pub fn mul_vec(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.row1().dot(v), self.row2().dot(v), self.row3().dot(v))
    }

    /// `self * rhs`. Entry (i, j) is `row_i(self) · col_j(rhs)`.
    pub fn mul_mat(&self, rhs: &Self) -> Self {
        let (r1, r2, r3) = (self.row1(), self.row2(), self.row3());
        let (c1, c2, c3) = (rhs.col1(), rhs.col2(), rhs.col3());
        Self::new(
            r1.dot(c1), r1.dot(c2), r1.dot(c3),
            r2.dot(c1), r2.dot(c2), r2.dot(c3),
            r3.dot(c1), r3.dot(c2), r3.dot(c3),
        )
    }

    // ── Decomposition ─────────────────────────────────────────────────────────

    pub fn trace(&self) -> f64 { self.ux + self.vy + self.wz }

    pub fn determinant(&self) -> f64 {
        self.ux * self.vy * self.wz
            + self.uy * self.vz * self.wx
            + self.uz * self.vx * self.wy
            - self.wx * self.vy * self.uz
            - self.wy * self.vz * self.ux
            - self.wz * self.vx * self.uy
    }

    pub const fn transpose(&self) -> Self {
        Self::from_cols(self.row1(), self.row2(), self.row3())
    }

    /// Determinant of the 2×2 submatrix left after deleting `row` and `col`
    /// (both zero-based). `None` if either index is outside `0..3`.
    pub fn minor(&self, row: usize, col: usize) -> Option<f64> {
        (row < 3 && col < 3).then(|| self.minor_at(row, col))
    }

    fn minor_at(&self, row: usize, col: usize) -> f64 {
        let [r0, r1] = others(row);
        let [c0, c1] = others(col);
        self.at(r0, c0) * self.at(r1, c1) - self.at(r0, c1) * self.at(r1, c0)
    }

    /// Entry (i, j) is `(-1)^(i+j) * minor(i, j)`.
    pub fn cofactor(&self) -> Self {
        let c = |i: usize, j: usize| {
            let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
            sign * self.minor_at(i, j)
        };
        Self::new(
            c(0, 0), c(0, 1), c(0, 2),
            c(1, 0), c(1, 1), c(1, 2),
            c(2, 0), c(2, 1), c(2, 2),
        )
    }

    pub fn adjugate(&self) -> Self { self.cofactor().transpose() }

    /// `adjugate / determinant`. Same zero-only rejection as [`super::Mat2::inverse`].
    ///
    /// A matrix that is singular on paper often has a determinant of about
    /// 1e-17 once rounded (repeated rows with fractional entries, say). That
    /// is not zero, so it inverts to coefficients around 1e16. Callers that
    /// need a tolerance must check `determinant()` themselves.
    pub fn inverse(&self) -> Result<Self, MathError> {
        let det = self.determinant();
        if det == 0.0 {
            debug!(kind = %MatrixKind::Mat3, "inverse rejected, determinant is zero");
            return Err(MathError::NotInvertible { kind: MatrixKind::Mat3 });
        }
        Ok(self.adjugate().scale(1.0 / det))
    }

    // ── Basis construction ────────────────────────────────────────────────────

    /// Tangent-normal-binormal basis around `n` (normally unit length).
    ///
    /// Columns are `(t, n, b)`: `t` is orthogonal to both `n` and world up,
    /// `b = n × t`. When `|n.y|` is exactly 1 the world-up construction
    /// collapses, so `t` is [`Mat3::TNB_FALLBACK`] instead. The middle column
    /// is always `n` unchanged.
    pub fn build_tnb(n: Vec3) -> Self {
        let t = if n.y.abs() == 1.0 {
            trace!(n_y = n.y, "normal on vertical axis, using fallback tangent");
            Self::TNB_FALLBACK
        } else {
            Vec3::new(n.z, 0.0, -n.x).normalize()
        };
        let b = n.cross(t);
        Self::from_cols(t, n, b)
    }
}

/// The two indices in `0..3` that are not `skip`.
fn others(skip: usize) -> [usize; 2] {
    match skip {
        0 => [1, 2],
        1 => [0, 2],
        _ => [0, 1],
    }
}

impl Default for Mat3 {
    fn default() -> Self { Self::IDENTITY }
}

impl From<[f64; 9]> for Mat3 {
    fn from(a: [f64; 9]) -> Self {
        Self::new(a[0], a[1], a[2], a[3], a[4], a[5], a[6], a[7], a[8])
    }
}

impl Mul<f64> for Mat3 {
    type Output = Self;
    fn mul(self, s: f64) -> Self { self.scale(s) }
}

impl Mul<Mat3> for f64 {
    type Output = Mat3;
    fn mul(self, m: Mat3) -> Mat3 { m.scale(self) }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 { self.mul_vec(v) }
}

impl Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self { self.mul_mat(&rhs) }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
