//! Fixed-size 2×2 and 3×3 matrices.
//!
//! Coefficients are named column-letter first, row-axis second: `ux` sits in
//! column `u`, row `x`. For a `Mat2`, row 1 is `(ux, vx)` and column 1 is
//! `(ux, uy)`; `Mat3` adds column `w` and row `z` the same way.
//!
//! Flat arrays (`new`, `from_slice`, `to_array`) are always row-major.

mod mat2;
mod mat3;

pub use mat2::Mat2;
pub use mat3::Mat3;

use std::fmt;

/// Which fixed size a matrix has. Carried by errors so callers can tell the
/// two apart without matching on the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixKind {
    Mat2,
    Mat3,
}

impl MatrixKind {
    /// Rows (and columns).
    pub const fn size(self) -> usize {
        match self {
            Self::Mat2 => 2,
            Self::Mat3 => 3,
        }
    }

    pub const fn coefficient_count(self) -> usize { self.size() * self.size() }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mat2 => "mat2",
            Self::Mat3 => "mat3",
        }
    }
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
