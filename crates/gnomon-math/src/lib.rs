//! Vectors and small matrices for orientation math: ray directions, basis
//! construction, and the 2×2 / 3×3 algebra behind them.
//!
//! Everything is a `Copy` value type and every operation is a pure function
//! of its inputs. The only fallible operations are flat-array construction
//! and inversion; both return [`MathError`].
//!
//! ```
//! use gnomon_math::{Mat2, Mat3, Vec3};
//!
//! let m = Mat2::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
//! assert_eq!(m.determinant(), -2.0);
//! assert_eq!(m.inverse().unwrap(), Mat2::new(-2.0, 1.0, 1.5, -0.5));
//!
//! let up = Vec3::new(0.0, 1.0, 0.0);
//! assert_eq!(Mat3::build_tnb(up).col2(), up);
//! ```

pub mod error;
pub mod mat;
pub mod vector;

pub use error::MathError;
pub use mat::{Mat2, Mat3, MatrixKind};
pub use vector::{Vec2, Vec3};
