//! `Mat2` and `Mat3` namespaces.
//!
//! `from` accepts N vector-like columns, a single list of row-major floats,
//! or the same floats spread over the arguments. `mul` picks matrix, vector or scalar multiplication by asking the
//! structural predicates about its second argument, in that order.

use gnomon_math::{Mat2, Mat3};

use crate::error::RuntimeError;
use crate::types::registry::TypeRegistry;
use crate::Value;
use super::{Export, NamespaceInfo, NamespaceProvider, c, check_argc, f, float_args};

// ─── Mat2 ─────────────────────────────────────────────────────────────────────

pub struct Mat2Namespace;

impl NamespaceInfo for Mat2Namespace {
    fn name(&self) -> &'static str { "Mat2" }

    fn exports(&self) -> Vec<Export> {
        vec![
            f("from"), f("isMatrix"), f("isMatrix2"),
            f("col1"), f("col2"), f("row1"), f("row2"),
            f("mul"), f("trace"), f("determinant"), f("transpose"),
            f("cofactor"), f("adjugate"), f("inverse"),
            c("Identity"),
        ]
    }
}

impl NamespaceProvider for Mat2Namespace {
    fn call(
        &self,
        name: &str,
        args: &[Value],
        t:    &TypeRegistry,
    ) -> Result<Option<Value>, RuntimeError> {
        let v = match name {
            "from" => match args {
                [Value::List(items)] => Value::Mat2(Mat2::from_slice(&float_args(items)?)?),
                [a, b] if t.is_vector2(a) && t.is_vector2(b) => {
                    Value::Mat2(Mat2::from_cols(t.as_vec2(a)?, t.as_vec2(b)?))
                }
                _ => Value::Mat2(Mat2::from_slice(&float_args(args)?)?),
            },
            "isMatrix" | "isMatrix2" => { check_argc(name, args, 1)?; Value::Bool(t.is_matrix2(&args[0])) }
            "mul" => {
                check_argc(name, args, 2)?;
                let m = t.as_mat2(&args[0])?;
                let x = &args[1];
                if t.is_matrix2(x) {
                    Value::Mat2(m * t.as_mat2(x)?)
                } else if t.is_vector2(x) {
                    Value::Vec2(m * t.as_vec2(x)?)
                } else if let Some(s) = x.as_float() {
                    Value::Mat2(m * s)
                } else {
                    return Err(RuntimeError::mismatch("mat2, vec2 or float", x));
                }
            }
            "col1" | "col2" | "row1" | "row2" | "trace" | "determinant"
            | "transpose" | "cofactor" | "adjugate" | "inverse" => {
                check_argc(name, args, 1)?;
                let m = t.as_mat2(&args[0])?;
                match name {
                    "col1"        => Value::Vec2(m.col1()),
                    "col2"        => Value::Vec2(m.col2()),
                    "row1"        => Value::Vec2(m.row1()),
                    "row2"        => Value::Vec2(m.row2()),
                    "trace"       => Value::Float(m.trace()),
                    "determinant" => Value::Float(m.determinant()),
                    "transpose"   => Value::Mat2(m.transpose()),
                    "cofactor"    => Value::Mat2(m.cofactor()),
                    "adjugate"    => Value::Mat2(m.adjugate()),
                    "inverse"     => Value::Mat2(m.inverse()?),
                    _ => unreachable!(),
                }
            }
            _ => return Ok(None),
        };
        Ok(Some(v))
    }

    fn get_constant(&self, name: &str) -> Option<Value> {
        match name {
            "Identity" => Some(Value::Mat2(Mat2::IDENTITY)),
            _ => None,
        }
    }
}

// ─── Mat3 ─────────────────────────────────────────────────────────────────────

pub struct Mat3Namespace;

impl NamespaceInfo for Mat3Namespace {
    fn name(&self) -> &'static str { "Mat3" }

    fn exports(&self) -> Vec<Export> {
        vec![
            f("from"), f("isMatrix"), f("isMatrix3"), f("buildTNB"),
            f("col1"), f("col2"), f("col3"), f("row1"), f("row2"), f("row3"),
            f("mul"), f("trace"), f("determinant"), f("transpose"),
            f("cofactor"), f("adjugate"), f("inverse"),
            c("Identity"),
        ]
    }
}

impl NamespaceProvider for Mat3Namespace {
    fn call(
        &self,
        name: &str,
        args: &[Value],
        t:    &TypeRegistry,
    ) -> Result<Option<Value>, RuntimeError> {
        let v = match name {
            "from" => match args {
                [Value::List(items)] => Value::Mat3(Mat3::from_slice(&float_args(items)?)?),
                [a, b, d] if t.is_vector3(a) && t.is_vector3(b) && t.is_vector3(d) => {
                    Value::Mat3(Mat3::from_cols(t.as_vec3(a)?, t.as_vec3(b)?, t.as_vec3(d)?))
                }
                _ => Value::Mat3(Mat3::from_slice(&float_args(args)?)?),
            },
            "isMatrix" | "isMatrix3" => { check_argc(name, args, 1)?; Value::Bool(t.is_matrix3(&args[0])) }
            "buildTNB" => { check_argc(name, args, 1)?; Value::Mat3(Mat3::build_tnb(t.as_vec3(&args[0])?)) }
            "mul" => {
                check_argc(name, args, 2)?;
                let m = t.as_mat3(&args[0])?;
                let x = &args[1];
                if t.is_matrix3(x) {
                    Value::Mat3(m * t.as_mat3(x)?)
                } else if t.is_vector3(x) {
                    Value::Vec3(m * t.as_vec3(x)?)
                } else if let Some(s) = x.as_float() {
                    Value::Mat3(m * s)
                } else {
                    return Err(RuntimeError::mismatch("mat3, vec3 or float", x));
                }
            }
            "col1" | "col2" | "col3" | "row1" | "row2" | "row3" | "trace"
            | "determinant" | "transpose" | "cofactor" | "adjugate" | "inverse" => {
                check_argc(name, args, 1)?;
                let m = t.as_mat3(&args[0])?;
                match name {
                    "col1"        => Value::Vec3(m.col1()),
                    "col2"        => Value::Vec3(m.col2()),
                    "col3"        => Value::Vec3(m.col3()),
                    "row1"        => Value::Vec3(m.row1()),
                    "row2"        => Value::Vec3(m.row2()),
                    "row3"        => Value::Vec3(m.row3()),
                    "trace"       => Value::Float(m.trace()),
                    "determinant" => Value::Float(m.determinant()),
                    "transpose"   => Value::Mat3(m.transpose()),
                    "cofactor"    => Value::Mat3(m.cofactor()),
                    "adjugate"    => Value::Mat3(m.adjugate()),
                    "inverse"     => Value::Mat3(m.inverse()?),
                    _ => unreachable!(),
                }
            }
            _ => return Ok(None),
        };
        Ok(Some(v))
    }

    fn get_constant(&self, name: &str) -> Option<Value> {
        match name {
            "Identity" => Some(Value::Mat3(Mat3::IDENTITY)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gnomon_math::{MathError, MatrixKind, Vec2, Vec3};

    fn rec(fields: &[(&str, f64)]) -> Value {
        Value::record(fields.iter().map(|&(k, x)| (k, Value::Float(x))))
    }

    #[test]
    fn from_columns_or_flat_list() {
        let t = TypeRegistry::default();
        let cols = [Value::Vec2(Vec2::new(1.0, 3.0)), rec(&[("x", 2.0), ("y", 4.0)])];
        let flat: Vec<Value> = [1.0, 2.0, 3.0, 4.0].into_iter().map(Value::Float).collect();
        let a = Mat2Namespace.call("from", &cols, &t).unwrap();
        let b = Mat2Namespace.call("from", &flat, &t).unwrap();
        assert_eq!(a, Some(Value::Mat2(Mat2::new(1.0, 2.0, 3.0, 4.0))));
        assert_eq!(a, b);
    }

    #[test]
    fn from_single_list_argument() {
        let t = TypeRegistry::default();
        let list = Value::List([1.0, 2.0, 3.0, 4.0].into_iter().map(Value::Float).collect());
        let m = Mat2Namespace.call("from", &[list], &t).unwrap();
        assert_eq!(m, Some(Value::Mat2(Mat2::new(1.0, 2.0, 3.0, 4.0))));
    }

    #[test]
    fn from_short_list_is_invalid_input() {
        let t = TypeRegistry::default();
        let err = Mat3Namespace.call("from", &[Value::Float(1.0)], &t).unwrap_err();
        assert_eq!(
            err,
            RuntimeError::Math(MathError::InvalidInput { kind: MatrixKind::Mat3, expected: 9, got: 1 })
        );
    }

    #[test]
    fn mul_prefers_matrix_over_vector() {
        let t = TypeRegistry::default();
        let m = Value::Mat3(Mat3::IDENTITY * 2.0);
        let v = Mat3Namespace.call("mul", &[m.clone(), Value::Vec3(Vec3::UNIT_X)], &t).unwrap();
        assert_eq!(v, Some(Value::Vec3(Vec3::new(2.0, 0.0, 0.0))));
        let s = Mat3Namespace.call("mul", &[m.clone(), Value::Float(0.5)], &t).unwrap();
        assert_eq!(s, Some(Value::Mat3(Mat3::IDENTITY)));
        let mm = Mat3Namespace.call("mul", &[m.clone(), m], &t).unwrap();
        assert_eq!(mm, Some(Value::Mat3(Mat3::IDENTITY * 4.0)));
    }

    #[test]
    fn mul_rejects_bool() {
        let t = TypeRegistry::default();
        let err = Mat2Namespace
            .call("mul", &[Value::Mat2(Mat2::IDENTITY), Value::Bool(true)], &t)
            .unwrap_err();
        assert_eq!(err, RuntimeError::TypeMismatch { expected: "mat2, vec2 or float", got: "bool" });
    }

    #[test]
    fn unhandled_name_is_none() {
        let t = TypeRegistry::default();
        assert_eq!(Mat2Namespace.call("frobnicate", &[], &t), Ok(None));
    }
}
