//! Type descriptor registry: the single source of truth for what each value type
//! exposes.
//!
//! Consumed by:
//!   • `Host::get_field` / `Host::call_method`: direct field and method access
//!   • the structural predicates (`is_vector3`, `is_matrix2`, ...) and the
//!     `as_*` coercions used by namespaces and operators
//!
//! A host `Record` answers field reads from its own map, so a record with
//! numeric `x`, `y`, `z` passes every check a typed `vec3` does.

use std::collections::HashMap;

use gnomon_math::{Mat2, Mat3, Vec2, Vec3};

use crate::error::RuntimeError;
use crate::runtime::value::Value;

// ─── Function pointer aliases ─────────────────────────────────────────────────

/// Read a field from a value. Caller guarantees `v` is the right variant.
pub type FieldGetter = fn(&Value) -> Value;

/// Call a method on a receiver with pre-evaluated args. The registry is handed
/// back in so arguments can be coerced structurally.
pub type MethodFn = fn(&Value, &[Value], &TypeRegistry) -> Result<Value, RuntimeError>;

// ─── Descriptors ──────────────────────────────────────────────────────────────

pub struct FieldDesc {
    pub name: &'static str,
    pub get:  FieldGetter,
}

pub struct MethodDesc {
    pub name:  &'static str,
    pub arity: usize,
    pub call:  MethodFn,
}

pub struct TypeDesc {
    pub name:    &'static str,
    pub fields:  Vec<FieldDesc>,
    pub methods: Vec<MethodDesc>,
}

// ─── Structural shapes ────────────────────────────────────────────────────────

pub const VEC2_FIELDS: [&str; 2] = ["x", "y"];
pub const VEC3_FIELDS: [&str; 3] = ["x", "y", "z"];
pub const MAT2_FIELDS: [&str; 4] = ["ux", "vx", "uy", "vy"];
/// Row-major, matching `Mat3::new`.
pub const MAT3_FIELDS: [&str; 9] = ["ux", "vx", "wx", "uy", "vy", "wy", "uz", "vz", "wz"];

// ─── Registry ─────────────────────────────────────────────────────────────────

pub struct TypeRegistry {
    types: HashMap<&'static str, TypeDesc>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self { types: HashMap::new() }
    }

    pub fn register(&mut self, desc: TypeDesc) {
        self.types.insert(desc.name, desc);
    }

    /// Get the value of `field` from `v`. Records answer from their own map.
    /// Returns None if the type or field isn't registered.
    pub fn get_field(&self, v: &Value, field: &str) -> Option<Value> {
        if let Value::Record(map) = v {
            return map.get(field).cloned();
        }
        self.types.get(v.type_name())?
            .fields.iter()
            .find(|f| f.name == field)
            .map(|f| (f.get)(v))
    }

    /// Call `method` on `recv` with pre-evaluated `args`.
    /// Returns None if the type or method isn't registered.
    pub fn call_method(
        &self,
        recv:   &Value,
        method: &str,
        args:   &[Value],
    ) -> Option<Result<Value, RuntimeError>> {
        self.types.get(recv.type_name())?
            .methods.iter()
            .find(|m| m.name == method)
            .map(|m| {
                if args.len() != m.arity {
                    return Err(RuntimeError::ArgCount {
                        name: method.to_string(), expected: m.arity, got: args.len(),
                    });
                }
                (m.call)(recv, args, self)
            })
    }

    // ── Structural typing ─────────────────────────────────────────────────────

    fn float_field(&self, v: &Value, field: &str) -> Option<f64> {
        self.get_field(v, field)?.as_float()
    }

    /// True iff every named field reads as a float. Extra fields are ignored.
    pub fn conforms(&self, v: &Value, fields: &[&str]) -> bool {
        fields.iter().all(|f| self.float_field(v, f).is_some())
    }

    pub fn is_vector2(&self, v: &Value) -> bool { self.conforms(v, &VEC2_FIELDS) }
    pub fn is_vector3(&self, v: &Value) -> bool { self.conforms(v, &VEC3_FIELDS) }
    pub fn is_matrix2(&self, v: &Value) -> bool { self.conforms(v, &MAT2_FIELDS) }
    pub fn is_matrix3(&self, v: &Value) -> bool { self.conforms(v, &MAT3_FIELDS) }

    fn floats<const N: usize>(&self, v: &Value, fields: &[&str; N]) -> Option<[f64; N]> {
        let mut out = [0.0; N];
        for (slot, field) in out.iter_mut().zip(fields) {
            *slot = self.float_field(v, field)?;
        }
        Some(out)
    }

    pub fn as_vec2(&self, v: &Value) -> Result<Vec2, RuntimeError> {
        self.floats(v, &VEC2_FIELDS).map(Vec2::from).ok_or_else(|| RuntimeError::mismatch("vec2", v))
    }

    pub fn as_vec3(&self, v: &Value) -> Result<Vec3, RuntimeError> {
        self.floats(v, &VEC3_FIELDS).map(Vec3::from).ok_or_else(|| RuntimeError::mismatch("vec3", v))
    }

    pub fn as_mat2(&self, v: &Value) -> Result<Mat2, RuntimeError> {
        self.floats(v, &MAT2_FIELDS).map(Mat2::from).ok_or_else(|| RuntimeError::mismatch("mat2", v))
    }

    pub fn as_mat3(&self, v: &Value) -> Result<Mat3, RuntimeError> {
        self.floats(v, &MAT3_FIELDS).map(Mat3::from).ok_or_else(|| RuntimeError::mismatch("mat3", v))
    }

    /// Replace a record with the most specific typed value it conforms to
    /// (mat3, then mat2, vec3, vec2). Anything else passes through unchanged.
    pub fn normalize(&self, v: Value) -> Value {
        if !matches!(v, Value::Record(_)) {
            return v;
        }
        if let Ok(m) = self.as_mat3(&v) { return Value::Mat3(m); }
        if let Ok(m) = self.as_mat2(&v) { return Value::Mat2(m); }
        if let Ok(p) = self.as_vec3(&v) { return Value::Vec3(p); }
        if let Ok(p) = self.as_vec2(&v) { return Value::Vec2(p); }
        v
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        let mut r = Self::new();
        r.register(TypeDesc { name: "float", fields: vec![], methods: vec![] });
        r.register(TypeDesc { name: "bool",  fields: vec![], methods: vec![] });
        r.register(vec2_desc());
        r.register(vec3_desc());
        r.register(mat2_desc());
        r.register(mat3_desc());
        r
    }
}

// ─── vec2 ─────────────────────────────────────────────────────────────────────

fn vec2_desc() -> TypeDesc {
    TypeDesc {
        name: "vec2",
        fields: vec![
            FieldDesc { name: "x", get: |v| { let Value::Vec2(p) = v else { unreachable!() }; Value::Float(p.x) } },
            FieldDesc { name: "y", get: |v| { let Value::Vec2(p) = v else { unreachable!() }; Value::Float(p.y) } },
        ],
        methods: vec![
            MethodDesc {
                name: "length", arity: 0,
                call: |v, _args, _types| {
                    let Value::Vec2(p) = v else { unreachable!() };
                    Ok(Value::Float(p.length()))
                },
            },
            MethodDesc {
                name: "normalize", arity: 0,
                call: |v, _args, _types| {
                    let Value::Vec2(p) = v else { unreachable!() };
                    Ok(Value::Vec2(p.normalize()))
                },
            },
            MethodDesc {
                name: "dot", arity: 1,
                call: |v, args, types| {
                    let Value::Vec2(a) = v else { unreachable!() };
                    Ok(Value::Float(a.dot(types.as_vec2(&args[0])?)))
                },
            },
            MethodDesc {
                name: "distance", arity: 1,
                call: |v, args, types| {
                    let Value::Vec2(a) = v else { unreachable!() };
                    Ok(Value::Float(a.distance(types.as_vec2(&args[0])?)))
                },
            },
            MethodDesc {
                name: "lerp", arity: 2,
                call: |v, args, types| {
                    let Value::Vec2(a) = v else { unreachable!() };
                    let b = types.as_vec2(&args[0])?;
                    let t = args[1].as_float().ok_or_else(|| RuntimeError::mismatch("float", &args[1]))?;
                    Ok(Value::Vec2(a.lerp(b, t)))
                },
            },
        ],
    }
}

// ─── vec3 ─────────────────────────────────────────────────────────────────────

fn vec3_desc() -> TypeDesc {
    TypeDesc {
        name: "vec3",
        fields: vec![
            FieldDesc { name: "x", get: |v| { let Value::Vec3(p) = v else { unreachable!() }; Value::Float(p.x) } },
            FieldDesc { name: "y", get: |v| { let Value::Vec3(p) = v else { unreachable!() }; Value::Float(p.y) } },
            FieldDesc { name: "z", get: |v| { let Value::Vec3(p) = v else { unreachable!() }; Value::Float(p.z) } },
        ],
        methods: vec![
            MethodDesc {
                name: "length", arity: 0,
                call: |v, _args, _types| {
                    let Value::Vec3(p) = v else { unreachable!() };
                    Ok(Value::Float(p.length()))
                },
            },
            MethodDesc {
                name: "normalize", arity: 0,
                call: |v, _args, _types| {
                    let Value::Vec3(p) = v else { unreachable!() };
                    Ok(Value::Vec3(p.normalize()))
                },
            },
            MethodDesc {
                name: "dot", arity: 1,
                call: |v, args, types| {
                    let Value::Vec3(a) = v else { unreachable!() };
                    Ok(Value::Float(a.dot(types.as_vec3(&args[0])?)))
                },
            },
            MethodDesc {
                name: "cross", arity: 1,
                call: |v, args, types| {
                    let Value::Vec3(a) = v else { unreachable!() };
                    Ok(Value::Vec3(a.cross(types.as_vec3(&args[0])?)))
                },
            },
            MethodDesc {
                name: "distance", arity: 1,
                call: |v, args, types| {
                    let Value::Vec3(a) = v else { unreachable!() };
                    Ok(Value::Float(a.distance(types.as_vec3(&args[0])?)))
                },
            },
            MethodDesc {
                name: "lerp", arity: 2,
                call: |v, args, types| {
                    let Value::Vec3(a) = v else { unreachable!() };
                    let b = types.as_vec3(&args[0])?;
                    let t = args[1].as_float().ok_or_else(|| RuntimeError::mismatch("float", &args[1]))?;
                    Ok(Value::Vec3(a.lerp(b, t)))
                },
            },
        ],
    }
}

// ─── mat2 ─────────────────────────────────────────────────────────────────────

fn mat2_desc() -> TypeDesc {
    TypeDesc {
        name: "mat2",
        fields: vec![
            FieldDesc { name: "ux", get: |v| { let Value::Mat2(m) = v else { unreachable!() }; Value::Float(m.ux) } },
            FieldDesc { name: "vx", get: |v| { let Value::Mat2(m) = v else { unreachable!() }; Value::Float(m.vx) } },
            FieldDesc { name: "uy", get: |v| { let Value::Mat2(m) = v else { unreachable!() }; Value::Float(m.uy) } },
            FieldDesc { name: "vy", get: |v| { let Value::Mat2(m) = v else { unreachable!() }; Value::Float(m.vy) } },
        ],
        methods: vec![
            MethodDesc { name: "col1", arity: 0, call: |v, _, _| { let Value::Mat2(m) = v else { unreachable!() }; Ok(Value::Vec2(m.col1())) } },
            MethodDesc { name: "col2", arity: 0, call: |v, _, _| { let Value::Mat2(m) = v else { unreachable!() }; Ok(Value::Vec2(m.col2())) } },
            MethodDesc { name: "row1", arity: 0, call: |v, _, _| { let Value::Mat2(m) = v else { unreachable!() }; Ok(Value::Vec2(m.row1())) } },
            MethodDesc { name: "row2", arity: 0, call: |v, _, _| { let Value::Mat2(m) = v else { unreachable!() }; Ok(Value::Vec2(m.row2())) } },
            MethodDesc {
                name: "trace", arity: 0,
                call: |v, _args, _types| {
                    let Value::Mat2(m) = v else { unreachable!() };
                    Ok(Value::Float(m.trace()))
                },
            },
            MethodDesc {
                name: "determinant", arity: 0,
                call: |v, _args, _types| {
                    let Value::Mat2(m) = v else { unreachable!() };
                    Ok(Value::Float(m.determinant()))
                },
            },
            MethodDesc {
                name: "transpose", arity: 0,
                call: |v, _args, _types| {
                    let Value::Mat2(m) = v else { unreachable!() };
                    Ok(Value::Mat2(m.transpose()))
                },
            },
            MethodDesc {
                name: "cofactor", arity: 0,
                call: |v, _args, _types| {
                    let Value::Mat2(m) = v else { unreachable!() };
                    Ok(Value::Mat2(m.cofactor()))
                },
            },
            MethodDesc {
                name: "adjugate", arity: 0,
                call: |v, _args, _types| {
                    let Value::Mat2(m) = v else { unreachable!() };
                    Ok(Value::Mat2(m.adjugate()))
                },
            },
            MethodDesc {
                name: "inverse", arity: 0,
                call: |v, _args, _types| {
                    let Value::Mat2(m) = v else { unreachable!() };
                    Ok(Value::Mat2(m.inverse()?))
                },
            },
        ],
    }
}

// ─── mat3 ─────────────────────────────────────────────────────────────────────

fn mat3_desc() -> TypeDesc {
    TypeDesc {
        name: "mat3",
        fields: vec![
            FieldDesc { name: "ux", get: |v| { let Value::Mat3(m) = v else { unreachable!() }; Value::Float(m.ux) } },
            FieldDesc { name: "vx", get: |v| { let Value::Mat3(m) = v else { unreachable!() }; Value::Float(m.vx) } },
            FieldDesc { name: "wx", get: |v| { let Value::Mat3(m) = v else { unreachable!() }; Value::Float(m.wx) } },
            FieldDesc { name: "uy", get: |v| { let Value::Mat3(m) = v else { unreachable!() }; Value::Float(m.uy) } },
            FieldDesc { name: "vy", get: |v| { let Value::Mat3(m) = v else { unreachable!() }; Value::Float(m.vy) } },
            FieldDesc { name: "wy", get: |v| { let Value::Mat3(m) = v else { unreachable!() }; Value::Float(m.wy) } },
            FieldDesc { name: "uz", get: |v| { let Value::Mat3(m) = v else { unreachable!() }; Value::Float(m.uz) } },
            FieldDesc { name: "vz", get: |v| { let Value::Mat3(m) = v else { unreachable!() }; Value::Float(m.vz) } },
            FieldDesc { name: "wz", get: |v| { let Value::Mat3(m) = v else { unreachable!() }; Value::Float(m.wz) } },
        ],
        methods: vec![
            MethodDesc { name: "col1", arity: 0, call: |v, _, _| { let Value::Mat3(m) = v else { unreachable!() }; Ok(Value::Vec3(m.col1())) } },
            MethodDesc { name: "col2", arity: 0, call: |v, _, _| { let Value::Mat3(m) = v else { unreachable!() }; Ok(Value::Vec3(m.col2())) } },
            MethodDesc { name: "col3", arity: 0, call: |v, _, _| { let Value::Mat3(m) = v else { unreachable!() }; Ok(Value::Vec3(m.col3())) } },
            MethodDesc { name: "row1", arity: 0, call: |v, _, _| { let Value::Mat3(m) = v else { unreachable!() }; Ok(Value::Vec3(m.row1())) } },
            MethodDesc { name: "row2", arity: 0, call: |v, _, _| { let Value::Mat3(m) = v else { unreachable!() }; Ok(Value::Vec3(m.row2())) } },
            MethodDesc { name: "row3", arity: 0, call: |v, _, _| { let Value::Mat3(m) = v else { unreachable!() }; Ok(Value::Vec3(m.row3())) } },
            MethodDesc {
                name: "trace", arity: 0,
                call: |v, _args, _types| {
                    let Value::Mat3(m) = v else { unreachable!() };
                    Ok(Value::Float(m.trace()))
                },
            },
            MethodDesc {
                name: "determinant", arity: 0,
                call: |v, _args, _types| {
                    let Value::Mat3(m) = v else { unreachable!() };
                    Ok(Value::Float(m.determinant()))
                },
            },
            MethodDesc {
                name: "transpose", arity: 0,
                call: |v, _args, _types| {
                    let Value::Mat3(m) = v else { unreachable!() };
                    Ok(Value::Mat3(m.transpose()))
                },
            },
            MethodDesc {
                name: "cofactor", arity: 0,
                call: |v, _args, _types| {
                    let Value::Mat3(m) = v else { unreachable!() };
                    Ok(Value::Mat3(m.cofactor()))
                },
            },
            MethodDesc {
                name: "adjugate", arity: 0,
                call: |v, _args, _types| {
                    let Value::Mat3(m) = v else { unreachable!() };
                    Ok(Value::Mat3(m.adjugate()))
                },
            },
            MethodDesc {
                name: "inverse", arity: 0,
                call: |v, _args, _types| {
                    let Value::Mat3(m) = v else { unreachable!() };
                    Ok(Value::Mat3(m.inverse()?))
                },
            },
        ],
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(fields: &[(&str, f64)]) -> Value {
        Value::record(fields.iter().map(|&(k, x)| (k, Value::Float(x))))
    }

    #[test]
    fn record_fields_read_from_map() {
        let r = TypeRegistry::default();
        let v = rec(&[("x", 1.0), ("y", 2.0)]);
        assert_eq!(r.get_field(&v, "y"), Some(Value::Float(2.0)));
        assert_eq!(r.get_field(&v, "z"), None);
    }

    #[test]
    fn predicates_are_structural() {
        let r = TypeRegistry::default();
        let xyz = rec(&[("x", 1.0), ("y", 2.0), ("z", 3.0), ("w", 9.0)]);
        assert!(r.is_vector2(&xyz));
        assert!(r.is_vector3(&xyz));
        assert!(!r.is_matrix2(&xyz));

        assert!(r.is_vector2(&Value::Vec3(Vec3::UNIT_Z)));
        assert!(!r.is_vector3(&Value::Vec2(Vec2::UNIT_X)));
        assert!(r.is_matrix3(&Value::Mat3(Mat3::IDENTITY)));
        assert!(!r.is_matrix3(&Value::Mat2(Mat2::IDENTITY)));
        assert!(!r.is_vector2(&Value::Float(1.0)));
    }

    #[test]
    fn non_numeric_field_does_not_conform() {
        let r = TypeRegistry::default();
        let v = Value::record([("x", Value::Float(1.0)), ("y", Value::Bool(true))]);
        assert!(!r.is_vector2(&v));
        assert_eq!(
            r.as_vec2(&v),
            Err(RuntimeError::TypeMismatch { expected: "vec2", got: "record" })
        );
    }

    #[test]
    fn normalize_picks_most_specific_shape() {
        let r = TypeRegistry::default();
        let m = rec(&[("ux", 1.0), ("vx", 2.0), ("uy", 3.0), ("vy", 4.0)]);
        assert_eq!(r.normalize(m), Value::Mat2(Mat2::new(1.0, 2.0, 3.0, 4.0)));
        let v = rec(&[("x", 1.0), ("y", 2.0), ("z", 3.0)]);
        assert_eq!(r.normalize(v), Value::Vec3(Vec3::new(1.0, 2.0, 3.0)));
        let other = rec(&[("a", 1.0)]);
        assert_eq!(r.normalize(other.clone()), other);
    }

    #[test]
    fn method_arity_is_checked() {
        let r = TypeRegistry::default();
        let res = r.call_method(&Value::Vec3(Vec3::UNIT_X), "dot", &[]);
        assert_eq!(
            res,
            Some(Err(RuntimeError::ArgCount { name: "dot".into(), expected: 1, got: 0 }))
        );
        assert!(r.call_method(&Value::Vec3(Vec3::UNIT_X), "nope", &[]).is_none());
    }

    #[test]
    fn cross_accepts_records() {
        let r = TypeRegistry::default();
        let y = rec(&[("x", 0.0), ("y", 1.0), ("z", 0.0)]);
        let out = r.call_method(&Value::Vec3(Vec3::UNIT_X), "cross", &[y]);
        assert_eq!(out, Some(Ok(Value::Vec3(Vec3::UNIT_Z))));
    }
}
