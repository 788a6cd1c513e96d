use std::collections::BTreeMap;

use gnomon_math::{Mat2, Mat3, Vec2, Vec3};

/// A value crossing the host boundary.
///
/// Typed variants come from this crate; `Record` is a host object of unknown
/// class that only promises named fields. Records are matched structurally
/// (see [`crate::types::registry::TypeRegistry::conforms`]). `List` is a host
/// array, e.g. the flat coefficient list handed to `Mat2.from`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Float(f64),
    Bool(bool),
    Vec2(Vec2),
    Vec3(Vec3),
    Mat2(Mat2),
    Mat3(Mat3),
    Record(BTreeMap<String, Value>),
    List(Vec<Value>),
}

impl Value {
    /// Builds a record from `(field, value)` pairs.
    pub fn record<K: Into<String>>(fields: impl IntoIterator<Item = (K, Value)>) -> Self {
        Value::Record(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Float(_)  => "float",
            Value::Bool(_)   => "bool",
            Value::Vec2(_)   => "vec2",
            Value::Vec3(_)   => "vec3",
            Value::Mat2(_)   => "mat2",
            Value::Mat3(_)   => "mat3",
            Value::Record(_) => "record",
            Value::List(_)   => "list",
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self { Value::Float(x) }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self { Value::Bool(b) }
}

impl From<Vec2> for Value {
    fn from(v: Vec2) -> Self { Value::Vec2(v) }
}

impl From<Vec3> for Value {
    fn from(v: Vec3) -> Self { Value::Vec3(v) }
}

impl From<Mat2> for Value {
    fn from(m: Mat2) -> Self { Value::Mat2(m) }
}

impl From<Mat3> for Value {
    fn from(m: Mat3) -> Self { Value::Mat3(m) }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self { Value::List(items) }
}
