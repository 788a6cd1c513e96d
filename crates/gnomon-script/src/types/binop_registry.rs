//! Operator overload registry. Maps (BinOp, lhs_type, rhs_type) → implementation.
//!
//! This is where `m * x` picks scalar, vector or matrix multiplication: the
//! operand type keys select the entry, no branch on argument shape. Records
//! are normalized to a typed value by the caller before lookup.

use std::collections::HashMap;
use std::fmt;

use crate::error::RuntimeError;
use crate::runtime::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Eq,
    NotEq,
}

impl BinOp {
    pub const fn symbol(self) -> &'static str {
        match self {
            BinOp::Add   => "+",
            BinOp::Sub   => "-",
            BinOp::Mul   => "*",
            BinOp::Eq    => "==",
            BinOp::NotEq => "!=",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ─── Function pointer ─────────────────────────────────────────────────────────

pub type BinopFn = fn(Value, Value) -> Result<Value, RuntimeError>;

// ─── Registry ─────────────────────────────────────────────────────────────────

pub struct BinopRegistry {
    ops: HashMap<(BinOp, &'static str, &'static str), (&'static str, BinopFn)>,
}

impl BinopRegistry {
    pub fn new() -> Self {
        Self { ops: HashMap::new() }
    }

    pub fn register(&mut self, op: BinOp, lhs: &'static str, rhs: &'static str, ret: &'static str, f: BinopFn) {
        self.ops.insert((op, lhs, rhs), (ret, f));
    }

    /// Result type key for `lhs op rhs`, or `None` if not registered.
    pub fn result_type(&self, op: BinOp, lhs: &'static str, rhs: &'static str) -> Option<&'static str> {
        self.ops.get(&(op, lhs, rhs)).map(|(ret, _)| *ret)
    }

    /// Evaluate `l op r`. Returns `None` if no handler is registered for this
    /// type combination; the caller turns that into its own error.
    pub fn eval(&self, op: BinOp, l: Value, r: Value) -> Option<Result<Value, RuntimeError>> {
        let key = (op, l.type_name(), r.type_name());
        self.ops.get(&key).map(|(_, f)| f(l, r))
    }
}

impl Default for BinopRegistry {
    fn default() -> Self {
        let mut r = Self::new();
        register_float(&mut r);
        register_vec2(&mut r);
        register_vec3(&mut r);
        register_mat2(&mut r);
        register_mat3(&mut r);
        r
    }
}

// ─── float ────────────────────────────────────────────────────────────────────

fn register_float(r: &mut BinopRegistry) {
    use BinOp::*;
    r.register(Add, "float", "float", "float", |l, r| { let (Value::Float(a), Value::Float(b)) = (l, r) else { unreachable!() }; Ok(Value::Float(a + b)) });
    r.register(Sub, "float", "float", "float", |l, r| { let (Value::Float(a), Value::Float(b)) = (l, r) else { unreachable!() }; Ok(Value::Float(a - b)) });
    r.register(Mul, "float", "float", "float", |l, r| { let (Value::Float(a), Value::Float(b)) = (l, r) else { unreachable!() }; Ok(Value::Float(a * b)) });
    r.register(Eq,    "float", "float", "bool", |l, r| { let (Value::Float(a), Value::Float(b)) = (l, r) else { unreachable!() }; Ok(Value::Bool(a == b)) });
    r.register(NotEq, "float", "float", "bool", |l, r| { let (Value::Float(a), Value::Float(b)) = (l, r) else { unreachable!() }; Ok(Value::Bool(a != b)) });
}

// ─── vec2 ─────────────────────────────────────────────────────────────────────

fn register_vec2(r: &mut BinopRegistry) {
    use BinOp::*;
    r.register(Add, "vec2", "vec2", "vec2", |l, r| {
        let (Value::Vec2(a), Value::Vec2(b)) = (l, r) else { unreachable!() };
        Ok(Value::Vec2(a + b))
    });
    r.register(Sub, "vec2", "vec2", "vec2", |l, r| {
        let (Value::Vec2(a), Value::Vec2(b)) = (l, r) else { unreachable!() };
        Ok(Value::Vec2(a - b))
    });
    r.register(Mul, "vec2", "float", "vec2", |l, r| {
        let (Value::Vec2(v), Value::Float(s)) = (l, r) else { unreachable!() };
        Ok(Value::Vec2(v * s))
    });
    r.register(Mul, "float", "vec2", "vec2", |l, r| {
        let (Value::Float(s), Value::Vec2(v)) = (l, r) else { unreachable!() };
        Ok(Value::Vec2(v * s))
    });
    r.register(Eq,    "vec2", "vec2", "bool", |l, r| { let (Value::Vec2(a), Value::Vec2(b)) = (l, r) else { unreachable!() }; Ok(Value::Bool(a == b)) });
    r.register(NotEq, "vec2", "vec2", "bool", |l, r| { let (Value::Vec2(a), Value::Vec2(b)) = (l, r) else { unreachable!() }; Ok(Value::Bool(a != b)) });
}

// ─── vec3 ─────────────────────────────────────────────────────────────────────

fn register_vec3(r: &mut BinopRegistry) {
    use BinOp::*;
    r.register(Add, "vec3", "vec3", "vec3", |l, r| {
        let (Value::Vec3(a), Value::Vec3(b)) = (l, r) else { unreachable!() };
        Ok(Value::Vec3(a + b))
    });
    r.register(Sub, "vec3", "vec3", "vec3", |l, r| {
        let (Value::Vec3(a), Value::Vec3(b)) = (l, r) else { unreachable!() };
        Ok(Value::Vec3(a - b))
    });
    r.register(Mul, "vec3", "float", "vec3", |l, r| {
        let (Value::Vec3(v), Value::Float(s)) = (l, r) else { unreachable!() };
        Ok(Value::Vec3(v * s))
    });
    r.register(Mul, "float", "vec3", "vec3", |l, r| {
        let (Value::Float(s), Value::Vec3(v)) = (l, r) else { unreachable!() };
        Ok(Value::Vec3(v * s))
    });
    r.register(Eq,    "vec3", "vec3", "bool", |l, r| { let (Value::Vec3(a), Value::Vec3(b)) = (l, r) else { unreachable!() }; Ok(Value::Bool(a == b)) });
    r.register(NotEq, "vec3", "vec3", "bool", |l, r| { let (Value::Vec3(a), Value::Vec3(b)) = (l, r) else { unreachable!() }; Ok(Value::Bool(a != b)) });
}

// ─── mat2 ─────────────────────────────────────────────────────────────────────

fn register_mat2(r: &mut BinopRegistry) {
    use BinOp::*;
    r.register(Mul, "mat2", "mat2", "mat2", |l, r| {
        let (Value::Mat2(a), Value::Mat2(b)) = (l, r) else { unreachable!() };
        Ok(Value::Mat2(a * b))
    });
    r.register(Mul, "mat2", "vec2", "vec2", |l, r| {
        let (Value::Mat2(m), Value::Vec2(v)) = (l, r) else { unreachable!() };
        Ok(Value::Vec2(m * v))
    });
    r.register(Mul, "mat2", "float", "mat2", |l, r| {
        let (Value::Mat2(m), Value::Float(s)) = (l, r) else { unreachable!() };
        Ok(Value::Mat2(m * s))
    });
    r.register(Mul, "float", "mat2", "mat2", |l, r| {
        let (Value::Float(s), Value::Mat2(m)) = (l, r) else { unreachable!() };
        Ok(Value::Mat2(m * s))
    });
    r.register(Eq,    "mat2", "mat2", "bool", |l, r| { let (Value::Mat2(a), Value::Mat2(b)) = (l, r) else { unreachable!() }; Ok(Value::Bool(a == b)) });
    r.register(NotEq, "mat2", "mat2", "bool", |l, r| { let (Value::Mat2(a), Value::Mat2(b)) = (l, r) else { unreachable!() }; Ok(Value::Bool(a != b)) });
}

// ─── mat3 ─────────────────────────────────────────────────────────────────────

fn register_mat3(r: &mut BinopRegistry) {
    use BinOp::*;
    r.register(Mul, "mat3", "mat3", "mat3", |l, r| {
        let (Value::Mat3(a), Value::Mat3(b)) = (l, r) else { unreachable!() };
        Ok(Value::Mat3(a * b))
    });
    r.register(Mul, "mat3", "vec3", "vec3", |l, r| {
        let (Value::Mat3(m), Value::Vec3(v)) = (l, r) else { unreachable!() };
        Ok(Value::Vec3(m * v))
    });
    r.register(Mul, "mat3", "float", "mat3", |l, r| {
        let (Value::Mat3(m), Value::Float(s)) = (l, r) else { unreachable!() };
        Ok(Value::Mat3(m * s))
    });
    r.register(Mul, "float", "mat3", "mat3", |l, r| {
        let (Value::Float(s), Value::Mat3(m)) = (l, r) else { unreachable!() };
        Ok(Value::Mat3(m * s))
    });
    r.register(Eq,    "mat3", "mat3", "bool", |l, r| { let (Value::Mat3(a), Value::Mat3(b)) = (l, r) else { unreachable!() }; Ok(Value::Bool(a == b)) });
    r.register(NotEq, "mat3", "mat3", "bool", |l, r| { let (Value::Mat3(a), Value::Mat3(b)) = (l, r) else { unreachable!() }; Ok(Value::Bool(a != b)) });
}
