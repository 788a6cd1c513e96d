//! `Vec2` and `Vec3` namespaces: constructors, the `isVector` predicate and
//! free-function forms of the vector operations.
//!
//! Vector arguments are read structurally, so any host object with numeric
//! `x`, `y` (and `z`) fields is accepted wherever a vector is.

use gnomon_math::{Vec2, Vec3};

use crate::error::RuntimeError;
use crate::types::registry::TypeRegistry;
use crate::Value;
use super::{Export, NamespaceInfo, NamespaceProvider, as_float, c, check_argc, f};

// ─── Vec2 ─────────────────────────────────────────────────────────────────────

pub struct Vec2Namespace;

impl NamespaceInfo for Vec2Namespace {
    fn name(&self) -> &'static str { "Vec2" }

    fn exports(&self) -> Vec<Export> {
        vec![
            f("from"), f("isVector"), f("isVector2"),
            f("dot"), f("length"), f("normalize"),
            f("add"), f("sub"), f("scale"),
            c("Zero"),
        ]
    }
}

impl NamespaceProvider for Vec2Namespace {
    fn call(
        &self,
        name: &str,
        args: &[Value],
        t:    &TypeRegistry,
    ) -> Result<Option<Value>, RuntimeError> {
        let v = match name {
            "from" => match args {
                [s]    => Value::Vec2(Vec2::splat(as_float(s)?)),
                [x, y] => Value::Vec2(Vec2::new(as_float(x)?, as_float(y)?)),
                _ => return Err(RuntimeError::ArgCount { name: name.into(), expected: 2, got: args.len() }),
            },
            "isVector" | "isVector2" => { check_argc(name, args, 1)?; Value::Bool(t.is_vector2(&args[0])) }
            "length" => { check_argc(name, args, 1)?; Value::Float(t.as_vec2(&args[0])?.length()) }
            "normalize" => { check_argc(name, args, 1)?; Value::Vec2(t.as_vec2(&args[0])?.normalize()) }
            "dot" => {
                check_argc(name, args, 2)?;
                Value::Float(t.as_vec2(&args[0])?.dot(t.as_vec2(&args[1])?))
            }
            "add" => {
                check_argc(name, args, 2)?;
                Value::Vec2(t.as_vec2(&args[0])? + t.as_vec2(&args[1])?)
            }
            "sub" => {
                check_argc(name, args, 2)?;
                Value::Vec2(t.as_vec2(&args[0])? - t.as_vec2(&args[1])?)
            }
            "scale" => {
                check_argc(name, args, 2)?;
                Value::Vec2(t.as_vec2(&args[0])?.scale(as_float(&args[1])?))
            }
            _ => return Ok(None),
        };
        Ok(Some(v))
    }

    fn get_constant(&self, name: &str) -> Option<Value> {
        match name {
            "Zero" => Some(Value::Vec2(Vec2::ZERO)),
            _ => None,
        }
    }
}

// ─── Vec3 ─────────────────────────────────────────────────────────────────────

pub struct Vec3Namespace;

impl NamespaceInfo for Vec3Namespace {
    fn name(&self) -> &'static str { "Vec3" }

    fn exports(&self) -> Vec<Export> {
        vec![
            f("from"), f("isVector"), f("isVector3"),
            f("dot"), f("cross"), f("length"), f("normalize"),
            f("add"), f("sub"), f("scale"),
            c("Zero"), c("Up"),
        ]
    }
}

impl NamespaceProvider for Vec3Namespace {
    fn call(
        &self,
        name: &str,
        args: &[Value],
        t:    &TypeRegistry,
    ) -> Result<Option<Value>, RuntimeError> {
        let v = match name {
            "from" => match args {
                [s]       => Value::Vec3(Vec3::splat(as_float(s)?)),
                [x, y, z] => Value::Vec3(Vec3::new(as_float(x)?, as_float(y)?, as_float(z)?)),
                _ => return Err(RuntimeError::ArgCount { name: name.into(), expected: 3, got: args.len() }),
            },
            "isVector" | "isVector3" => { check_argc(name, args, 1)?; Value::Bool(t.is_vector3(&args[0])) }
            "length" => { check_argc(name, args, 1)?; Value::Float(t.as_vec3(&args[0])?.length()) }
            "normalize" => { check_argc(name, args, 1)?; Value::Vec3(t.as_vec3(&args[0])?.normalize()) }
            "dot" => {
                check_argc(name, args, 2)?;
                Value::Float(t.as_vec3(&args[0])?.dot(t.as_vec3(&args[1])?))
            }
            "cross" => {
                check_argc(name, args, 2)?;
                Value::Vec3(t.as_vec3(&args[0])?.cross(t.as_vec3(&args[1])?))
            }
            "add" => {
                check_argc(name, args, 2)?;
                Value::Vec3(t.as_vec3(&args[0])? + t.as_vec3(&args[1])?)
            }
            "sub" => {
                check_argc(name, args, 2)?;
                Value::Vec3(t.as_vec3(&args[0])? - t.as_vec3(&args[1])?)
            }
            "scale" => {
                check_argc(name, args, 2)?;
                Value::Vec3(t.as_vec3(&args[0])?.scale(as_float(&args[1])?))
            }
            _ => return Ok(None),
        };
        Ok(Some(v))
    }

    fn get_constant(&self, name: &str) -> Option<Value> {
        match name {
            "Zero" => Some(Value::Vec3(Vec3::ZERO)),
            "Up"   => Some(Value::Vec3(Vec3::UNIT_Y)),
            _ => None,
        }
    }
}
