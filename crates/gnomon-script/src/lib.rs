//! Dynamic host boundary for `gnomon-math`.
//!
//! Values cross in as a tagged [`Value`]. Host objects of unknown class arrive
//! as `Value::Record` and are accepted wherever their fields fit: a record with
//! numeric `x`, `y`, `z` is a vector, one with `ux`..`wz` a 3×3 matrix.
//! Overloads (`Mat3.mul(m, x)`, `a * b`) are resolved by those structural
//! checks or by operand type keys, never by class identity.
//!
//! ```
//! use gnomon_script::{Host, Value};
//!
//! let host = Host::standard();
//! let coeffs: Vec<Value> = [1.0, 2.0, 3.0, 4.0].into_iter().map(Value::Float).collect();
//! let m = host.call("Mat2", "from", &coeffs).unwrap();
//! assert_eq!(host.call("Mat2", "determinant", &[m]).unwrap(), Value::Float(-2.0));
//! ```

pub mod error;
pub mod namespaces;
pub mod runtime;
pub mod types;

pub use error::RuntimeError;
pub use runtime::value::Value;
pub use types::binop_registry::BinOp;

use tracing::{debug, trace};

use namespaces::{ExportKind, NamespaceRegistry};
use types::binop_registry::BinopRegistry;
use types::registry::TypeRegistry;

// ─── Host ─────────────────────────────────────────────────────────────────────

/// Owns the namespace, type and operator registries and routes every call
/// through them.
pub struct Host {
    namespaces: NamespaceRegistry,
    types:      TypeRegistry,
    ops:        BinopRegistry,
}

impl Host {
    /// `Vec2`, `Vec3`, `Mat2` and `Mat3` with the default type and operator tables.
    pub fn standard() -> Self {
        Self {
            namespaces: NamespaceRegistry::standard(),
            types:      TypeRegistry::default(),
            ops:        BinopRegistry::default(),
        }
    }

    pub fn types(&self) -> &TypeRegistry { &self.types }

    pub fn namespaces(&self) -> &NamespaceRegistry { &self.namespaces }

    /// Call `ns.name(args...)`.
    pub fn call(&self, ns: &str, name: &str, args: &[Value]) -> Result<Value, RuntimeError> {
        let provider = self.namespaces.get(ns)
            .ok_or_else(|| RuntimeError::UnknownNamespace(ns.to_string()))?;
        let unknown = || RuntimeError::UnknownMember { namespace: ns.to_string(), name: name.to_string() };

        match provider.get_export(name) {
            Some(e) if e.kind == ExportKind::Function => {}
            _ => {
                debug!(namespace = ns, name, "no such function");
                return Err(unknown());
            }
        }

        trace!(namespace = ns, name, argc = args.len(), "dispatch");
        provider.call(name, args, &self.types)?.ok_or_else(unknown)
    }

    /// Read the constant `ns.name`.
    pub fn constant(&self, ns: &str, name: &str) -> Result<Value, RuntimeError> {
        let provider = self.namespaces.get(ns)
            .ok_or_else(|| RuntimeError::UnknownNamespace(ns.to_string()))?;
        provider.get_constant(name)
            .ok_or_else(|| RuntimeError::UnknownMember { namespace: ns.to_string(), name: name.to_string() })
    }

    /// `v.field`. Records answer from their own map.
    pub fn get_field(&self, v: &Value, field: &str) -> Result<Value, RuntimeError> {
        self.types.get_field(v, field)
            .ok_or_else(|| RuntimeError::UnknownField { ty: v.type_name(), name: field.to_string() })
    }

    /// `recv.method(args...)`. A record receiver is first normalized to the
    /// most specific typed value it conforms to.
    pub fn call_method(&self, recv: &Value, method: &str, args: &[Value]) -> Result<Value, RuntimeError> {
        let recv = self.types.normalize(recv.clone());
        self.types.call_method(&recv, method, args)
            .unwrap_or_else(|| Err(RuntimeError::UnknownMethod { ty: recv.type_name(), name: method.to_string() }))
    }

    /// `lhs op rhs`, dispatched on the operand type keys after normalizing
    /// both sides.
    pub fn binop(&self, op: BinOp, lhs: Value, rhs: Value) -> Result<Value, RuntimeError> {
        let lhs = self.types.normalize(lhs);
        let rhs = self.types.normalize(rhs);
        let (l, r) = (lhs.type_name(), rhs.type_name());
        self.ops.eval(op, lhs, rhs)
            .unwrap_or_else(|| Err(RuntimeError::UnsupportedOperands { op, lhs: l, rhs: r }))
    }
}

impl Default for Host {
    fn default() -> Self { Self::standard() }
}
