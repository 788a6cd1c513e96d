use crate::error::RuntimeError;
use crate::types::registry::TypeRegistry;
use crate::Value;

pub mod vec;
pub mod mat;

// ─── Export ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum ExportKind { Function, Constant }

#[derive(Debug, Clone)]
pub struct Export {
    pub name: &'static str,
    pub kind: ExportKind,
}

pub(crate) fn f(name: &'static str) -> Export {
    Export { name, kind: ExportKind::Function }
}

pub(crate) fn c(name: &'static str) -> Export {
    Export { name, kind: ExportKind::Constant }
}

// ─── Interfaces ───────────────────────────────────────────────────────────────

/// What a host needs to list a namespace: its name and exported members.
pub trait NamespaceInfo: Send + Sync {
    fn name(&self) -> &'static str;
    fn exports(&self) -> Vec<Export>;

    fn get_export(&self, name: &str) -> Option<Export> {
        self.exports().into_iter().find(|e| e.name == name)
    }
}

/// Call dispatch + constant lookup. `call` returns `Ok(None)` for names it
/// does not handle. The type registry is passed in so vector- and
/// matrix-like arguments can be read structurally.
pub trait NamespaceProvider: NamespaceInfo {
    fn call(
        &self,
        name:  &str,
        args:  &[Value],
        types: &TypeRegistry,
    ) -> Result<Option<Value>, RuntimeError>;

    fn get_constant(&self, name: &str) -> Option<Value>;
}

// ─── Registry ─────────────────────────────────────────────────────────────────

pub struct NamespaceRegistry {
    providers: Vec<Box<dyn NamespaceProvider>>,
}

impl NamespaceRegistry {
    pub fn new() -> Self { Self { providers: Vec::new() } }

    pub fn register(&mut self, p: Box<dyn NamespaceProvider>) { self.providers.push(p); }

    pub fn get(&self, name: &str) -> Option<&dyn NamespaceProvider> {
        self.providers.iter().find(|p| p.name() == name).map(|p| p.as_ref())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.providers.iter().map(|p| p.name())
    }

    pub fn standard() -> Self {
        let mut r = Self::new();
        r.register(Box::new(vec::Vec2Namespace));
        r.register(Box::new(vec::Vec3Namespace));
        r.register(Box::new(mat::Mat2Namespace));
        r.register(Box::new(mat::Mat3Namespace));
        r
    }
}

impl Default for NamespaceRegistry {
    fn default() -> Self { Self::standard() }
}

// ─── Shared helpers ───────────────────────────────────────────────────────────

pub(crate) fn as_float(v: &Value) -> Result<f64, RuntimeError> {
    v.as_float().ok_or_else(|| RuntimeError::mismatch("float", v))
}

pub(crate) fn check_argc(name: &str, args: &[Value], n: usize) -> Result<(), RuntimeError> {
    if args.len() != n {
        Err(RuntimeError::ArgCount { name: name.to_string(), expected: n, got: args.len() })
    } else {
        Ok(())
    }
}

/// All arguments as floats, or the first non-float as a type mismatch.
pub(crate) fn float_args(args: &[Value]) -> Result<Vec<f64>, RuntimeError> {
    args.iter().map(as_float).collect()
}
