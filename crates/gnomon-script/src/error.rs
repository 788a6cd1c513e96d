use gnomon_math::MathError;
use thiserror::Error;

use crate::types::binop_registry::BinOp;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Math(#[from] MathError),

    #[error("expected {expected}, got {got}")]
    TypeMismatch { expected: &'static str, got: &'static str },

    #[error("`{name}` expects {expected} argument(s), got {got}")]
    ArgCount { name: String, expected: usize, got: usize },

    #[error("unknown namespace `{0}`")]
    UnknownNamespace(String),

    #[error("`{namespace}` has no member `{name}`")]
    UnknownMember { namespace: String, name: String },

    #[error("{ty} has no method `{name}`")]
    UnknownMethod { ty: &'static str, name: String },

    #[error("{ty} has no field `{name}`")]
    UnknownField { ty: &'static str, name: String },

    #[error("operator `{op}` not supported for {lhs} and {rhs}")]
    UnsupportedOperands { op: BinOp, lhs: &'static str, rhs: &'static str },
}

impl RuntimeError {
    pub(crate) fn mismatch(expected: &'static str, got: &crate::Value) -> Self {
        Self::TypeMismatch { expected, got: got.type_name() }
    }
}
