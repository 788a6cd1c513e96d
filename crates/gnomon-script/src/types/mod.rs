pub mod binop_registry;
pub mod registry;
