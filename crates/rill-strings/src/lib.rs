//! String-namespace function extensions for rill.
//!
//! Every function in this bundle registers under the `str` namespace.
//! Currently provided:
//!
//! - `str:coalesce` — first non-null of its same-typed arguments

pub mod coalesce;

pub use coalesce::Coalesce;

use rill_exec::FunctionRegistry;

/// Register all string-namespace functions with the registry.
pub fn register_string_functions(registry: &mut FunctionRegistry) {
    registry.register(Coalesce);
}
