//! rill-exec: the execution contract between a rill host engine and its
//! function extensions.
//!
//! This crate provides:
//!
//! - **Schema**: [`FunctionSchema`] metadata a host can list and document
//! - **Functions**: the [`ScalarFunction`] / [`ConfiguredFunction`] capability traits
//! - **Registry**: [`FunctionRegistry`], the interface table hosts bind against
//! - **State**: the optional [`FunctionState`] checkpoint capability
//! - **Errors**: configuration and bind errors
//!
//! # Architecture
//!
//! ```text
//! extension bundle ──register──▶ FunctionRegistry
//!                                     │
//! query call site  ──bind("str:coalesce", &[declared types])
//!                                     │
//!                               ScalarFunction::configure   (once, validated)
//!                                     │
//!                          Arc<dyn ConfiguredFunction>
//!                                     │
//! event pipeline   ──evaluate(values)──▶ first per event, concurrently
//! ```

pub mod error;
pub mod function;
pub mod registry;
pub mod schema;
pub mod state;

pub use error::{ConfigError, ConfigResult, RegistryError};
pub use function::{ConfiguredFunction, ScalarFunction};
pub use registry::FunctionRegistry;
pub use schema::{Example, FunctionSchema, ParamSchema};
pub use state::FunctionState;
