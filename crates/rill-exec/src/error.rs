//! Configuration and bind errors.

use rill_types::AttributeType;
use thiserror::Error;

/// Result type for configuration-time validation.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while configuring a function call site.
///
/// Both variants are static authoring mistakes in the query definition —
/// fatal, with no retry path. Nothing in this crate can fail once a call
/// site is configured.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The call site supplied no arguments at all.
    #[error("{function}() requires at least one argument, but found none")]
    NoArguments {
        /// Qualified function name, e.g. "str:coalesce".
        function: String,
    },

    /// An argument's declared type differs from the first argument's.
    #[error(
        "invalid type for argument {position} of {function}(): required {expected}, found {actual}"
    )]
    TypeMismatch {
        /// Qualified function name.
        function: String,
        /// 1-based position of the offending argument.
        position: usize,
        /// Type every argument is required to share.
        expected: AttributeType,
        /// Type actually declared at `position`.
        actual: AttributeType,
    },
}

/// Errors raised when binding a query call site through the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No function registered under the qualified name.
    #[error("function not found: {0}")]
    NotFound(String),

    /// The function exists but rejected the declared argument types.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
