//! Core function traits.

use rill_types::{AttributeType, Value};

use crate::error::ConfigResult;
use crate::schema::FunctionSchema;
use crate::state::FunctionState;

/// A scalar function extension, as registered by a bundle.
///
/// Implementations are stateless descriptors. `configure` validates the
/// declared argument types for one query call site and returns the executor
/// that will run per event; the same descriptor may be configured any number
/// of times, once per call site.
pub trait ScalarFunction: Send + Sync {
    /// The function's schema (namespace, name, parameters, examples).
    fn schema(&self) -> FunctionSchema;

    /// Validate the declared argument types and fix the return type.
    ///
    /// Runs once per call site, before any event flows. Errors here are
    /// fatal to the query definition and never retried.
    fn configure(&self, arg_types: &[AttributeType])
        -> ConfigResult<Box<dyn ConfiguredFunction>>;
}

/// A function bound to one call site, ready for per-event evaluation.
///
/// Executors are immutable after configuration: `evaluate` takes `&self`,
/// so a host may share one executor across its evaluation threads and call
/// it concurrently for different events without locking.
pub trait ConfiguredFunction: Send + Sync + std::fmt::Debug {
    /// The single type every argument shares, fixed at configuration.
    fn return_type(&self) -> AttributeType;

    /// Evaluate one event's argument values, supplied in declared order.
    ///
    /// The values are owned by the call and discarded with it. The result
    /// is always of `return_type`, or `Value::Null`.
    fn evaluate(&self, values: Vec<Value>) -> Value;

    /// Arity-1 path: the host passes the single argument value directly
    /// instead of allocating a one-element vector.
    fn evaluate_single(&self, value: Value) -> Value {
        self.evaluate(vec![value])
    }

    /// Checkpointable state, for functions that keep any.
    ///
    /// The default declines the capability; a host checkpointer skips
    /// executors that return `None`.
    fn state(&self) -> Option<&dyn FunctionState> {
        None
    }
}
