//! Function registry — the interface table hosts bind query call sites
//! against.

use std::collections::HashMap;
use std::sync::Arc;

use rill_types::AttributeType;

use crate::error::RegistryError;
use crate::function::{ConfiguredFunction, ScalarFunction};
use crate::schema::FunctionSchema;

/// Registry of scalar functions, keyed by qualified `namespace:name`.
///
/// Extension bundles register their functions at startup; the host resolves
/// each query call site with [`FunctionRegistry::bind`], which validates the
/// declared argument types and hands back the configured executor.
#[derive(Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, Box<dyn ScalarFunction>>,
}

impl FunctionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function under its schema's qualified name.
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn register(&mut self, function: impl ScalarFunction + 'static) {
        let key = function.schema().qualified_name();
        tracing::debug!(function = %key, "registered scalar function");
        self.functions.insert(key, Box::new(function));
    }

    /// Look up a function descriptor by qualified name.
    pub fn get(&self, qualified_name: &str) -> Option<&dyn ScalarFunction> {
        self.functions.get(qualified_name).map(|f| f.as_ref())
    }

    /// Schemas of all registered functions, for host help listings.
    pub fn schemas(&self) -> Vec<FunctionSchema> {
        self.functions.values().map(|f| f.schema()).collect()
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Bind a query call site: look up the function and configure it with
    /// the declared argument types.
    ///
    /// The returned executor is immutable and shareable across the host's
    /// evaluation threads.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn bind(
        &self,
        qualified_name: &str,
        arg_types: &[AttributeType],
    ) -> Result<Arc<dyn ConfiguredFunction>, RegistryError> {
        let function = self
            .functions
            .get(qualified_name)
            .ok_or_else(|| RegistryError::NotFound(qualified_name.to_string()))?;
        let configured = function.configure(arg_types)?;
        Ok(Arc::from(configured))
    }
}
