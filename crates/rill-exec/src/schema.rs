//! Function schemas — discoverable metadata for registered functions.

use rill_types::AttributeType;

/// Schema for one declared parameter.
#[derive(Debug, Clone)]
pub struct ParamSchema {
    /// Parameter name.
    pub name: String,
    /// Declared types this parameter accepts.
    pub types: Vec<AttributeType>,
    /// Whether the parameter may repeat as a trailing varargs tail.
    pub repeating: bool,
    /// Description for help text.
    pub description: String,
}

impl ParamSchema {
    /// Create a parameter accepting the given declared types.
    pub fn new(
        name: impl Into<String>,
        types: &[AttributeType],
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            types: types.to_vec(),
            repeating: false,
            description: description.into(),
        }
    }

    /// Mark the parameter as repeating (varargs tail).
    pub fn repeating(mut self) -> Self {
        self.repeating = true;
        self
    }
}

/// A worked usage example for help text.
#[derive(Debug, Clone)]
pub struct Example {
    /// Query-language syntax of the call.
    pub syntax: String,
    /// What the call returns.
    pub description: String,
}

/// Schema describing a function's interface.
///
/// The qualified `namespace:name` is the key a host's query language uses
/// to bind call sites to the function.
#[derive(Debug, Clone)]
pub struct FunctionSchema {
    /// Namespace, e.g. "str".
    pub namespace: String,
    /// Function name within the namespace.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Parameter definitions.
    pub params: Vec<ParamSchema>,
    /// Description of the returned attribute.
    pub returns: String,
    /// Usage examples.
    pub examples: Vec<Example>,
}

impl FunctionSchema {
    /// Create a new function schema.
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            description: description.into(),
            params: Vec::new(),
            returns: String::new(),
            examples: Vec::new(),
        }
    }

    /// Add a parameter to the schema.
    pub fn param(mut self, param: ParamSchema) -> Self {
        self.params.push(param);
        self
    }

    /// Describe the returned attribute.
    pub fn returns(mut self, description: impl Into<String>) -> Self {
        self.returns = description.into();
        self
    }

    /// Add a usage example.
    pub fn example(mut self, syntax: impl Into<String>, description: impl Into<String>) -> Self {
        self.examples.push(Example {
            syntax: syntax.into(),
            description: description.into(),
        });
        self
    }

    /// The qualified lookup key, `namespace:name`.
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.namespace, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualified_name_joins_namespace_and_name() {
        let schema = FunctionSchema::new("str", "coalesce", "first non-null");
        assert_eq!(schema.qualified_name(), "str:coalesce");
    }

    #[test]
    fn builder_accumulates_params_and_examples() {
        let schema = FunctionSchema::new("str", "concat", "join strings")
            .param(ParamSchema::new("argn", &[AttributeType::String], "parts").repeating())
            .returns("The joined string.")
            .example("concat(\"a\", \"b\")", "Returns \"ab\".");

        assert_eq!(schema.params.len(), 1);
        assert!(schema.params[0].repeating);
        assert_eq!(schema.examples.len(), 1);
        assert_eq!(schema.returns, "The joined string.");
    }
}
