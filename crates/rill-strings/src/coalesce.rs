//! coalesce — first non-null of its arguments.

use rill_exec::{
    ConfigError, ConfigResult, ConfiguredFunction, FunctionSchema, ParamSchema, ScalarFunction,
};
use rill_types::{AttributeType, Value};

/// `str:coalesce(arg1, ..., argN)` — returns the value of the first of its
/// input parameters that is not null, or null when every argument is null.
///
/// Arguments may be of any declared type, provided there is at least one and
/// all of them share the same type. The return type equals that shared type.
pub struct Coalesce;

impl ScalarFunction for Coalesce {
    fn schema(&self) -> FunctionSchema {
        FunctionSchema::new(
            "str",
            "coalesce",
            "Returns the first input parameter value that is not null.",
        )
        .param(
            ParamSchema::new(
                "argn",
                &AttributeType::ALL,
                "One or more input parameters, in any data type; all of them \
                 are required to be of the same type.",
            )
            .repeating(),
        )
        .returns("The first input parameter that is not null.")
        .example(
            r#"coalesce(null, "BBB", "CCC")"#,
            r#"Returns the first non-null input parameter, "BBB"."#,
        )
    }

    fn configure(
        &self,
        arg_types: &[AttributeType],
    ) -> ConfigResult<Box<dyn ConfiguredFunction>> {
        let Some(&return_type) = arg_types.first() else {
            return Err(ConfigError::NoArguments {
                function: self.schema().qualified_name(),
            });
        };
        for (idx, &actual) in arg_types.iter().enumerate() {
            if actual != return_type {
                return Err(ConfigError::TypeMismatch {
                    function: self.schema().qualified_name(),
                    position: idx + 1,
                    expected: return_type,
                    actual,
                });
            }
        }
        Ok(Box::new(ConfiguredCoalesce { return_type }))
    }
}

/// Executor for one configured `str:coalesce` call site.
#[derive(Debug)]
struct ConfiguredCoalesce {
    return_type: AttributeType,
}

impl ConfiguredFunction for ConfiguredCoalesce {
    fn return_type(&self) -> AttributeType {
        self.return_type
    }

    fn evaluate(&self, values: Vec<Value>) -> Value {
        values
            .into_iter()
            .find(|value| !value.is_null())
            .unwrap_or(Value::Null)
    }

    // Exactly one argument configured: the value is already the answer.
    fn evaluate_single(&self, value: Value) -> Value {
        value
    }
}
