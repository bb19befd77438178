//! Integration tests for the str:coalesce extension, driven end to end
//! through the function registry the way a host engine binds call sites.

use rill_exec::{ConfigError, FunctionRegistry, RegistryError};
use rill_strings::register_string_functions;
use rill_types::{AttributeType, Value};

/// Helper to build a registry with the string bundle installed.
fn make_registry() -> FunctionRegistry {
    let mut registry = FunctionRegistry::new();
    register_string_functions(&mut registry);
    registry
}

// ============================================================================
// Happy path: bind, then evaluate per event
// ============================================================================

#[test]
fn coalesce_returns_first_non_null() {
    let registry = make_registry();
    let coalesce = registry
        .bind("str:coalesce", &[AttributeType::String; 3])
        .expect("should bind str:coalesce");

    let result = coalesce.evaluate(vec![
        Value::Null,
        Value::String("BBB".into()),
        Value::String("CCC".into()),
    ]);
    assert_eq!(result, Value::String("BBB".into()));
}

#[test]
fn coalesce_of_all_nulls_is_null() {
    let registry = make_registry();
    let coalesce = registry
        .bind("str:coalesce", &[AttributeType::String; 2])
        .expect("should bind str:coalesce");

    let result = coalesce.evaluate(vec![Value::Null, Value::Null]);
    assert_eq!(result, Value::Null);
}

#[test]
fn coalesce_of_one_argument_is_identity() {
    let registry = make_registry();
    let coalesce = registry
        .bind("str:coalesce", &[AttributeType::Int])
        .expect("should bind str:coalesce");

    assert_eq!(coalesce.evaluate_single(Value::Int(5)), Value::Int(5));
}

#[test]
fn executor_holds_no_state_between_events() {
    let registry = make_registry();
    let coalesce = registry
        .bind("str:coalesce", &[AttributeType::Int; 2])
        .expect("should bind str:coalesce");

    // A null result for one event must not bleed into the next.
    assert_eq!(coalesce.evaluate(vec![Value::Null, Value::Null]), Value::Null);
    assert_eq!(
        coalesce.evaluate(vec![Value::Null, Value::Int(9)]),
        Value::Int(9)
    );
    assert_eq!(coalesce.evaluate(vec![Value::Null, Value::Null]), Value::Null);
}

#[test]
fn executor_is_shareable_across_threads() {
    let registry = make_registry();
    let coalesce = registry
        .bind("str:coalesce", &[AttributeType::Long; 2])
        .expect("should bind str:coalesce");

    std::thread::scope(|scope| {
        for i in 0..4 {
            let coalesce = coalesce.clone();
            scope.spawn(move || {
                let result = coalesce.evaluate(vec![Value::Null, Value::Long(i)]);
                assert_eq!(result, Value::Long(i));
            });
        }
    });
}

// ============================================================================
// Configuration failures surface through bind
// ============================================================================

#[test]
fn bind_rejects_empty_argument_list() {
    let registry = make_registry();
    let err = registry
        .bind("str:coalesce", &[])
        .expect_err("binding with no arguments should fail");

    assert_eq!(
        err,
        RegistryError::Config(ConfigError::NoArguments {
            function: "str:coalesce".to_string(),
        })
    );
}

#[test]
fn bind_rejects_mixed_argument_types() {
    let registry = make_registry();
    let err = registry
        .bind(
            "str:coalesce",
            &[
                AttributeType::String,
                AttributeType::String,
                AttributeType::Int,
            ],
        )
        .expect_err("binding with mixed types should fail");

    assert_eq!(
        err,
        RegistryError::Config(ConfigError::TypeMismatch {
            function: "str:coalesce".to_string(),
            position: 3,
            expected: AttributeType::String,
            actual: AttributeType::Int,
        })
    );
}

#[test]
fn bind_unknown_function_is_not_found() {
    let registry = make_registry();
    let err = registry
        .bind("str:reverse", &[AttributeType::String])
        .expect_err("unregistered function should not bind");

    assert_eq!(err, RegistryError::NotFound("str:reverse".to_string()));
    assert!(err.to_string().contains("str:reverse"));
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn bundle_registers_under_the_str_namespace() {
    let registry = make_registry();
    let schemas = registry.schemas();

    let coalesce = schemas
        .iter()
        .find(|s| s.qualified_name() == "str:coalesce")
        .expect("str:coalesce should be listed");
    assert!(coalesce.params[0].repeating, "argn is a varargs tail");
    assert!(!coalesce.examples.is_empty());
}
