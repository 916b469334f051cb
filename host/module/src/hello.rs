//! Built-in greeting module: answers `testMessage` calls with a greeting
//! derived from the submitted name.

use nacelle_core::ModuleFault;
use serde_json::{json, Value};

/// Method name the page posts on form submission.
pub const GREET_METHOD: &str = "testMessage";

/// Greet the caller. A non-empty `name` in the payload is greeted by name;
/// anything else gets the default greeting.
pub fn greet(payload: &Value) -> Result<Value, ModuleFault> {
    let result = match payload.get("name").and_then(Value::as_str) {
        Some(name) if !name.is_empty() => format!("Hello {name}"),
        _ => "Hello World!".to_string(),
    };
    Ok(json!({ "result": result }))
}

/// A registry pre-populated with the greeting handler.
pub fn builtin_registry() -> crate::HandlerRegistry {
    let mut registry = crate::HandlerRegistry::new();
    registry.register(GREET_METHOD, greet);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greets_by_name() {
        let result = greet(&json!({"name": "Ada"})).unwrap();
        assert_eq!(result["result"], "Hello Ada");
    }

    #[test]
    fn test_empty_name_falls_back() {
        let result = greet(&json!({"name": ""})).unwrap();
        assert_eq!(result["result"], "Hello World!");
    }

    #[test]
    fn test_missing_name_falls_back() {
        let result = greet(&json!({})).unwrap();
        assert_eq!(result["result"], "Hello World!");
    }

    #[test]
    fn test_builtin_registry_serves_greet_method() {
        let registry = builtin_registry();
        let result = registry.dispatch(GREET_METHOD, &json!({"name": "Lin"})).unwrap();
        assert_eq!(result["result"], "Hello Lin");
    }
}
