//! Handler registry: maps message method names to module handlers.

use std::collections::HashMap;

use nacelle_core::ModuleFault;
use serde_json::Value;
use tracing::{debug, warn};

/// A module-side message handler: one payload in, one result or fault out.
pub type MessageHandler = fn(&Value) -> Result<Value, ModuleFault>;

/// Method-name → handler table for an in-process module.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, MessageHandler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under a method name.
    /// Returns false if the name was already taken (the old handler stays).
    pub fn register(&mut self, method: impl Into<String>, handler: MessageHandler) -> bool {
        let method = method.into();
        if self.handlers.contains_key(&method) {
            warn!(method = %method, "Handler already registered; keeping existing");
            return false;
        }
        debug!(method = %method, "Handler registered");
        self.handlers.insert(method, handler);
        true
    }

    /// Dispatch a payload to the handler registered for `method`.
    pub fn dispatch(&self, method: &str, payload: &Value) -> Result<Value, ModuleFault> {
        match self.handlers.get(method) {
            Some(handler) => handler(payload),
            None => {
                warn!(method = %method, "No handler registered");
                Err(ModuleFault::new(format!("no handler registered for '{method}'")))
            }
        }
    }

    /// Registered method names, for diagnostics.
    pub fn methods(&self) -> Vec<&str> {
        self.handlers.keys().map(String::as_str).collect()
    }
}
