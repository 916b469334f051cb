use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single request posted from the page to the module.
///
/// The payload is opaque to the host; only the method name selects a handler
/// on the module side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleCall {
    pub call_id: Uuid,
    pub method: String,
    pub payload: serde_json::Value,
}

impl ModuleCall {
    pub fn new(method: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            call_id: Uuid::new_v4(),
            method: method.into(),
            payload,
        }
    }
}

/// The module's answer to one `ModuleCall`. Exactly one of these is produced
/// per call, never both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ModuleReply {
    /// Module → Page: the call succeeded, here is the result payload
    Success {
        call_id: Uuid,
        result: serde_json::Value,
    },
    /// Module → Page: the call failed with a user-presentable message
    Error { call_id: Uuid, message: String },
}

impl ModuleReply {
    pub fn call_id(&self) -> Uuid {
        match self {
            ModuleReply::Success { call_id, .. } => *call_id,
            ModuleReply::Error { call_id, .. } => *call_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_serialization_roundtrip() {
        let call = ModuleCall::new("testMessage", serde_json::json!({"name": "Ada"}));
        let json = serde_json::to_string(&call).unwrap();
        let deserialized: ModuleCall = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.call_id, call.call_id);
        assert_eq!(deserialized.method, "testMessage");
        assert_eq!(deserialized.payload["name"], "Ada");
    }

    #[test]
    fn test_reply_outcome_tagging() {
        let reply = ModuleReply::Success {
            call_id: Uuid::new_v4(),
            result: serde_json::json!({"result": "Hello Ada"}),
        };
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["outcome"], "success");

        let reply = ModuleReply::Error {
            call_id: Uuid::new_v4(),
            message: "no handler".into(),
        };
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["outcome"], "error");
    }

    #[test]
    fn test_call_id_extraction() {
        let id = Uuid::new_v4();
        let reply = ModuleReply::Error {
            call_id: id,
            message: "oops".into(),
        };
        assert_eq!(reply.call_id(), id);
    }
}
