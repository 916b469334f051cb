//! Message-call handle: the page's wrapper around a module transport.

use std::sync::Arc;

use nacelle_core::{ModuleCall, ModuleFault, ModuleReply, ModuleTransport};
use serde_json::Value;
use tracing::{debug, warn};

/// Handle the page uses to exchange one message with the loaded module.
///
/// Folds transport-level failures into the fault outcome so callers see
/// exactly two results per call.
#[derive(Clone)]
pub struct ModuleHandle {
    transport: Arc<dyn ModuleTransport>,
}

impl ModuleHandle {
    pub fn new(transport: Arc<dyn ModuleTransport>) -> Self {
        Self { transport }
    }

    /// Post one message and wait for its single reply.
    pub async fn post_message(
        &self,
        method: &str,
        payload: Value,
    ) -> Result<Value, ModuleFault> {
        let call = ModuleCall::new(method, payload);
        let call_id = call.call_id;
        debug!(transport = %self.transport.name(), method = %method, %call_id, "Posting message");

        match self.transport.post_message(call).await {
            Ok(reply) => {
                if reply.call_id() != call_id {
                    // One call in flight at a time; only a broken transport gets here.
                    warn!(expected = %call_id, got = %reply.call_id(), "Reply call id mismatch");
                }
                match reply {
                    ModuleReply::Success { result, .. } => Ok(result),
                    ModuleReply::Error { message, .. } => Err(ModuleFault::new(message)),
                }
            }
            Err(e) => {
                warn!(%call_id, error = %e, "Transport failed to deliver call");
                Err(ModuleFault::new(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use async_trait::async_trait;
    use serde_json::json;

    struct SuccessTransport;

    #[async_trait]
    impl ModuleTransport for SuccessTransport {
        fn name(&self) -> &str {
            "success"
        }

        async fn post_message(&self, call: ModuleCall) -> Result<ModuleReply> {
            Ok(ModuleReply::Success {
                call_id: call.call_id,
                result: json!({"result": "ok"}),
            })
        }
    }

    struct BrokenTransport;

    #[async_trait]
    impl ModuleTransport for BrokenTransport {
        fn name(&self) -> &str {
            "broken"
        }

        async fn post_message(&self, _call: ModuleCall) -> Result<ModuleReply> {
            anyhow::bail!("connection to module lost")
        }
    }

    #[tokio::test]
    async fn test_success_reply_yields_result() {
        let handle = ModuleHandle::new(Arc::new(SuccessTransport));
        let result = handle.post_message("testMessage", json!({})).await.unwrap();
        assert_eq!(result["result"], "ok");
    }

    #[tokio::test]
    async fn test_transport_failure_folds_into_fault() {
        let handle = ModuleHandle::new(Arc::new(BrokenTransport));
        let fault = handle.post_message("testMessage", json!({})).await.unwrap_err();
        assert!(fault.message.contains("connection to module lost"));
    }
}
