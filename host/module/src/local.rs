//! In-process module runtime.
//!
//! Stands in for a host-embedded native binary: handlers run in this
//! process, and readiness is announced over the embed event channel the
//! same way a real host would fire its load event.

use anyhow::Result;
use async_trait::async_trait;
use nacelle_core::{EmbedDescriptor, ModuleCall, ModuleReply, ModuleTransport};
use tracing::{debug, info};

use crate::embed::LoadNotifier;
use crate::registry::HandlerRegistry;

pub struct LocalModule {
    descriptor: EmbedDescriptor,
    registry: HandlerRegistry,
    notifier: LoadNotifier,
}

impl LocalModule {
    pub fn new(
        descriptor: EmbedDescriptor,
        registry: HandlerRegistry,
        notifier: LoadNotifier,
    ) -> Self {
        Self { descriptor, registry, notifier }
    }

    /// Initialize the module and announce the outcome on the embed channel.
    pub async fn begin_load(&self) {
        if self.descriptor.manifest_path.is_empty() {
            self.notifier.announce_error("embed manifest path is empty").await;
            return;
        }
        info!(
            manifest = %self.descriptor.manifest_path,
            methods = ?self.registry.methods(),
            "Module initialized"
        );
        self.notifier.announce_load().await;
    }
}

#[async_trait]
impl ModuleTransport for LocalModule {
    fn name(&self) -> &str {
        "local"
    }

    async fn post_message(&self, call: ModuleCall) -> Result<ModuleReply> {
        debug!(method = %call.method, call_id = %call.call_id, "Dispatching call");
        let reply = match self.registry.dispatch(&call.method, &call.payload) {
            Ok(result) => ModuleReply::Success { call_id: call.call_id, result },
            Err(fault) => ModuleReply::Error {
                call_id: call.call_id,
                message: fault.message,
            },
        };
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::attach;
    use crate::hello;
    use nacelle_core::EmbedEventKind;
    use serde_json::json;

    fn descriptor(manifest: &str) -> EmbedDescriptor {
        EmbedDescriptor::new("nacl-module", manifest, "application/x-pnacl")
    }

    #[tokio::test]
    async fn test_begin_load_announces_load() {
        let (mut embed, notifier) = attach(descriptor("pnacl/Release/hello_world.nmf"));
        let module = LocalModule::new(embed.descriptor.clone(), hello::builtin_registry(), notifier);

        module.begin_load().await;
        let event = embed.next_event().await.unwrap();
        assert_eq!(event.kind, EmbedEventKind::Load);
    }

    #[tokio::test]
    async fn test_empty_manifest_announces_error() {
        let (mut embed, notifier) = attach(descriptor(""));
        let module = LocalModule::new(embed.descriptor.clone(), hello::builtin_registry(), notifier);

        module.begin_load().await;
        let event = embed.next_event().await.unwrap();
        assert!(matches!(event.kind, EmbedEventKind::Error { .. }));
    }

    #[tokio::test]
    async fn test_post_message_dispatches_to_registry() {
        let (embed, notifier) = attach(descriptor("pnacl/Release/hello_world.nmf"));
        let module = LocalModule::new(embed.descriptor.clone(), hello::builtin_registry(), notifier);

        let call = ModuleCall::new(hello::GREET_METHOD, json!({"name": "Ada"}));
        let call_id = call.call_id;
        let reply = module.post_message(call).await.unwrap();
        match reply {
            ModuleReply::Success { call_id: id, result } => {
                assert_eq!(id, call_id);
                assert_eq!(result["result"], "Hello Ada");
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_method_replies_error() {
        let (embed, notifier) = attach(descriptor("pnacl/Release/hello_world.nmf"));
        let module = LocalModule::new(embed.descriptor.clone(), HandlerRegistry::new(), notifier);

        let reply = module
            .post_message(ModuleCall::new("nope", json!({})))
            .await
            .unwrap();
        assert!(matches!(reply, ModuleReply::Error { .. }));
    }
}
