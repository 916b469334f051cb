//! Embed event channel: the load-listener seam between a module embed and
//! the page that attached it.

use nacelle_core::{EmbedDescriptor, EmbedEvent};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Embed notifications are rare (load, maybe one error); a small buffer is
/// plenty.
const EVENT_BUFFER_SIZE: usize = 8;

/// The page-side end of an attached embed: the descriptor that was inserted
/// into the document plus the event receiver the load listener drains.
pub struct EmbedHandle {
    pub descriptor: EmbedDescriptor,
    events: mpsc::Receiver<EmbedEvent>,
}

impl EmbedHandle {
    /// Wait for the next embed notification. `None` once the module side is
    /// gone.
    pub async fn next_event(&mut self) -> Option<EmbedEvent> {
        self.events.recv().await
    }
}

/// The module-side end: announces readiness (or failure) to the page.
#[derive(Clone)]
pub struct LoadNotifier {
    element_id: String,
    tx: mpsc::Sender<EmbedEvent>,
}

impl LoadNotifier {
    /// Announce that the module finished initializing.
    pub async fn announce_load(&self) {
        debug!(element_id = %self.element_id, "Embed announcing load");
        self.send(EmbedEvent::load(&self.element_id)).await;
    }

    /// Announce that initialization failed.
    pub async fn announce_error(&self, message: &str) {
        debug!(element_id = %self.element_id, error = %message, "Embed announcing error");
        self.send(EmbedEvent::error(&self.element_id, message)).await;
    }

    async fn send(&self, event: EmbedEvent) {
        if self.tx.send(event).await.is_err() {
            warn!(element_id = %self.element_id, "Embed event dropped: page side gone");
        }
    }
}

/// Wire up the event channel for an embed about to be inserted into a page.
pub fn attach(descriptor: EmbedDescriptor) -> (EmbedHandle, LoadNotifier) {
    let (tx, rx) = mpsc::channel(EVENT_BUFFER_SIZE);
    let notifier = LoadNotifier {
        element_id: descriptor.element_id.clone(),
        tx,
    };
    let handle = EmbedHandle { descriptor, events: rx };
    (handle, notifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nacelle_core::EmbedEventKind;

    fn descriptor() -> EmbedDescriptor {
        EmbedDescriptor::new("nacl-module", "pnacl/Release/hello_world.nmf", "application/x-pnacl")
    }

    #[tokio::test]
    async fn test_load_announcement_reaches_handle() {
        let (mut handle, notifier) = attach(descriptor());
        notifier.announce_load().await;

        let event = handle.next_event().await.unwrap();
        assert_eq!(event.element_id, "nacl-module");
        assert_eq!(event.kind, EmbedEventKind::Load);
    }

    #[tokio::test]
    async fn test_error_announcement_carries_message() {
        let (mut handle, notifier) = attach(descriptor());
        notifier.announce_error("manifest unreachable").await;

        let event = handle.next_event().await.unwrap();
        assert_eq!(
            event.kind,
            EmbedEventKind::Error { message: "manifest unreachable".into() }
        );
    }

    #[tokio::test]
    async fn test_channel_closes_when_notifier_dropped() {
        let (mut handle, notifier) = attach(descriptor());
        drop(notifier);
        assert!(handle.next_event().await.is_none());
    }
}
