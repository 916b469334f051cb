use anyhow::Result;
use async_trait::async_trait;

use crate::message::{ModuleCall, ModuleReply};
use crate::types::EmbedDescriptor;

/// The document boundary the page controller runs against.
///
/// Implementations wrap a real host document or a headless stand-in; element
/// absence is an expected condition, never an error.
pub trait HostPage: Send + Sync {
    /// Write text into the element with the given id.
    /// Returns false (writing nothing) when no such element exists.
    fn set_element_text(&self, element_id: &str, text: &str) -> bool;

    /// Read the current value of a form text field, if the field exists.
    fn field_value(&self, field_id: &str) -> Option<String>;

    /// Insert the module embed element into the document body.
    fn append_embed(&self, embed: &EmbedDescriptor);

    /// Show a blocking alert dialog.
    fn alert(&self, message: &str);
}

/// Message-passing seam to a loaded module.
///
/// One call yields exactly one reply; transport-level failures are the
/// caller's to fold into the error outcome.
#[async_trait]
pub trait ModuleTransport: Send + Sync {
    /// Human-readable name of this transport (e.g., "local").
    fn name(&self) -> &str;

    /// Perform a single request/response exchange with the module.
    async fn post_message(&self, call: ModuleCall) -> Result<ModuleReply>;
}
