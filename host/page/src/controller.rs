//! Page controller: glue between the host page, the module embed, and the
//! message-call handle.
//!
//! All methods run on one event-driven thread; the only asynchronous
//! boundaries are the embed load event and the single request/response
//! message call.

use std::sync::Arc;

use nacelle_core::{EmbedDescriptor, EmbedEvent, EmbedEventKind, HostPage};
use nacelle_module::ModuleHandle;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::session::{PageSession, STATUS_LOADED, STATUS_LOADING};

/// Method posted to the module on form submission.
const SUBMIT_METHOD: &str = "testMessage";

/// Alert shown when the form is submitted before the module has loaded.
const NOT_LOADED_ALERT: &str = "Native module not loaded";

/// How one form submission ended. Every variant implies the native form
/// submission was cancelled; the distinction exists for callers and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The module had not loaded; no call was issued.
    NotLoaded,
    /// The call succeeded and the result was alerted.
    Completed,
    /// The call faulted and the error was alerted.
    Failed,
}

pub struct PageController {
    page: Arc<dyn HostPage>,
    session: PageSession,
    status_element_id: String,
    name_field_id: String,
    module: Option<ModuleHandle>,
}

impl PageController {
    pub fn new(
        page: Arc<dyn HostPage>,
        status_element_id: impl Into<String>,
        name_field_id: impl Into<String>,
    ) -> Self {
        Self {
            page,
            session: PageSession::new(),
            status_element_id: status_element_id.into(),
            name_field_id: name_field_id.into(),
            module: None,
        }
    }

    pub fn session(&self) -> &PageSession {
        &self.session
    }

    /// Update the stored status text (when a message is given) and write it
    /// through to the status element. A page without that element is fine;
    /// the in-memory text still changes.
    pub fn update_status(&mut self, message: Option<&str>) {
        if let Some(message) = message {
            self.session.set_status_text(message);
        }
        let written = self
            .page
            .set_element_text(&self.status_element_id, self.session.status_text());
        if !written {
            debug!(element_id = %self.status_element_id, "Status element absent; kept in memory only");
        }
    }

    /// Attach the module embed to the page and start tracking it.
    pub fn handle_page_load(&mut self, descriptor: EmbedDescriptor, module: ModuleHandle) {
        info!(
            element_id = %descriptor.element_id,
            manifest = %descriptor.manifest_path,
            "Attaching module embed"
        );
        self.page.append_embed(&descriptor);
        self.module = Some(module);
        self.update_status(Some(STATUS_LOADING));
    }

    /// The load handler. Idempotent: the embed listener is never removed,
    /// so a host that re-fires the load event runs this again harmlessly.
    pub fn module_did_load(&mut self) {
        self.session.mark_loaded();
        self.update_status(Some(STATUS_LOADED));
    }

    /// Route an embed notification. Load failures only surface through the
    /// status text; the loaded flag stays down.
    pub fn handle_embed_event(&mut self, event: EmbedEvent) {
        match event.kind {
            EmbedEventKind::Load => {
                info!(element_id = %event.element_id, "Module load event");
                self.module_did_load();
            }
            EmbedEventKind::Error { message } => {
                warn!(element_id = %event.element_id, error = %message, "Module failed to load");
                self.update_status(Some(&message));
            }
        }
    }

    /// Forward one form submission to the module.
    ///
    /// Before load this alerts and issues no call. Otherwise the name field
    /// is read (absent field reads as empty), exactly one message is posted,
    /// and exactly one alert fires with the result or the error.
    pub async fn handle_form_submit(&mut self) -> SubmitOutcome {
        if !self.session.is_loaded() {
            warn!("Form submitted before module load");
            self.page.alert(NOT_LOADED_ALERT);
            return SubmitOutcome::NotLoaded;
        }
        let Some(module) = self.module.clone() else {
            // Loaded flag without a handle means the page glue never attached one.
            warn!("No module handle attached");
            self.page.alert(NOT_LOADED_ALERT);
            return SubmitOutcome::NotLoaded;
        };

        let name = self.page.field_value(&self.name_field_id).unwrap_or_default();
        let payload = json!({ "name": name });

        match module.post_message(SUBMIT_METHOD, payload).await {
            Ok(response) => {
                let text = match response.get("result").and_then(Value::as_str) {
                    Some(s) => s.to_string(),
                    None => response.to_string(),
                };
                self.page.alert(&text);
                SubmitOutcome::Completed
            }
            Err(fault) => {
                self.page.alert(&format!("Error: {}", fault.message));
                SubmitOutcome::Failed
            }
        }
    }
}
