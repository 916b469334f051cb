//! Per-page session state: the loaded flag and the current status text,
//! owned explicitly instead of living as page-level free variables.

/// Status text before anything has happened.
pub const STATUS_PLACEHOLDER: &str = "NO-STATUS";
/// Status text while the embed is attached but the module has not loaded.
pub const STATUS_LOADING: &str = "LOADING...";
/// Status text once the module announced readiness.
pub const STATUS_LOADED: &str = "LOADED";

/// State for one hosted page.
///
/// `loaded` is true iff the load handler has fired at least once; it is
/// never reset for the life of the session.
#[derive(Debug)]
pub struct PageSession {
    loaded: bool,
    status_text: String,
}

impl PageSession {
    pub fn new() -> Self {
        Self {
            loaded: false,
            status_text: STATUS_PLACEHOLDER.to_string(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Record that the module has loaded. Safe to call again; the flag only
    /// ever moves to true.
    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn set_status_text(&mut self, text: impl Into<String>) {
        self.status_text = text.into();
    }
}

impl Default for PageSession {
    fn default() -> Self {
        Self::new()
    }
}
