use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A notification fired by the module embed toward the page.
///
/// `Load` fires when the module has finished initializing and can receive
/// messages. The embed never removes its listener, so a host that re-fires
/// `Load` delivers it again; consumers must tolerate that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedEvent {
    pub id: Uuid,
    pub element_id: String,
    pub at: DateTime<Utc>,
    pub kind: EmbedEventKind,
}

/// Categories of embed notifications.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmbedEventKind {
    /// The module finished initializing and is ready for messages
    Load,
    /// The module failed to initialize
    Error { message: String },
}

impl EmbedEvent {
    pub fn load(element_id: impl Into<String>) -> Self {
        Self::new(element_id, EmbedEventKind::Load)
    }

    pub fn error(element_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            element_id,
            EmbedEventKind::Error { message: message.into() },
        )
    }

    fn new(element_id: impl Into<String>, kind: EmbedEventKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            element_id: element_id.into(),
            at: Utc::now(),
            kind,
        }
    }
}
