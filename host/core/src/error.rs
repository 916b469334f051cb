use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level error type for the Nacelle host runtime.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("module fault: {0}")]
    Module(#[from] ModuleFault),

    #[error("embed channel closed: {0}")]
    ChannelClosed(String),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Fault reported for a single message call.
///
/// A call yields exactly one of a successful result or one of these; the
/// message is what the page surfaces to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct ModuleFault {
    pub message: String,
}

impl ModuleFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fault_display_is_bare_message() {
        let fault = ModuleFault::new("handler rejected request");
        assert_eq!(fault.to_string(), "handler rejected request");
    }

    #[test]
    fn test_fault_wraps_into_host_error() {
        let err: HostError = ModuleFault::new("boom").into();
        assert_eq!(err.to_string(), "module fault: boom");
    }
}
