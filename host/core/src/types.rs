use serde::{Deserialize, Serialize};

/// Describes the embed element that hosts a native module in the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedDescriptor {
    /// Element id the embed is inserted under (the load listener's target).
    pub element_id: String,
    /// Path to the module manifest the host resolves the binary from.
    pub manifest_path: String,
    /// MIME type selecting the host's embedding mechanism.
    pub mime_type: String,
}

impl EmbedDescriptor {
    pub fn new(
        element_id: impl Into<String>,
        manifest_path: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            element_id: element_id.into(),
            manifest_path: manifest_path.into(),
            mime_type: mime_type.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_serde_field_names() {
        let descriptor = EmbedDescriptor::new(
            "nacl-module",
            "pnacl/Release/hello_world.nmf",
            "application/x-pnacl",
        );
        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["elementId"], "nacl-module");
        assert_eq!(value["manifestPath"], "pnacl/Release/hello_world.nmf");
        assert_eq!(value["mimeType"], "application/x-pnacl");
    }
}
