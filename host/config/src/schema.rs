//! Nacelle host configuration schema.
//!
//! Typed for serde YAML deserialization; every section and field falls back
//! to the defaults of the reference page when omitted.

use nacelle_core::EmbedDescriptor;
use serde::{Deserialize, Serialize};

/// Root configuration for a Nacelle host page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostConfig {
    /// Page element bindings
    pub page: PageConfig,

    /// Module embed settings
    pub module: ModuleConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Well-known element ids the controller binds to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    /// Element the status text is written into.
    pub status_element_id: String,
    /// Form text field read on submission.
    pub name_field_id: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            status_element_id: "statusField".into(),
            name_field_id: "name".into(),
        }
    }
}

/// The embed element pointing at the module binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModuleConfig {
    pub element_id: String,
    pub manifest_path: String,
    pub mime_type: String,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            element_id: "nacl-module".into(),
            manifest_path: "pnacl/Release/hello_world.nmf".into(),
            mime_type: "application/x-pnacl".into(),
        }
    }
}

impl ModuleConfig {
    pub fn descriptor(&self) -> EmbedDescriptor {
        EmbedDescriptor::new(&self.element_id, &self.manifest_path, &self.mime_type)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingConfig {
    /// Default tracing filter when RUST_LOG is unset.
    pub level: String,
    /// Directory for the rolling NDJSON log file; console-only when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".into(), dir: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_page() {
        let config = HostConfig::default();
        assert_eq!(config.page.status_element_id, "statusField");
        assert_eq!(config.page.name_field_id, "name");
        assert_eq!(config.module.element_id, "nacl-module");
        assert_eq!(config.module.manifest_path, "pnacl/Release/hello_world.nmf");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_yaml_keeps_section_defaults() {
        let yaml = "module:\n  manifestPath: out/demo.nmf\n";
        let config: HostConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.module.manifest_path, "out/demo.nmf");
        // Unset fields in a named section still default.
        assert_eq!(config.module.element_id, "nacl-module");
        // Untouched sections default wholesale.
        assert_eq!(config.page.status_element_id, "statusField");
    }

    #[test]
    fn test_descriptor_conversion() {
        let descriptor = ModuleConfig::default().descriptor();
        assert_eq!(descriptor.element_id, "nacl-module");
        assert_eq!(descriptor.mime_type, "application/x-pnacl");
    }
}
