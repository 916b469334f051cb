//! Terminal-backed host page: renders element writes, embeds, and alerts to
//! stdout so the page flow can be driven without a browser host.

use std::collections::HashMap;
use std::sync::Mutex;

use nacelle_config::PageConfig;
use nacelle_core::{EmbedDescriptor, HostPage};

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";
const YELLOW: &str = "\x1b[33m";

pub struct TerminalPage {
    name_field_id: String,
    name_value: String,
    /// Element id → current text. Only ids present here count as existing.
    elements: Mutex<HashMap<String, String>>,
}

impl TerminalPage {
    pub fn new(page: &PageConfig, name_value: String) -> Self {
        let mut elements = HashMap::new();
        elements.insert(page.status_element_id.clone(), String::new());
        Self {
            name_field_id: page.name_field_id.clone(),
            name_value,
            elements: Mutex::new(elements),
        }
    }
}

impl HostPage for TerminalPage {
    fn set_element_text(&self, element_id: &str, text: &str) -> bool {
        let mut elements = self.elements.lock().unwrap();
        match elements.get_mut(element_id) {
            Some(slot) => {
                *slot = text.to_string();
                println!("{DIM}[{element_id}]{RESET} {text}");
                true
            }
            None => false,
        }
    }

    fn field_value(&self, field_id: &str) -> Option<String> {
        (field_id == self.name_field_id).then(|| self.name_value.clone())
    }

    fn append_embed(&self, embed: &EmbedDescriptor) {
        // The embed element now exists in the "document".
        self.elements
            .lock()
            .unwrap()
            .insert(embed.element_id.clone(), String::new());
        println!(
            "{DIM}<embed id=\"{}\" src=\"{}\" type=\"{}\">{RESET}",
            embed.element_id, embed.manifest_path, embed.mime_type
        );
    }

    fn alert(&self, message: &str) {
        println!("{YELLOW}⚠ alert:{RESET} {message}");
    }
}
