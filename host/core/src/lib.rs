pub mod error;
pub mod event;
pub mod message;
pub mod traits;
pub mod types;

pub use error::{HostError, ModuleFault};
pub use event::{EmbedEvent, EmbedEventKind};
pub use message::{ModuleCall, ModuleReply};
pub use traits::{HostPage, ModuleTransport};
pub use types::EmbedDescriptor;
