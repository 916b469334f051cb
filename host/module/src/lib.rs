//! Module-side plumbing for the Nacelle embed host: the embed event channel,
//! the message-call handle, the handler registry, and the in-process module
//! runtime used by the demo driver and the tests.

pub mod embed;
pub mod handle;
pub mod hello;
pub mod local;
pub mod registry;

pub use embed::{attach, EmbedHandle, LoadNotifier};
pub use handle::ModuleHandle;
pub use local::LocalModule;
pub use registry::{HandlerRegistry, MessageHandler};
