pub mod controller;
pub mod session;

pub use controller::{PageController, SubmitOutcome};
pub use session::{PageSession, STATUS_LOADED, STATUS_LOADING, STATUS_PLACEHOLDER};
