mod service;
mod session;

// Public API of the arena subsystem.
pub use crate::error::ArenaError;
pub use service::{AppView, ArenaService};
pub use session::{ArenaSession, AttemptTicket};
