//! Caller layer
//!
//! Navigation state, command parsing and the handlers that drive the record
//! store and the authenticator on behalf of the console.

pub mod commands;
pub mod confirm;
pub mod handlers;
pub mod render;
pub mod state;

pub use commands::{Command, parse_command};
pub use confirm::{Confirm, Decision};
pub use handlers::{CommandResult, CommandStatus, Session};
pub use state::{AddForm, Screen, StagedTable};
