//! Error handling
//!
//! Defines error types and the messages shown for them.

pub mod handlers;
pub mod types;

pub use types::*;
