//! # Convo Common
//!
//! Shared error types and logging setup for the Conversational Games Bot.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod logging;

pub use error::{ConvoError, Result};
