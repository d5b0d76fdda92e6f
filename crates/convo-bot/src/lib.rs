//! # Convo Bot
//!
//! Binary crate for the Conversational Games Bot: configuration
//! bootstrap, gateway lifecycle, and framework wiring.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bot;
pub mod error;
pub mod events;

pub use bot::ConvoBot;
pub use error::{BotError, BotResult};
