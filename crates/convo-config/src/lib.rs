//! # Convo Config
//!
//! Configuration loading and validation for the Conversational Games Bot.
//!
//! Settings come from a TOML file layered with `CONVO_*` environment
//! overrides, are deserialized into a typed schema, and validated once
//! before the gateway connects.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod loader;
pub mod settings;

pub use loader::load;
pub use settings::{BotSettings, DataSettings, Settings, UpstreamSettings};
