//! # Convo Commands
//!
//! Prefix command implementations for the Conversational Games Bot,
//! assembled into a Poise framework with cooldown middleware in front of
//! every dispatch.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cooldown;
pub mod dare;
pub mod embeds;
pub mod framework;
pub mod help;
pub mod never;
pub mod pressthebutton;
pub mod thisorthat;
pub mod truth;
pub mod wouldyourather;

pub use cooldown::{CooldownError, CooldownManager, CooldownPolicy, CooldownScope};
pub use framework::{framework_options, Context, Data, Error};
