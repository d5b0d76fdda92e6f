//! # Convo Games
//!
//! Domain core for the Conversational Games Bot: the immutable prompt
//! store, the upstream poll client with normalization, and the vote
//! render pipeline that turns either into a displayable payload.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod polls;
pub mod prompts;
pub mod render;

pub use polls::{FetchError, PollClient, PollOption, PollResult};
pub use prompts::{PromptCategory, PromptError, PromptStore};
pub use render::VoteDisplay;
