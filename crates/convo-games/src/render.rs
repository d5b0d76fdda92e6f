//! Vote render pipeline: turns a normalized poll or a local draw into a
//! displayable payload with reaction affordances.

use crate::polls::PollResult;
use crate::prompts::ThisOrThat;
use rand::Rng;

/// Accent color for option A / the red reaction.
pub const ACCENT_RED: u32 = 0xEF2928;
/// Accent color for option B / the blue reaction.
pub const ACCENT_BLUE: u32 = 0x0094E6;

/// Reaction affordance for option A.
pub const REACTION_A: &str = "🔴";
/// Reaction affordance for option B.
pub const REACTION_B: &str = "🔵";

/// Transport-agnostic display payload. The commands layer converts this
/// into a Discord embed and attaches the reactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteDisplay {
    /// Embed title.
    pub title: Option<String>,
    /// Link attached to the title.
    pub url: Option<String>,
    /// Ordered body lines, joined into the embed description.
    pub body_lines: Vec<String>,
    /// Footer attribution.
    pub footer: Option<String>,
    /// Accent color of the embed.
    pub accent: u32,
    /// Reaction tokens to attach, present for every binary choice.
    pub reactions: Option<[&'static str; 2]>,
}

/// Accent for an upstream poll: the leading option's color. Option A wins
/// the accent only when strictly ahead; ties fall to option B's blue,
/// which also covers the all-zero case.
pub fn leading_accent(votes_a: u64, votes_b: u64) -> u32 {
    if votes_a > votes_b {
        ACCENT_RED
    } else {
        ACCENT_BLUE
    }
}

/// Vote share per option, to be rendered to one decimal place.
///
/// Upstream data can legitimately be all-zero; that case is defined as
/// 0.0% for both options rather than a division by zero.
pub fn vote_percentages(votes_a: u64, votes_b: u64) -> (f64, f64) {
    let total = votes_a + votes_b;
    if total == 0 {
        return (0.0, 0.0);
    }
    (
        votes_a as f64 / total as f64 * 100.0,
        votes_b as f64 / total as f64 * 100.0,
    )
}

/// Renders a normalized upstream poll.
pub fn render_poll(poll: &PollResult) -> VoteDisplay {
    let (pct_a, pct_b) = vote_percentages(poll.option_a.votes, poll.option_b.votes);

    let mut body_lines = vec![format!("**{}**", poll.heading)];
    if let Some(scenario) = &poll.scenario {
        body_lines.push(scenario.clone());
    }
    body_lines.push(format!(
        "{REACTION_A} `({pct_a:.1}%)` {}",
        poll.option_a.label
    ));
    body_lines.push(format!(
        "{REACTION_B} `({pct_b:.1}%)` {}",
        poll.option_b.label
    ));
    if let Some(info) = &poll.extra_info {
        body_lines.push(format!("**More info:** {info}"));
    }

    VoteDisplay {
        title: poll.title.clone(),
        url: poll.url.clone(),
        body_lines,
        footer: Some(poll.footer.clone()),
        accent: leading_accent(poll.option_a.votes, poll.option_b.votes),
        reactions: Some([REACTION_A, REACTION_B]),
    }
}

/// Renders a local "this or that" draw. The accent is chosen uniformly at
/// random per invocation, independent of content.
pub fn render_this_or_that(entry: &str) -> VoteDisplay {
    render_this_or_that_with(entry, &mut rand::thread_rng())
}

/// Seedable variant of [`render_this_or_that`].
pub fn render_this_or_that_with<R: Rng + ?Sized>(entry: &str, rng: &mut R) -> VoteDisplay {
    let parsed = ThisOrThat::parse(entry);

    let mut body_lines = Vec::with_capacity(2);
    if let Some(title) = &parsed.title {
        body_lines.push(format!("**{title}**"));
    }
    body_lines.push(format!("{REACTION_A} {} {REACTION_B}", parsed.body));

    let accent = if rng.gen_bool(0.5) {
        ACCENT_RED
    } else {
        ACCENT_BLUE
    };

    VoteDisplay {
        title: None,
        url: None,
        body_lines,
        footer: None,
        accent,
        reactions: Some([REACTION_A, REACTION_B]),
    }
}
