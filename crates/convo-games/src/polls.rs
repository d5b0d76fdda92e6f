//! Upstream poll client with normalization into one dual-option shape.
//!
//! Two unrelated services feed the same render pipeline: either.io
//! ("would you rather") and willyoupressthebutton.com ("will you press
//! the button"). Each fetch is a single bounded attempt; failures are
//! never retried here and surface to the caller as a [`FetchError`].

use convo_common::{ConvoError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Base URL of the "would you rather" service.
pub const EITHER_BASE_URL: &str = "http://either.io";
/// Base URL of the "will you press the button" API.
pub const WYPB_BASE_URL: &str = "https://api2.willyoupressthebutton.com";
/// Permalink base for "will you press the button" dilemmas.
const WYPB_LINK_BASE: &str = "https://willyoupressthebutton.com";

const SERVICE_EITHER: &str = "either.io";
const SERVICE_WYPB: &str = "willyoupressthebutton.com";

/// Errors from a single upstream poll fetch.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, timeout, or HTTP-level failure.
    #[error("transport failure talking to {service}: {source}")]
    Transport {
        /// Which upstream failed.
        service: &'static str,
        /// The underlying HTTP error.
        #[source]
        source: reqwest::Error,
    },

    /// The response parsed but expected fields are missing or mistyped.
    #[error("{service} returned a malformed response: {detail}")]
    Malformed {
        /// Which upstream failed.
        service: &'static str,
        /// What exactly was wrong.
        detail: String,
    },

    /// The response parsed but carried no poll at all.
    #[error("{service} returned an empty response")]
    EmptyResponse {
        /// Which upstream failed.
        service: &'static str,
    },
}

impl FetchError {
    fn transport(service: &'static str, source: reqwest::Error) -> Self {
        Self::Transport { service, source }
    }

    fn malformed(service: &'static str, detail: impl Into<String>) -> Self {
        Self::Malformed {
            service,
            detail: detail.into(),
        }
    }
}

/// One option of a normalized poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOption {
    /// Display label.
    pub label: String,
    /// Vote total reported by the upstream.
    pub votes: u64,
}

/// Normalized dual-option poll result, constructed fresh per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollResult {
    /// Poll title, when the upstream provides one.
    pub title: Option<String>,
    /// Permalink to the poll.
    pub url: Option<String>,
    /// Heading line introducing the options.
    pub heading: String,
    /// Free-text scenario rendered before the options (press-the-button).
    pub scenario: Option<String>,
    /// First option.
    pub option_a: PollOption,
    /// Second option.
    pub option_b: PollOption,
    /// Long-form extra description rendered after the options.
    pub extra_info: Option<String>,
    /// Footer attribution text.
    pub footer: String,
}

/// Shared HTTP client for the two upstream poll services.
///
/// Requests are bounded by a timeout so a hanging upstream cannot starve
/// the event loop through a stuck command handler.
#[derive(Debug, Clone)]
pub struct PollClient {
    http: reqwest::Client,
    either_base: String,
    wypb_base: String,
}

impl PollClient {
    /// Creates a client with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConvoError::startup_with_source("failed to build HTTP client", e))?;

        Ok(Self {
            http,
            either_base: EITHER_BASE_URL.to_string(),
            wypb_base: WYPB_BASE_URL.to_string(),
        })
    }

    /// Overrides the upstream base URLs. Intended for tests.
    pub fn with_base_urls(
        mut self,
        either_base: impl Into<String>,
        wypb_base: impl Into<String>,
    ) -> Self {
        self.either_base = either_base.into();
        self.wypb_base = wypb_base.into();
        self
    }

    /// Fetches one "would you rather" poll. Single attempt, no retries.
    pub async fn fetch_would_you_rather(&self) -> std::result::Result<PollResult, FetchError> {
        let url = format!(
            "{}/questions/next/1/",
            self.either_base.trim_end_matches('/')
        );
        debug!("fetching would-you-rather poll from {url}");

        let body = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| FetchError::transport(SERVICE_EITHER, e))?
            .text()
            .await
            .map_err(|e| FetchError::transport(SERVICE_EITHER, e))?;

        normalize_would_you_rather(&body)
    }

    /// Fetches one "will you press the button" dilemma. Single attempt,
    /// no retries.
    pub async fn fetch_press_the_button(&self) -> std::result::Result<PollResult, FetchError> {
        let url = format!("{}/api/v2/dilemma", self.wypb_base.trim_end_matches('/'));
        debug!("fetching press-the-button dilemma from {url}");

        let body = self
            .http
            .post(&url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| FetchError::transport(SERVICE_WYPB, e))?
            .text()
            .await
            .map_err(|e| FetchError::transport(SERVICE_WYPB, e))?;

        normalize_press_the_button(&body)
    }
}

#[derive(Debug, Deserialize)]
struct EitherResponse {
    questions: Vec<EitherQuestion>,
}

/// either.io sends vote totals as strings, so those land as raw values
/// and get checked by `parse_count`.
#[derive(Debug, Deserialize)]
struct EitherQuestion {
    option_1: String,
    option_2: String,
    option1_total: Value,
    option2_total: Value,
    comment_total: Value,
    title: String,
    #[serde(default)]
    moreinfo: Option<String>,
    short_url: String,
}

#[derive(Debug, Deserialize)]
struct WypbResponse {
    #[serde(default)]
    dilemma: Option<WypbDilemma>,
}

#[derive(Debug, Deserialize)]
struct WypbDilemma {
    txt1: String,
    txt2: String,
    yes: u64,
    no: u64,
    id: u64,
}

/// Normalizes a raw either.io response body into a [`PollResult`].
pub(crate) fn normalize_would_you_rather(
    body: &str,
) -> std::result::Result<PollResult, FetchError> {
    let parsed: EitherResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::malformed(SERVICE_EITHER, e.to_string()))?;

    let question = parsed
        .questions
        .into_iter()
        .next()
        .ok_or(FetchError::EmptyResponse {
            service: SERVICE_EITHER,
        })?;

    let votes_a = parse_count(&question.option1_total, "option1_total")?;
    let votes_b = parse_count(&question.option2_total, "option2_total")?;
    let comments = parse_count(&question.comment_total, "comment_total")?;

    Ok(PollResult {
        title: Some(question.title),
        url: Some(question.short_url),
        heading: "Would You Rather".to_string(),
        scenario: None,
        option_a: PollOption {
            label: capitalize(&question.option_1),
            votes: votes_a,
        },
        option_b: PollOption {
            label: capitalize(&question.option_2),
            votes: votes_b,
        },
        extra_info: question.moreinfo.filter(|info| !info.trim().is_empty()),
        footer: format!("either.io • 💬 {comments}"),
    })
}

/// Normalizes a raw willyoupressthebutton.com response body into a
/// [`PollResult`]. The scenario strings arrive HTML-entity encoded.
pub(crate) fn normalize_press_the_button(
    body: &str,
) -> std::result::Result<PollResult, FetchError> {
    let parsed: WypbResponse =
        serde_json::from_str(body).map_err(|e| FetchError::malformed(SERVICE_WYPB, e.to_string()))?;

    let dilemma = parsed.dilemma.ok_or(FetchError::EmptyResponse {
        service: SERVICE_WYPB,
    })?;

    let txt1 = html_escape::decode_html_entities(&dilemma.txt1).into_owned();
    let txt2 = html_escape::decode_html_entities(&dilemma.txt2).into_owned();

    Ok(PollResult {
        title: Some("Press the button?".to_string()),
        url: Some(format!("{WYPB_LINK_BASE}/{}", dilemma.id)),
        heading: "Will you press the button if...".to_string(),
        scenario: Some(format!("{txt1}\n**but...**\n{txt2}")),
        option_a: PollOption {
            label: "I will press the button.".to_string(),
            votes: dilemma.yes,
        },
        option_b: PollOption {
            label: "I won't press the button.".to_string(),
            votes: dilemma.no,
        },
        extra_info: None,
        footer: SERVICE_WYPB.to_string(),
    })
}

/// either.io vote totals arrive as decimal strings; accept plain numbers
/// too, reject anything else as malformed.
fn parse_count(value: &Value, field: &'static str) -> std::result::Result<u64, FetchError> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| FetchError::malformed(SERVICE_EITHER, format!("{field} is negative"))),
        Value::String(s) => s.trim().parse::<u64>().map_err(|_| {
            FetchError::malformed(SERVICE_EITHER, format!("{field} is not numeric: {s:?}"))
        }),
        other => Err(FetchError::malformed(
            SERVICE_EITHER,
            format!("{field} has unexpected type: {other}"),
        )),
    }
}

/// Sentence-cases option text: first character uppercased, the rest
/// lowercased, so shouty upstream labels render consistently.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        }
        None => String::new(),
    }
}
