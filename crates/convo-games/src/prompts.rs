//! Immutable in-memory prompt lists with uniform random draw.

use convo_common::{ConvoError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors from drawing prompts.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PromptError {
    /// The category's list has no entries. [`PromptStore::load`] rejects
    /// empty lists, so this is a startup invariant, not a runtime path.
    #[error("prompt category '{0}' has no entries")]
    EmptyCategory(PromptCategory),
}

/// Identity of a local prompt list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptCategory {
    /// Truth questions.
    Truths,
    /// Dares.
    Dares,
    /// "Never have I ever" statements.
    NeverHaveIEver,
    /// "This or that" dual-choice entries.
    ThisOrThat,
}

impl PromptCategory {
    /// All categories, in load order.
    pub const ALL: [Self; 4] = [
        Self::Truths,
        Self::Dares,
        Self::NeverHaveIEver,
        Self::ThisOrThat,
    ];

    /// File name of the category's newline-delimited prompt list.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Truths => "truths.txt",
            Self::Dares => "dares.txt",
            Self::NeverHaveIEver => "nhie.txt",
            Self::ThisOrThat => "tot.txt",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Truths => 0,
            Self::Dares => 1,
            Self::NeverHaveIEver => 2,
            Self::ThisOrThat => 3,
        }
    }
}

impl std::fmt::Display for PromptCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Truths => "truths",
            Self::Dares => "dares",
            Self::NeverHaveIEver => "nhie",
            Self::ThisOrThat => "tot",
        };
        f.write_str(name)
    }
}

/// Categorized prompt lists, loaded once at startup and shared read-only
/// across all command invocations.
#[derive(Debug)]
pub struct PromptStore {
    lists: [Vec<String>; 4],
}

impl PromptStore {
    /// Loads every category from `dir`, one file per category.
    ///
    /// A missing file or an empty list is a fatal startup error.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut lists: [Vec<String>; 4] = Default::default();

        for category in PromptCategory::ALL {
            let path = dir.join(category.file_name());
            let entries = read_prompt_file(&path)?;
            if entries.is_empty() {
                return Err(ConvoError::startup(format!(
                    "prompt list {} has no entries",
                    path.display()
                )));
            }
            info!(
                "loaded {} '{}' prompts from {}",
                entries.len(),
                category,
                path.display()
            );
            lists[category.index()] = entries;
        }

        Ok(Self { lists })
    }

    /// Builds a store from in-memory lists. Mostly useful in tests.
    pub fn from_lists(
        truths: Vec<String>,
        dares: Vec<String>,
        nhie: Vec<String>,
        tot: Vec<String>,
    ) -> Self {
        Self {
            lists: [truths, dares, nhie, tot],
        }
    }

    /// Draws a uniformly random entry from the category. Repeats are
    /// allowed; draws are independent.
    pub fn draw(&self, category: PromptCategory) -> std::result::Result<String, PromptError> {
        self.draw_with(category, &mut rand::thread_rng())
            .map(str::to_owned)
    }

    /// Draws with a caller-supplied random source, so tests can seed it.
    pub fn draw_with<R: Rng + ?Sized>(
        &self,
        category: PromptCategory,
        rng: &mut R,
    ) -> std::result::Result<&str, PromptError> {
        self.lists[category.index()]
            .choose(rng)
            .map(String::as_str)
            .ok_or(PromptError::EmptyCategory(category))
    }

    /// Number of entries in the category.
    pub fn len(&self, category: PromptCategory) -> usize {
        self.lists[category.index()].len()
    }

    /// True when the category has no entries.
    pub fn is_empty(&self, category: PromptCategory) -> bool {
        self.lists[category.index()].is_empty()
    }
}

/// Parse a newline-delimited prompt file; blank lines are ignored and
/// entries are trimmed.
fn read_prompt_file(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| {
        ConvoError::startup_with_source(format!("failed to read prompt list {}", path.display()), e)
    })?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

/// A parsed "this or that" entry.
///
/// Entries may carry an optional title before a single `:` separator;
/// the body highlights the literal `" or "` between the two options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThisOrThat {
    /// Optional title preceding the `:` separator.
    pub title: Option<String>,
    /// Two-option body with the `or` separator highlighted.
    pub body: String,
}

impl ThisOrThat {
    /// Parses a raw list entry.
    pub fn parse(entry: &str) -> Self {
        match entry.split_once(':') {
            Some((title, rest)) => Self {
                title: Some(title.trim().to_string()),
                body: highlight_separator(rest.trim()),
            },
            None => Self {
                title: None,
                body: highlight_separator(entry.trim()),
            },
        }
    }
}

fn highlight_separator(body: &str) -> String {
    body.replace(" or ", " **OR** ")
}
