//! Integration tests for the convo-games crate.
//!
//! These exercise the full local pipeline: prompt lists loaded from disk,
//! drawn, and rendered into displayable vote payloads.

use convo_games::render::{
    render_poll, render_this_or_that, ACCENT_BLUE, ACCENT_RED, REACTION_A, REACTION_B,
};
use convo_games::{PollOption, PollResult, PromptCategory, PromptStore};
use std::fs;
use std::path::Path;

fn write_data_dir(dir: &Path) {
    fs::write(dir.join("truths.txt"), "What is your biggest fear?\n").unwrap();
    fs::write(dir.join("dares.txt"), "Sing a song.\nDo ten pushups.\n").unwrap();
    fs::write(dir.join("nhie.txt"), "gone skydiving\n").unwrap();
    fs::write(
        dir.join("tot.txt"),
        "Drinks: Coke or Pepsi\nCoffee or tea\n",
    )
    .unwrap();
}

#[test]
fn test_store_loads_and_draws_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    write_data_dir(dir.path());

    let store = PromptStore::load(dir.path()).unwrap();
    for category in PromptCategory::ALL {
        assert!(!store.is_empty(category));
        let drawn = store.draw(category).unwrap();
        assert!(!drawn.is_empty());
    }
}

#[test]
fn test_this_or_that_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    write_data_dir(dir.path());

    let store = PromptStore::load(dir.path()).unwrap();
    let entry = store.draw(PromptCategory::ThisOrThat).unwrap();
    let display = render_this_or_that(&entry);

    assert_eq!(display.reactions, Some([REACTION_A, REACTION_B]));
    assert!(display.accent == ACCENT_RED || display.accent == ACCENT_BLUE);
    let body = display.body_lines.join("\n");
    assert!(body.contains("**OR**"));
    assert!(body.contains(REACTION_A));
    assert!(body.contains(REACTION_B));
}

#[test]
fn test_poll_render_end_to_end() {
    let poll = PollResult {
        title: Some("Superpowers".to_string()),
        url: Some("http://either.io/123".to_string()),
        heading: "Would You Rather".to_string(),
        scenario: None,
        option_a: PollOption {
            label: "Be able to fly".to_string(),
            votes: 75,
        },
        option_b: PollOption {
            label: "Be invisible".to_string(),
            votes: 25,
        },
        extra_info: Some("No takebacks.".to_string()),
        footer: "either.io • 💬 7".to_string(),
    };

    let display = render_poll(&poll);
    assert_eq!(display.accent, ACCENT_RED);
    assert_eq!(display.title.as_deref(), Some("Superpowers"));
    assert_eq!(display.footer.as_deref(), Some("either.io • 💬 7"));

    let body = display.body_lines.join("\n");
    assert!(body.contains("(75.0%)"));
    assert!(body.contains("(25.0%)"));
    assert!(body.contains("**More info:** No takebacks."));
}
