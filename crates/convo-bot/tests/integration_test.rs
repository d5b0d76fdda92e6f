//! Integration tests for the convo-bot crate.
//!
//! These verify the framework wiring that start() assembles: command
//! registration, alias resolution, and shared state construction.

use convo_commands::cooldown::policy_for;
use convo_commands::{framework_options, CooldownManager, Data};
use convo_config::{BotSettings, DataSettings, Settings, UpstreamSettings};
use convo_games::{PollClient, PromptStore};
use std::sync::Arc;
use std::time::Duration;

fn test_settings() -> Settings {
    Settings {
        bot: BotSettings {
            prefix: "+".to_string(),
            token: "test-token".to_string(),
            support_server: "https://discord.gg/example".to_string(),
            playing_statuses: vec!["+help".to_string()],
        },
        data: DataSettings::default(),
        upstream: UpstreamSettings::default(),
    }
}

#[test]
fn test_framework_registers_all_commands() {
    let options = framework_options(&test_settings());

    let names: Vec<&str> = options.commands.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "help",
            "truth",
            "dare",
            "never",
            "thisorthat",
            "wouldyourather",
            "willyoupressthebutton",
        ]
    );

    // every registered command is covered by the cooldown table
    for name in names {
        assert!(policy_for(name).is_some(), "no cooldown policy for {name}");
    }
}

#[test]
fn test_framework_registers_aliases() {
    let options = framework_options(&test_settings());

    let aliases_of = |name: &str| -> Vec<String> {
        options
            .commands
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.aliases.iter().map(|a| a.to_string()).collect())
            .unwrap()
    };

    assert_eq!(aliases_of("help"), ["commands"]);
    assert_eq!(aliases_of("truth"), ["t"]);
    assert_eq!(aliases_of("dare"), ["d"]);
    assert_eq!(aliases_of("never"), ["neverhaveiever", "nhie", "ever", "n"]);
    assert_eq!(aliases_of("thisorthat"), ["tot", "tt"]);
    assert_eq!(aliases_of("wouldyourather"), ["wyr", "rather"]);
    assert_eq!(aliases_of("willyoupressthebutton"), ["wyp", "button"]);
}

#[test]
fn test_prefix_configuration() {
    let options = framework_options(&test_settings());
    assert_eq!(options.prefix_options.prefix.as_deref(), Some("+"));
    assert!(options.prefix_options.case_insensitive_commands);
    assert!(options.command_check.is_some());
}

#[tokio::test]
async fn test_shared_state_construction() {
    let settings = Arc::new(test_settings());
    let prompts = Arc::new(PromptStore::from_lists(
        vec!["t".to_string()],
        vec!["d".to_string()],
        vec!["n".to_string()],
        vec!["x or y".to_string()],
    ));
    let polls = PollClient::new(Duration::from_secs(
        settings.upstream.request_timeout_secs,
    ))
    .unwrap();
    let cooldowns = Arc::new(CooldownManager::new());

    let data = Data {
        settings,
        prompts,
        polls,
        cooldowns,
    };

    assert_eq!(data.settings.bot.prefix, "+");
    assert!(!data
        .prompts
        .is_empty(convo_games::PromptCategory::Truths));
    assert_eq!(data.cooldowns.active_buckets(), 0);
}
