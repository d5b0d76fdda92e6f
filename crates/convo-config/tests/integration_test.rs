//! Integration tests for the convo-config crate.

use std::io::Write;

#[test]
fn test_shipped_example_config_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config.example.toml");
    let settings = convo_config::load(path).unwrap();

    assert!(!settings.bot.prefix.is_empty());
    assert!(!settings.bot.playing_statuses.is_empty());
    // the example ships without a token; validation holds until one is set
    assert!(settings.validate().is_err());
}

#[test]
fn test_full_load_and_validate_round() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[bot]
prefix = "+"
token = "abc123"
support_server = "https://discord.gg/example"
playing_statuses = ["+help"]
"#
    )
    .unwrap();

    let settings = convo_config::load(file.path()).unwrap();
    assert!(settings.validate().is_ok());
    assert_eq!(settings.data.dir.to_str(), Some("data"));
    assert_eq!(settings.upstream.request_timeout_secs, 10);
}
