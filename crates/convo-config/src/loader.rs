//! Configuration loading from file and environment.

use crate::settings::Settings;
use convo_common::Result;
use std::path::Path;
use tracing::debug;

/// Loads settings from a TOML file layered with environment overrides.
///
/// Environment variables use the `CONVO` prefix with `__` as the section
/// separator, e.g. `CONVO_BOT__PREFIX=+`. Validation is the caller's
/// responsibility: the binary applies its `DISCORD_TOKEN` override first
/// and then calls [`Settings::validate`].
pub fn load(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    debug!("loading configuration from {}", path.display());

    let raw = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("CONVO").separator("__"))
        .build()?;

    let settings: Settings = raw.try_deserialize()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const EXAMPLE: &str = r#"
[bot]
prefix = "+"
token = "abc123"
support_server = "https://discord.gg/example"
playing_statuses = ["Truth or Dare", "+help"]

[data]
dir = "data"

[upstream]
request_timeout_secs = 5
"#;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(EXAMPLE.as_bytes()).unwrap();

        let settings = load(file.path()).unwrap();
        assert_eq!(settings.bot.prefix, "+");
        assert_eq!(settings.bot.token, "abc123");
        assert_eq!(settings.bot.playing_statuses.len(), 2);
        assert_eq!(settings.upstream.request_timeout_secs, 5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = load("/definitely/not/here/config.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_sections_with_defaults_may_be_omitted() {
        let minimal = r#"
[bot]
prefix = "+"
token = "abc123"
support_server = "https://discord.gg/example"
playing_statuses = ["Truth or Dare"]
"#;
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(minimal.as_bytes()).unwrap();

        let settings = load(file.path()).unwrap();
        assert_eq!(settings.data.dir.to_str(), Some("data"));
        assert_eq!(settings.upstream.request_timeout_secs, 10);
    }
}
