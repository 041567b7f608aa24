use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum GlyphStyle {
    #[default]
    Ascii,
    Emoji,
}

/// Player preferences, read from an optional TOML file and overridden by command line flags.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub seed: Option<u64>,
    pub glyphs: GlyphStyle,
    pub json: bool,
}

impl Settings {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read settings from {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid settings in {}", path.display()))
    }

    pub(crate) fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Seed for the mine generator, drawn at random when none is configured.
    pub(crate) fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn parses_all_fields() {
        let settings = Settings::parse("seed = 42\nglyphs = \"emoji\"\njson = true\n").unwrap();
        assert_eq!(
            settings,
            Settings {
                seed: Some(42),
                glyphs: GlyphStyle::Emoji,
                json: true,
            }
        );
        assert_eq!(settings.seed_or_random(), 42);
    }

    #[test]
    fn rejects_unknown_glyphs() {
        assert!(Settings::parse("glyphs = \"braille\"").is_err());
    }
}
