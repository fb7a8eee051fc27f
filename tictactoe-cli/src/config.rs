//! Play configuration loaded from an optional JSON file
//!
//! Level 4 - Utilities and configuration

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use tictactoe_core::Side;

/// Settings for the interactive game.
///
/// Every field is optional in the file; command-line flags take precedence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Who moves first; asked interactively when unset
    pub first: Option<Side>,
    /// Character drawn for the human's cells
    pub human_glyph: char,
    /// Character drawn for the machine's cells
    pub machine_glyph: char,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            first: None,
            human_glyph: Side::Human.glyph(),
            machine_glyph: Side::Machine.glyph(),
        }
    }
}

impl PlayConfig {
    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_json(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Glyphs must be distinct, one column wide and not look like a square
    /// number or the board frame
    fn validate(&self) -> Result<()> {
        for glyph in [self.human_glyph, self.machine_glyph] {
            if !glyph.is_ascii_graphic() || glyph.is_ascii_digit() || glyph == '#' {
                bail!("glyph '{}' would be confused with the board", glyph);
            }
        }
        if self.human_glyph == self.machine_glyph {
            bail!("human and machine glyphs must differ");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlayConfig::default();
        assert_eq!(config.first, None);
        assert_eq!(config.human_glyph, 'X');
        assert_eq!(config.machine_glyph, 'O');
        assert_eq!(PlayConfig::from_json("{}").unwrap(), config);
    }

    #[test]
    fn test_partial_file() {
        let config = PlayConfig::from_json(r#"{"first": "machine", "machine_glyph": "@"}"#).unwrap();
        assert_eq!(config.first, Some(Side::Machine));
        assert_eq!(config.human_glyph, 'X');
        assert_eq!(config.machine_glyph, '@');
    }

    #[test]
    fn test_rejects_bad_glyphs() {
        assert!(PlayConfig::from_json(r#"{"human_glyph": "5"}"#).is_err());
        assert!(PlayConfig::from_json(r#"{"human_glyph": "O"}"#).is_err());
        assert!(PlayConfig::from_json(r#"{"first": "nobody"}"#).is_err());
        assert!(PlayConfig::from_json(r#"{"human_glyph": " "}"#).is_err());
    }

    #[test]
    fn test_rejects_wide_glyphs() {
        assert!(PlayConfig::from_json(r#"{"human_glyph": "棋"}"#).is_err());
        assert!(PlayConfig::from_json(r#"{"machine_glyph": "é"}"#).is_err());
        let emoji = PlayConfig {
            machine_glyph: '\u{1F600}',
            ..PlayConfig::default()
        };
        assert!(emoji.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("tictactoe-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"first": "human"}"#).unwrap();
        let config = PlayConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.first, Some(Side::Human));

        assert!(PlayConfig::load(Path::new("/nonexistent/tictactoe.json")).is_err());
        assert_eq!(PlayConfig::load_or_default(None).unwrap(), PlayConfig::default());
    }
}
