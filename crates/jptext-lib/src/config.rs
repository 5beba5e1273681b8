use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fixed_map::Set;
use serde::{Deserialize, Serialize};

use crate::romaji::{FromRomaji, Invalid, Standard, ToRomaji, DEFAULT_MACRONS};
use crate::Dirs;

/// A configuration used for conversions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Enabled romanization standards.
    pub standards: Set<Standard>,
    /// Marker appended to long vowels when converting to romaji. Long vowels
    /// are spelled out when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macron: Option<String>,
    /// Combining marks which lengthen vowels when converting from romaji.
    pub macrons: String,
    /// What to do with text which can't be converted.
    pub invalid: Invalid,
    /// Path to a JSON table of kanji readings, optionally gzipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readings: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            standards: Standard::all(),
            macron: None,
            macrons: DEFAULT_MACRONS.to_owned(),
            invalid: Invalid::Pass,
            readings: None,
        }
    }
}

impl Config {
    /// Load the configuration from its default location, or use the default
    /// configuration if there is none.
    pub fn load(dirs: &Dirs) -> Result<Self> {
        let config_path = dirs.config_path();

        if !config_path.exists() {
            tracing::trace!(?config_path, "No configuration");
            return Ok(Self::default());
        }

        Self::from_path(&config_path)
    }

    /// Load the configuration from the given path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("Reading {}", path.display()))?;

        let config = toml::from_str(&data)
            .with_context(|| format!("Parsing {}", path.display()))?;

        tracing::debug!(?path, "Loaded configuration");
        Ok(config)
    }

    /// Options for converting to romaji.
    pub fn to_romaji(&self) -> ToRomaji<'_> {
        ToRomaji {
            invalid: self.invalid,
            macron: self.macron.as_deref(),
        }
    }

    /// Options for converting from romaji.
    pub fn from_romaji(&self) -> FromRomaji<'_> {
        FromRomaji {
            invalid: self.invalid,
            macrons: &self.macrons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.standards.iter().count(), 3);
    }

    #[test]
    fn parse() {
        let config: Config = toml::from_str(
            r#"
            standards = ["ministry", "hyojun"]
            macron = "\u0304"
            invalid = "omit"
            readings = "kanji.json.gz"
            "#,
        )
        .unwrap();

        assert!(config.standards.contains(Standard::Ministry));
        assert!(!config.standards.contains(Standard::Ansi));
        assert!(config.standards.contains(Standard::Hyojun));
        assert_eq!(config.macron.as_deref(), Some("\u{304}"));
        assert_eq!(config.macrons, DEFAULT_MACRONS);
        assert_eq!(config.invalid, Invalid::Omit);
        assert_eq!(config.readings, Some(PathBuf::from("kanji.json.gz")));

        let options = config.to_romaji();
        assert_eq!(options.invalid, Invalid::Omit);
        assert_eq!(options.macron, Some("\u{304}"));
    }

    #[test]
    fn reject_unknown_standard() {
        assert!(toml::from_str::<Config>(r#"standards = ["kunrei"]"#).is_err());
    }
}
