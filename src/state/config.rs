//! Board settings
//!
//! Stored as JSON in the user's config directory:
//! - Linux: ~/.config/hangman-board/config.json
//! - macOS: ~/Library/Application Support/hangman-board/config.json
//! - Windows: %APPDATA%\hangman-board\config.json
//!
//! Missing fields fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::widget::{progress, tile, Size};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid board config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("board config has no words")]
    NoWords,
    #[error("word {word:?} uses {letter:?}, which has no tile in the alphabet")]
    UnplayableWord { word: String, letter: char },
}

/// Everything the host needs to build a board
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BoardConfig {
    /// Directory holding all images, including its trailing separator
    pub asset_dir: String,

    /// Image extension including the period (".png", ".jpg")
    pub extension: String,

    /// Base name of the gallows series (`<base>_0`, ..., `<base>_win`, `<base>_lose`)
    pub gallows_base: String,

    pub gallows_size: Size,

    pub tile_size: Size,

    /// Letters offered as tiles, in display order
    pub alphabet: String,

    /// Candidate secret words
    pub words: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            asset_dir: "images/".to_string(),
            extension: ".png".to_string(),
            gallows_base: "hangman".to_string(),
            gallows_size: progress::DEFAULT_SIZE,
            tile_size: tile::DEFAULT_SIZE,
            alphabet: "abcdefghijklmnopqrstuvwxyz".to_string(),
            words: ["phantom", "gallows", "lantern", "midnight", "whisper", "cobweb"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }
}

impl BoardConfig {
    /// Load from the platform config path, or defaults when no file exists
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded board config");
        Ok(config)
    }

    /// Alphabet letters in display order, each at most once
    pub fn letters(&self) -> String {
        let mut letters = String::with_capacity(self.alphabet.len());
        for letter in self.alphabet.chars() {
            if !letters.contains(letter) {
                letters.push(letter);
            }
        }
        letters
    }

    /// Every word must be winnable with the tiles on offer
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.words.is_empty() {
            return Err(ConfigError::NoWords);
        }
        for word in &self.words {
            let word = word.to_lowercase();
            if let Some(letter) = word.chars().find(|c| !self.alphabet.contains(*c)) {
                return Err(ConfigError::UnplayableWord { word, letter });
            }
        }
        Ok(())
    }

    /// Pick a secret word, lowercased
    pub fn pick_word(&self, seed: usize) -> Option<String> {
        if self.words.is_empty() {
            return None;
        }
        Some(self.words[seed % self.words.len()].to_lowercase())
    }

    /// Where the config file is expected, if the platform has a config directory
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hangman-board").join("config.json"))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_board() {
        let config = BoardConfig::default();
        assert_eq!(config.asset_dir, "images/");
        assert_eq!(config.extension, ".png");
        assert_eq!(config.gallows_base, "hangman");
        assert_eq!(config.gallows_size, Size::new(440, 255));
        assert_eq!(config.tile_size, Size::new(50, 50));
        assert_eq!(config.alphabet.len(), 26);
    }

    #[test]
    fn test_serialization() {
        let mut config = BoardConfig::default();
        config.asset_dir = "art/".to_string();
        config.words = vec!["rust".to_string()];

        let json = config.to_json().unwrap();
        let restored = BoardConfig::from_json(&json).unwrap();

        assert_eq!(config, restored);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = BoardConfig::from_json(r#"{ "extension": ".jpg" }"#).unwrap();
        assert_eq!(config.extension, ".jpg");
        assert_eq!(config.gallows_base, "hangman");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "gallows_size": { "width": 200, "height": 100 } }"#).unwrap();

        let config = BoardConfig::load_from(&path).unwrap();
        assert_eq!(config.gallows_size, Size::new(200, 100));
    }

    #[test]
    fn test_load_from_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(BoardConfig::load_from(&path), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_default_is_valid() {
        assert!(BoardConfig::default().validate().is_ok());
    }

    #[test]
    fn test_word_outside_alphabet_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "words": ["rust", "x-ray"] }"#).unwrap();

        match BoardConfig::load_from(&path) {
            Err(ConfigError::UnplayableWord { word, letter }) => {
                assert_eq!(word, "x-ray");
                assert_eq!(letter, '-');
            }
            other => panic!("expected unplayable word, got {:?}", other),
        }
    }

    #[test]
    fn test_uppercase_alphabet_cannot_spell_lowercased_word() {
        let mut config = BoardConfig::default();
        config.alphabet = "RUST".to_string();
        config.words = vec!["RUST".to_string()];

        assert!(matches!(config.validate(), Err(ConfigError::UnplayableWord { letter: 'r', .. })));
    }

    #[test]
    fn test_empty_word_list_is_rejected() {
        let mut config = BoardConfig::default();
        config.words.clear();

        assert!(matches!(config.validate(), Err(ConfigError::NoWords)));
        assert_eq!(config.pick_word(3), None);
    }

    #[test]
    fn test_letters_drop_repeats() {
        let mut config = BoardConfig::default();
        config.alphabet = "aabcb".to_string();
        assert_eq!(config.letters(), "abc");
    }

    #[test]
    fn test_pick_word_wraps_seed() {
        let mut config = BoardConfig::default();
        config.words = vec!["One".to_string(), "two".to_string()];

        assert_eq!(config.pick_word(0).as_deref(), Some("one"));
        assert_eq!(config.pick_word(3).as_deref(), Some("two"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = BoardConfig::load_from(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
