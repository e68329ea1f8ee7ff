//! Annotator configuration via `lexicon.toml`
//!
//! On first open, a default `lexicon.toml` is written into the data
//! directory. To change file names or the durability mode, edit the file and
//! restart.

use lexicon_core::{Error, Result};
use lexicon_durability::DurabilityMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name placed in the data directory.
pub const CONFIG_FILE_NAME: &str = "lexicon.toml";

/// Annotator configuration loaded from `lexicon.toml`.
///
/// File names are relative to the data directory.
///
/// # Example
///
/// ```toml
/// vocabulary_file = "business_words.txt"
/// action_log_file = "action.txt"
/// corpus_file = "raw.txt"
/// durability = "standard"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Base vocabulary, one word per line.
    #[serde(default = "default_vocabulary_file")]
    pub vocabulary_file: String,
    /// Append-only action log.
    #[serde(default = "default_action_log_file")]
    pub action_log_file: String,
    /// Corpus text, fragments separated by blank lines.
    #[serde(default = "default_corpus_file")]
    pub corpus_file: String,
    /// Durability mode: `"standard"` or `"always"`.
    #[serde(default = "default_durability_str")]
    pub durability: String,
}

fn default_vocabulary_file() -> String {
    "business_words.txt".to_string()
}

fn default_action_log_file() -> String {
    "action.txt".to_string()
}

fn default_corpus_file() -> String {
    "raw.txt".to_string()
}

fn default_durability_str() -> String {
    "standard".to_string()
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            vocabulary_file: default_vocabulary_file(),
            action_log_file: default_action_log_file(),
            corpus_file: default_corpus_file(),
            durability: default_durability_str(),
        }
    }
}

impl LexiconConfig {
    /// Parse the durability string into a `DurabilityMode`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"standard"` or `"always"`.
    pub fn durability_mode(&self) -> Result<DurabilityMode> {
        DurabilityMode::from_name(&self.durability).ok_or_else(|| {
            Error::invalid_input(format!(
                "Invalid durability mode '{}' in {}. Expected \"standard\" or \"always\".",
                self.durability, CONFIG_FILE_NAME
            ))
        })
    }

    /// Path of the base vocabulary inside `data_dir`
    pub fn vocabulary_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.vocabulary_file)
    }

    /// Path of the action log inside `data_dir`
    pub fn action_log_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.action_log_file)
    }

    /// Path of the corpus inside `data_dir`
    pub fn corpus_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.corpus_file)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Lexicon configuration
#
# File names are resolved relative to this directory.
vocabulary_file = "business_words.txt"
action_log_file = "action.txt"
corpus_file = "raw.txt"

# Durability mode: "standard" (default) or "always"
#   "standard" = flush every append, fsync on close
#   "always"   = fsync every append
durability = "standard"
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or names an
    /// unknown durability mode.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: LexiconConfig = toml::from_str(&content).map_err(|e| {
            Error::invalid_input(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.durability_mode()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml())?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::invalid_input(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load `lexicon.toml` from `data_dir`, writing the default first if absent.
    pub fn load_or_create(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        let path = data_dir.join(CONFIG_FILE_NAME);
        Self::write_default_if_missing(&path)?;
        Self::from_file(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_standard() {
        let config = LexiconConfig::default();
        assert_eq!(config.durability, "standard");
        assert_eq!(config.durability_mode().unwrap(), DurabilityMode::Standard);
    }

    #[test]
    fn parse_always() {
        let config: LexiconConfig = toml::from_str("durability = \"always\"").unwrap();
        assert_eq!(config.durability_mode().unwrap(), DurabilityMode::Always);
        assert_eq!(config.vocabulary_file, "business_words.txt");
    }

    #[test]
    fn parse_invalid_mode_returns_error() {
        let config: LexiconConfig = toml::from_str("durability = \"turbo\"").unwrap();
        let err = config.durability_mode().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn default_toml_matches_default() {
        let config: LexiconConfig = toml::from_str(LexiconConfig::default_toml()).unwrap();
        assert_eq!(config, LexiconConfig::default());
    }

    #[test]
    fn paths_resolve_against_data_dir() {
        let config = LexiconConfig::default();
        let dir = Path::new("/data");
        assert_eq!(config.vocabulary_path(dir), dir.join("business_words.txt"));
        assert_eq!(config.action_log_path(dir), dir.join("action.txt"));
        assert_eq!(config.corpus_path(dir), dir.join("raw.txt"));
    }

    #[test]
    fn write_default_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "action_log_file = \"edits.log\"\n").unwrap();

        LexiconConfig::write_default_if_missing(&path).unwrap();

        let config = LexiconConfig::from_file(&path).unwrap();
        assert_eq!(config.action_log_file, "edits.log");
        assert_eq!(config.corpus_file, "raw.txt");
    }

    #[test]
    fn from_file_rejects_bad_durability() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "durability = \"sometimes\"\n").unwrap();
        assert!(LexiconConfig::from_file(&path).is_err());
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = LexiconConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn load_or_create_writes_default() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("data");
        let config = LexiconConfig::load_or_create(&data_dir).unwrap();
        assert!(data_dir.join(CONFIG_FILE_NAME).exists());
        assert_eq!(config, LexiconConfig::default());
    }

    #[test]
    fn write_to_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let config = LexiconConfig {
            durability: "always".to_string(),
            corpus_file: "corpus.txt".to_string(),
            ..LexiconConfig::default()
        };
        config.write_to_file(&path).unwrap();
        assert_eq!(LexiconConfig::from_file(&path).unwrap(), config);
    }
}
