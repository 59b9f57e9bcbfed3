use crate::book::DEFAULT_PAGE_SIZE;
use crate::error::{BookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "addrbook.json";
const DEFAULT_BOOKS_DIR: &str = "AddressBooks";
const DEFAULT_PROMPT: &str = "Enter command: ";

/// Environment variable overriding both the config and the books location.
pub const HOME_ENV: &str = "ADDRBOOK_HOME";

/// Configuration for the assistant, stored in addrbook.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookConfig {
    /// Subdirectory holding saved address books
    #[serde(default = "default_books_dir")]
    pub books_dir: String,

    /// Contacts per window for `show page`
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Text shown before each input line
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_books_dir() -> String {
    DEFAULT_BOOKS_DIR.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            books_dir: default_books_dir(),
            page_size: default_page_size(),
            prompt: default_prompt(),
        }
    }
}

impl BookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BookError::Io)?;
        let mut config: BookConfig =
            serde_json::from_str(&content).map_err(BookError::Serialization)?;
        config.page_size = config.page_size.max(1);
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BookError::Serialization)?;
        fs::write(config_path, content).map_err(BookError::Io)?;
        Ok(())
    }

    /// The books directory below `base`.
    pub fn books_root(&self, base: &Path) -> PathBuf {
        base.join(&self.books_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BookConfig::default();
        assert_eq!(config.books_dir, "AddressBooks");
        assert_eq!(config.page_size, 2);
        assert_eq!(config.prompt, "Enter command: ");
    }

    #[test]
    fn test_load_missing_config() {
        let tmp = TempDir::new().unwrap();
        let config = BookConfig::load(tmp.path()).unwrap();
        assert_eq!(config, BookConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested");

        let config = BookConfig {
            books_dir: "Books".into(),
            page_size: 5,
            prompt: "> ".into(),
        };
        config.save(&dir).unwrap();

        assert_eq!(BookConfig::load(&dir).unwrap(), config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILENAME), r#"{"page_size": 0}"#).unwrap();

        let config = BookConfig::load(tmp.path()).unwrap();
        assert_eq!(config.page_size, 1);
        assert_eq!(config.books_dir, "AddressBooks");
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILENAME), "page_size = 3").unwrap();
        assert!(matches!(
            BookConfig::load(tmp.path()).unwrap_err(),
            BookError::Serialization(_)
        ));
    }

    #[test]
    fn test_books_root() {
        let config = BookConfig::default();
        assert_eq!(
            config.books_root(Path::new("/home/me")),
            PathBuf::from("/home/me/AddressBooks")
        );
    }
}
