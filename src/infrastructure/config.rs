//! Configuration management

use crate::domain::{parse_locale, IdFormat};
use crate::error::{PostStoreError, Result};
use icu_locid::Locale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional configuration file looked up in the store root
pub const CONFIG_FILE: &str = "poststore.toml";

/// Environment variable naming the store root
pub const ROOT_ENV: &str = "POSTSTORE_ROOT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Directory holding the data file; relative paths resolve against the store root
    pub data_dir: PathBuf,
    pub file_name: String,
    /// BCP-47 tag selecting the title collation
    pub locale: String,
    pub id_format: IdFormat,
    /// Parse the data file once and reuse it until reload
    pub cache: bool,
    /// Emit the parsed document as a log event when listing ids
    pub dump_parsed: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            data_dir: PathBuf::from("data"),
            file_name: "posts.json".to_string(),
            locale: "en".to_string(),
            id_format: IdFormat::Compat,
            cache: true,
            dump_parsed: false,
        }
    }
}

impl StoreConfig {
    /// Create a config reading `posts.json` from the given directory
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            ..StoreConfig::default()
        }
    }

    /// Load poststore.toml from the given root (defaults if absent) and
    /// resolve `data_dir` against that root
    pub fn load_from_dir(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE);

        let mut config = match fs::read_to_string(&config_path) {
            Ok(contents) => toml::from_str::<StoreConfig>(&contents).map_err(|e| {
                PostStoreError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreConfig::default(),
            Err(e) => return Err(PostStoreError::Io(e)),
        };

        if config.data_dir.is_relative() {
            config.data_dir = root.join(&config.data_dir);
        }

        Ok(config)
    }

    /// Store root from POSTSTORE_ROOT, or the current directory
    pub fn discover_root() -> Result<PathBuf> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if path.is_dir() {
                return Ok(path);
            } else {
                return Err(PostStoreError::Config(format!(
                    "{} is set to '{}' but it is not a directory. \
                    Point it at the site root or unset it.",
                    ROOT_ENV,
                    path.display()
                )));
            }
        }

        Ok(std::env::current_dir()?)
    }

    /// Full path of the data file
    pub fn source_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }

    /// Parsed collation locale
    pub fn collation_locale(&self) -> Result<Locale> {
        parse_locale(&self.locale)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();
        assert_eq!(config.source_path(), PathBuf::from("data/posts.json"));
        assert_eq!(config.id_format, IdFormat::Compat);
        assert!(config.cache);
        assert!(!config.dump_parsed);
    }

    #[test]
    fn test_new_uses_explicit_dir() {
        let config = StoreConfig::new("/srv/site/content");
        assert_eq!(
            config.source_path(),
            PathBuf::from("/srv/site/content/posts.json")
        );
    }

    #[test]
    fn test_load_without_config_file() {
        let temp = TempDir::new().unwrap();
        let config = StoreConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.data_dir, temp.path().join("data"));
        assert_eq!(config.file_name, "posts.json");
    }

    #[test]
    fn test_load_partial_config_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            "data_dir = \"content\"\nid_format = \"string\"\n",
        )
        .unwrap();

        let config = StoreConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(
            config.source_path(),
            temp.path().join("content").join("posts.json")
        );
        assert_eq!(config.id_format, IdFormat::String);
        assert_eq!(config.locale, "en");
        assert!(config.cache);
    }

    #[test]
    fn test_absolute_data_dir_is_kept() {
        let temp = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        let config = StoreConfig::new(elsewhere.path());
        fs::write(temp.path().join(CONFIG_FILE), config.to_toml().unwrap()).unwrap();

        let loaded = StoreConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.data_dir, elsewhere.path());
    }

    #[test]
    fn test_to_toml_round_trips() {
        let temp = TempDir::new().unwrap();
        let config = StoreConfig {
            locale: "de".to_string(),
            cache: false,
            dump_parsed: true,
            ..StoreConfig::new(temp.path().join("posts"))
        };
        fs::write(temp.path().join(CONFIG_FILE), config.to_toml().unwrap()).unwrap();

        let loaded = StoreConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "data_directory = \"x\"\n").unwrap();

        match StoreConfig::load_from_dir(temp.path()).unwrap_err() {
            PostStoreError::Config(msg) => assert!(msg.contains(CONFIG_FILE)),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_id_format_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "id_format = \"numeric\"\n").unwrap();
        assert!(StoreConfig::load_from_dir(temp.path()).is_err());
    }

    #[test]
    fn test_collation_locale() {
        assert!(StoreConfig::default().collation_locale().is_ok());
        let config = StoreConfig {
            locale: "??".to_string(),
            ..StoreConfig::default()
        };
        assert!(config.collation_locale().is_err());
    }
}
