use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// App-private files directory on Android
#[cfg(target_os = "android")]
const DEFAULT_DOCUMENTS_PATH: &str = "/data/user/0/com.timabell.pdfstash/files/documents";
#[cfg(not(target_os = "android"))]
const DEFAULT_DOCUMENTS_PATH: &str = "~/.local/share/pdf-stash/documents";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Where imported documents are kept.
///
/// The export folder is deliberately absent: it is chosen per session and
/// never written here.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub documents_path: PathBuf,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded path
        config.documents_path =
            Self::expand_path(&config.documents_path).unwrap_or(config.documents_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/pdf-stash");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Config used when none has been written yet
    pub fn platform_default() -> Self {
        let documents_path = PathBuf::from(DEFAULT_DOCUMENTS_PATH);
        Self {
            documents_path: Self::expand_path(&documents_path).unwrap_or(documents_path),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/pdf-stash/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            documents_path: PathBuf::from("/tmp/test-documents"),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original.documents_path, deserialized.documents_path);
    }

    #[test]
    fn test_platform_default_is_expanded() {
        let config = Config::platform_default();
        let path_str = config.documents_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with("documents"));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("PDF_STASH_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$PDF_STASH_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, PathBuf::from("/test/env/path/subdir"));

        unsafe {
            env::remove_var("PDF_STASH_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_unknown_var_is_none() {
        let path = PathBuf::from("$PDF_STASH_SURELY_UNSET_VAR/docs");
        assert!(Config::expand_path(&path).is_none());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "documents_path = [not toml").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            documents_path: PathBuf::from("/tmp/test-documents"),
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config.documents_path, test_config.documents_path);
    }

    #[test]
    fn test_config_with_env_var_in_toml() {
        unsafe {
            env::set_var("PDF_STASH_ROOT", "/custom/root");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "documents_path = \"$PDF_STASH_ROOT/pdfs\"\n").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.documents_path, PathBuf::from("/custom/root/pdfs"));

        unsafe {
            env::remove_var("PDF_STASH_ROOT");
        }
    }
}
