//! Browser configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the session files
    pub data_dir: PathBuf,
    /// Homepage URL, opened by "new tab" and on a first start
    pub homepage: String,
    /// Prefix for address bar input without a scheme
    pub default_scheme: String,
    /// File name of the persisted tab list
    pub tabs_file: String,
    /// File name of the persisted history
    pub history_file: String,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            homepage: "https://vikij462.github.io/neon-nova-karta/".to_string(),
            default_scheme: mega_navigation::DEFAULT_SCHEME.to_string(),
            tabs_file: mega_session::TABS_FILE.to_string(),
            history_file: mega_session::HISTORY_FILE.to_string(),
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("MegaBrowser"))
            .unwrap_or_else(|| PathBuf::from(".mega-browser"))
    }

    pub fn tabs_path(&self) -> PathBuf {
        self.data_dir.join(&self.tabs_file)
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(&self.history_file)
    }

    /// Read a JSON settings file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Like [`Config::load`], but falls back to the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(CoreError::ConfigIo { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::debug!(path = %path.display(), "No settings file, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unusable settings file");
                Self::default()
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::new(PathBuf::from("/data"));
        assert_eq!(config.tabs_path(), PathBuf::from("/data/tabs.txt"));
        assert_eq!(config.history_path(), PathBuf::from("/data/history.txt"));
        assert_eq!(config.default_scheme, "https://");
    }

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{ "homepage": "https://home.example", "data_dir": "/srv/mega" }"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.homepage, "https://home.example");
        assert_eq!(config.data_dir, PathBuf::from("/srv/mega"));
        assert_eq!(config.tabs_file, "tabs.txt");
    }

    #[test]
    fn test_load_or_default() {
        let dir = TempDir::new().unwrap();

        let missing = Config::load_or_default(dir.path().join("missing.json"));
        assert_eq!(missing, Config::default());

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(Config::load(&broken), Err(CoreError::Config(_))));
        assert_eq!(Config::load_or_default(&broken), Config::default());
    }
}
