use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::scanner::SortOrder;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scan: ScanConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum depth to descend (unset = unlimited)
    pub max_depth: Option<usize>,
    /// Include entries starting with a dot
    pub include_hidden: bool,
    /// Descend into symlinked directories
    pub follow_symlinks: bool,
    /// Sibling order: name, size, none
    pub sort: String,
    /// List directories before files
    pub dirs_first: bool,
    /// Scan subdirectories on the rayon pool
    pub parallel: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Append a human-readable size to every entry
    pub show_size: bool,
    /// Append '/' to directory names
    pub classify: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            include_hidden: false,
            follow_symlinks: false,
            sort: "name".to_string(),
            dirs_first: false,
            parallel: false,
        }
    }
}

impl Config {
    /// Default location: `$XDG_CONFIG_HOME/tree-printer/config.toml` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tree-printer").join("config.toml"))
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Read configuration file");

        Self::parse(&contents).map_err(|source| {
            ConfigError::ParseError {
                path: path.to_path_buf(),
                source,
            }
            .into()
        })
    }

    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        self.scan.sort.parse::<SortOrder>()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scan.sort, "name");
        assert_eq!(config.scan.max_depth, None);
        assert!(!config.display.show_size);
    }

    #[test]
    fn config_serializes_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[scan]"));
        assert!(toml_str.contains("[display]"));
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = Config::parse("[scan]\nmax_depth = 2\n").unwrap();
        assert_eq!(config.scan.max_depth, Some(2));
        assert_eq!(config.scan.sort, "name");
        assert!(!config.display.classify);
    }

    #[test]
    fn load_from_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[scan]\nsort = \"size\"\ndirs_first = true\n\n[display]\nclassify = true").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.scan.sort, "size");
        assert!(config.scan.dirs_first);
        assert!(config.display.classify);
    }

    #[test]
    fn load_missing_explicit_path_fails() {
        let err = Config::load(Some(Path::new("/nonexistent/tree-printer.toml"))).unwrap_err();
        assert!(matches!(
            err,
            crate::TreePrinterError::Config(ConfigError::ReadError { .. })
        ));
    }
}
