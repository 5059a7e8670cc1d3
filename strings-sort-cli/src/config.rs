//! `strings-sort.toml` project configuration.
//!
//! ```toml
//! files = ["app/src/main/res/values/strings.xml", "app/src/main/res/values-*/strings.xml"]
//! keep_going = false
//! ```
//!
//! Paths and patterns are relative to the directory holding the config file.

use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::CliError;

/// Config file looked up in the working directory when no inputs are given.
pub const DEFAULT_CONFIG_FILE: &str = "strings-sort.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default)]
    pub keep_going: bool,
    /// Directory the config was loaded from.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&text).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        tracing::debug!(path = %path.display(), files = config.files.len(), "loaded config");
        Ok(config)
    }

    /// Looks for [`DEFAULT_CONFIG_FILE`] in `dir`.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Option<Self>, CliError> {
        let dir = dir.as_ref();
        let candidate = if dir == Path::new(".") {
            PathBuf::from(DEFAULT_CONFIG_FILE)
        } else {
            dir.join(DEFAULT_CONFIG_FILE)
        };
        if candidate.is_file() {
            Self::load(candidate).map(Some)
        } else {
            Ok(None)
        }
    }

    /// File entries resolved against the config's directory.
    pub fn resolved_files(&self) -> Vec<String> {
        self.files
            .iter()
            .map(|f| {
                if Path::new(f).is_absolute() {
                    f.clone()
                } else {
                    self.base_dir.join(f).to_string_lossy().into_owned()
                }
            })
            .collect()
    }
}
