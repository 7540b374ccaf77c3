//! Session configuration (YAML file, then CLI overrides).

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{LadderError, Result};
use crate::graph_builder::DEFAULT_WORKERS;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LadderConfig {
    /// Line-delimited word list.
    pub word_list: PathBuf,

    /// Snapshot file of the built map.
    pub snapshot: PathBuf,

    /// Worker pool size for the build phase.
    pub workers: usize,

    /// Ignore any existing snapshot and build from the word list.
    pub rebuild: bool,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            word_list: PathBuf::from("wordlist.txt"),
            snapshot: PathBuf::from("map.bin"),
            workers: DEFAULT_WORKERS,
            rebuild: false,
        }
    }
}

impl LadderConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: LadderConfig = serde_yaml::from_str(yaml).map_err(LadderError::config)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)
            .map_err(|e| LadderError::config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml_str(&yaml)
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(LadderError::config("workers must be at least 1"));
        }
        if self.word_list.as_os_str().is_empty() {
            return Err(LadderError::config("word_list must not be empty"));
        }
        if self.snapshot.as_os_str().is_empty() {
            return Err(LadderError::config("snapshot must not be empty"));
        }
        Ok(())
    }
}
