use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::logger::LogLevel;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub enabled: bool,
    pub log_file: bool,
    pub log_level: LogLevel,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        LoggerConfig {
            enabled: true,
            log_file: false,
            log_level: LogLevel::Info,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub logger: LoggerConfig,
    /// Cap on the number of words pulled from the language enumerator during
    /// a self-test. Lexicon tries are acyclic, so the default (no cap) is
    /// safe; set this when verifying automata that may contain cycles.
    pub max_generated_words: Option<usize>,
}

impl LexiconConfig {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read config file {}", path.as_ref().display()))?;
        toml::from_str(&raw).context("failed to parse config file")
    }

    pub fn from_optional_file(path: Option<&str>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
