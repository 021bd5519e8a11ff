//! Configuration loading from rankbench.toml
//!
//! RankBench configuration can be specified in a `rankbench.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name searched for by [`RankConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "rankbench.toml";

/// RankBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RankConfig {
    /// Runner configuration
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Rounds to run; each round times every function once
    #[serde(default = "default_rounds")]
    pub rounds: u64,
    /// Discard stdout written by the functions under test
    #[serde(default = "default_suppress_output")]
    pub suppress_output: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            rounds: default_rounds(),
            suppress_output: default_suppress_output(),
        }
    }
}

fn default_rounds() -> u64 {
    10
}
fn default_suppress_output() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human", "json", "csv"
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

impl RankConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` looking for [`CONFIG_FILE_NAME`]
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# RankBench Configuration

[runner]
# Rounds to run; each round times every function once
rounds = 10
# Discard stdout written by the functions under test
suppress_output = true

[output]
# Default output format: human, json, csv
format = "human"
"#
        .to_string()
    }
}
