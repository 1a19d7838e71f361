use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Engine executable override; resolved from the candidate list when unset.
    #[serde(default)]
    pub engine: Option<String>,

    /// Extra arguments appended after the engine's defaults.
    #[serde(default)]
    pub engine_args: Vec<String>,

    /// Regex patterns stripped from comments before checking.
    #[serde(default = "default_stopword_patterns")]
    pub stopword_patterns: Vec<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    crate::engine::DEFAULT_TIMEOUT.as_secs()
}

fn default_stopword_patterns() -> Vec<String> {
    vec![
        r"\b[A-Z0-9_]{2,}\b".to_string(),    // ALL_CAPS
        r"https?://\S+".to_string(),         // URLs
        r"\b[a-fA-F0-9]{32,}\b".to_string(), // Hashes
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}".to_string(), // Emails
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: None,
            engine_args: Vec::new(),
            stopword_patterns: default_stopword_patterns(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        engine: Option<String>,
        engine_args: Vec<String>,
        cli_patterns: Vec<String>,
        timeout_secs: Option<u64>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".cmtspell.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if engine.is_some() {
            config.engine = engine;
        }
        config.engine_args.extend(engine_args);
        config.stopword_patterns.extend(cli_patterns);
        if let Some(secs) = timeout_secs {
            config.timeout_secs = secs;
        }

        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.engine.is_some() {
            self.engine = other.engine;
        }
        if !other.engine_args.is_empty() {
            self.engine_args = other.engine_args;
        }
        if other.stopword_patterns != default_stopword_patterns() {
            self.stopword_patterns = other.stopword_patterns;
        }
        if other.timeout_secs != default_timeout_secs() {
            self.timeout_secs = other.timeout_secs;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "cmtspell").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
