//! Config file loading

use crate::domain::PersistedConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name used when no config file exists yet.
pub const DEFAULT_CONFIG_FILE: &str = ".depscan.yml";

/// Locates and reads the persisted config file.
pub trait ConfigFileSource {
    /// Resolve `path_override` (empty means "default location") and read it.
    ///
    /// Returns the resolved path and the file contents, or a zero
    /// [`PersistedConfig`] when no file exists at the default location.
    fn read(&self, path_override: &str) -> Result<(PathBuf, PersistedConfig)>;
}

/// Reads config files relative to a project root.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    root: PathBuf,
}

impl FileConfigSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to determine working directory")?;
        Ok(Self::new(cwd))
    }
}

impl ConfigFileSource for FileConfigSource {
    fn read(&self, path_override: &str) -> Result<(PathBuf, PersistedConfig)> {
        if !path_override.is_empty() {
            let path = self.root.join(path_override);
            let config = load_config_file(&path)?;
            return Ok((path, config));
        }

        match discover_config(&self.root) {
            Some(path) => {
                let config = load_config_file(&path)?;
                Ok((path, config))
            }
            None => {
                tracing::debug!("No config file found in {}", self.root.display());
                Ok((self.root.join(DEFAULT_CONFIG_FILE), PersistedConfig::default()))
            }
        }
    }
}

/// Read and parse one config file, picking the format by extension.
pub fn load_config_file(config_file: &Path) -> Result<PersistedConfig> {
    let content = fs::read_to_string(config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    match ext.as_str() {
        "yml" | "yaml" => parse_yaml_config(&content, config_file),
        "toml" => parse_toml_config(&content, config_file),
        other => anyhow::bail!(
            "Unsupported config extension '.{}' for file {}",
            other,
            config_file.display()
        ),
    }
}

fn parse_yaml_config(content: &str, config_file: &Path) -> Result<PersistedConfig> {
    // An empty YAML document is `null`, which should mean "nothing configured".
    if content.trim().is_empty() {
        return Ok(PersistedConfig::default());
    }
    serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn parse_toml_config(content: &str, config_file: &Path) -> Result<PersistedConfig> {
    toml::from_str(content).with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

fn discover_config(root: &Path) -> Option<PathBuf> {
    let candidates = [DEFAULT_CONFIG_FILE, ".depscan.yaml", ".depscan.toml", "depscan.toml"];

    candidates.iter().map(|candidate| root.join(candidate)).find(|path| path.is_file())
}
