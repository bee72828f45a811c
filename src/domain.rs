//! Core data types shared between configuration resolution and the commands

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::logging::LogSettings;

/// One analysis module requested by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDeclaration {
    #[serde(rename = "type")]
    pub module_type: String,
    pub name: String,
    pub path: String,
}

impl ModuleDeclaration {
    /// Build a declaration from a `<type>:<name>` token. Name and path share the token.
    pub fn from_token(module_type: &str, name: &str) -> Self {
        Self { module_type: module_type.to_string(), name: name.to_string(), path: name.to_string() }
    }
}

impl fmt::Display for ModuleDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module_type, self.name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DefaultConfig {
    pub build: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalyzeConfig {
    pub output: bool,
    pub allow_unresolved: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BuildConfig {
    pub force: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TestConfig {
    pub timeout: Duration,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UploadConfig {
    pub use_locators: bool,
    pub data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportConfig {
    pub report_type: String,
}

/// Fully resolved runtime configuration.
///
/// Built once per run by [`crate::config::ConfigResolver`] and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedConfig {
    pub api_key: String,
    pub fetcher: String,
    pub project: String,
    pub revision: String,
    pub endpoint: String,
    pub modules: Vec<ModuleDeclaration>,

    pub debug: bool,
    pub interactive: bool,

    pub default_cmd: DefaultConfig,
    pub analyze_cmd: AnalyzeConfig,
    pub build_cmd: BuildConfig,
    pub test_cmd: TestConfig,
    pub upload_cmd: UploadConfig,
    pub report_cmd: ReportConfig,

    pub config_file_path: PathBuf,
    pub version: String,
    pub logging: LogSettings,
}

impl ResolvedConfig {
    /// Copy with a set API key replaced by a mask, for logs and printed output.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if !copy.api_key.is_empty() {
            copy.api_key = API_KEY_MASK.to_string();
        }
        copy
    }
}

pub const API_KEY_MASK: &str = "********";

/// Contents of a persisted `.depscan.yml` / `.depscan.toml` file.
///
/// Every field defaults, so an empty or partial file deserializes to zero values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PersistedConfig {
    pub version: Option<u32>,
    pub cli: CliSection,
    pub analyze: AnalyzeSection,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliSection {
    pub project: String,
    pub revision: String,
    pub fetcher: String,
    pub api_key: String,
    pub server: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalyzeSection {
    pub modules: Vec<ModuleDeclaration>,
}
