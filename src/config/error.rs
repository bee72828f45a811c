//! Configuration errors

use thiserror::Error;

/// Failures that abort configuration resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A `--modules` token did not split into exactly `<type>:<name>`.
    /// Carries the whole flag value, not just the offending token.
    #[error("invalid modules flag: {0}")]
    MalformedModuleSpec(String),

    /// The persisted config file could not be located, read or parsed.
    #[error(transparent)]
    ConfigFile(#[from] anyhow::Error),
}
