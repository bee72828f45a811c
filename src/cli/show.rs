//! `show-config` output

use anyhow::{Context, Result};

use crate::domain::ResolvedConfig;

/// Render the resolved configuration as pretty JSON with the API key masked.
pub fn render(config: &ResolvedConfig) -> Result<String> {
    serde_json::to_string_pretty(&config.redacted()).context("Failed to serialize configuration")
}
