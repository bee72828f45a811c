//! Configuration loading and merging
//!
//! Resolves one [`ResolvedConfig`] per run from command-line flags and the
//! persisted config file, with flags taking precedence (Flags > File).

pub mod error;
pub mod flags;
pub mod loader;
pub mod modules;
pub mod resolve;

pub use error::ConfigError;
pub use flags::{try_bool, FlagScope, FlagSource, MapScope};
pub use loader::{ConfigFileSource, FileConfigSource};
pub use modules::parse_modules_flag;
pub use resolve::{ConfigResolver, StdoutTerminal, Terminal};

use crate::domain::ResolvedConfig;
use crate::logging;

/// Resolve the configuration, then set up logging from it.
///
/// This is the single start-up point: it installs the log backend described by
/// the resolved settings and records the final configuration at debug level.
pub fn new(resolver: &ConfigResolver<'_>, flags: &FlagSource<'_>) -> Result<ResolvedConfig, ConfigError> {
    let config = resolver.resolve(flags)?;
    logging::init(&config.logging);
    tracing::debug!("Configuration initialized: {:#?}", config.redacted());
    Ok(config)
}

/// Like [`new`], but exits the process when configuration cannot be resolved.
///
/// Logging is not set up yet on this path, so the error goes straight to stderr.
pub fn must_new(resolver: &ConfigResolver<'_>, flags: &FlagSource<'_>) -> ResolvedConfig {
    match new(resolver, flags) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Could not initialize configuration: {}", err);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PersistedConfig;
    use std::path::PathBuf;

    struct NoFile;

    impl ConfigFileSource for NoFile {
        fn read(&self, _path_override: &str) -> anyhow::Result<(PathBuf, PersistedConfig)> {
            Ok((PathBuf::from(loader::DEFAULT_CONFIG_FILE), PersistedConfig::default()))
        }
    }

    struct NoTty;

    impl Terminal for NoTty {
        fn is_interactive(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_new_returns_resolved_config() {
        let resolver = ConfigResolver::new(&NoFile, &NoTty, "0.0.1");
        let command = MapScope::new().set("project", "demo");
        let global = MapScope::new();

        let config = new(&resolver, &FlagSource::new(&command, &global)).expect("config");
        assert_eq!(config.project, "demo");
        assert_eq!(config.version, "0.0.1");
    }

    #[test]
    fn test_new_surfaces_errors() {
        let resolver = ConfigResolver::new(&NoFile, &NoTty, "0.0.1");
        let command = MapScope::new().set("modules", "nope");
        let global = MapScope::new();

        let err = new(&resolver, &FlagSource::new(&command, &global)).expect_err("should fail");
        assert!(matches!(err, ConfigError::MalformedModuleSpec(_)));
    }
}
