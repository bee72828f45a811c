//! Flag/file/default precedence
//!
//! Flags win over the config file, field by field. An empty flag value means
//! "not set" and falls through to the file; the module list is replaced as a
//! whole rather than merged.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ConfigError;
use super::flags::FlagSource;
use super::loader::ConfigFileSource;
use super::modules::parse_modules_flag;
use crate::domain::{
    AnalyzeConfig, BuildConfig, DefaultConfig, PersistedConfig, ReportConfig, ResolvedConfig,
    TestConfig, UploadConfig,
};
use crate::logging::LogSettings;

/// Whether output goes to a human at a terminal.
pub trait Terminal {
    fn is_interactive(&self) -> bool;
}

/// Checks the process's real stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutTerminal;

impl Terminal for StdoutTerminal {
    fn is_interactive(&self) -> bool {
        std::io::stdout().is_terminal()
    }
}

/// Builds a [`ResolvedConfig`] from flags and the persisted config file.
pub struct ConfigResolver<'a> {
    files: &'a dyn ConfigFileSource,
    terminal: &'a dyn Terminal,
    version: &'static str,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(
        files: &'a dyn ConfigFileSource,
        terminal: &'a dyn Terminal,
        version: &'static str,
    ) -> Self {
        Self { files, terminal, version }
    }

    /// Resolve the configuration for this run.
    ///
    /// # Errors
    ///
    /// Fails on a malformed `--modules` value (before the config file is touched)
    /// or when the config file cannot be read. No partial configuration is returned.
    pub fn resolve(&self, flags: &FlagSource<'_>) -> Result<ResolvedConfig, ConfigError> {
        let cmd = flags.command;
        let modules = parse_modules_flag(&flags.string("modules"))?;
        let path_override = flags.string("config");

        let debug = flags.either("debug");
        let no_ansi = flags.either("no-ansi");
        let interactive = self.terminal.is_interactive() && !no_ansi;

        let mut config = ResolvedConfig {
            api_key: flags.string("api_key"),
            fetcher: flags.string("fetcher"),
            project: flags.string("project"),
            revision: flags.string("revision"),
            endpoint: flags.string("endpoint"),
            modules,

            debug,
            interactive,

            default_cmd: DefaultConfig { build: cmd.bool("build") },
            analyze_cmd: AnalyzeConfig {
                output: cmd.bool("output"),
                allow_unresolved: cmd.bool("allow-unresolved"),
            },
            build_cmd: BuildConfig { force: cmd.bool("force") },
            test_cmd: TestConfig { timeout: Duration::from_secs(cmd.uint("timeout")) },
            upload_cmd: UploadConfig { use_locators: cmd.bool("locators"), data: flags.string("data") },
            report_cmd: ReportConfig { report_type: flags.string("type") },

            config_file_path: PathBuf::from(&path_override),
            version: self.version.to_string(),
            logging: LogSettings::for_run(debug, !no_ansi),
        };

        let (config_file_path, file) = self.files.read(&path_override)?;
        config.config_file_path = config_file_path;

        apply_file_values(&mut config, file);
        Ok(config)
    }
}

/// Fill every unset flag-derived field from the config file.
fn apply_file_values(config: &mut ResolvedConfig, file: PersistedConfig) {
    let cli = file.cli;
    fill_blank(&mut config.project, cli.project);
    fill_blank(&mut config.revision, cli.revision);
    fill_blank(&mut config.fetcher, cli.fetcher);
    fill_blank(&mut config.api_key, cli.api_key);
    fill_blank(&mut config.endpoint, cli.server);

    if config.modules.is_empty() {
        config.modules = file.analyze.modules;
    }
}

fn fill_blank(field: &mut String, fallback: String) {
    if field.is_empty() {
        *field = fallback;
    }
}
