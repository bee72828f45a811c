//! Logging setup
//!
//! The resolver only describes how logging should look ([`LogSettings`]); the
//! subscriber itself is installed once, at the single point the program starts up.

use serde::Serialize;
use std::io::IsTerminal;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Debug,
    #[default]
    Warn,
}

impl Verbosity {
    pub fn level(self) -> Level {
        match self {
            Verbosity::Debug => Level::DEBUG,
            Verbosity::Warn => Level::WARN,
        }
    }
}

/// How the stderr log backend should be configured for this run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LogSettings {
    pub verbosity: Verbosity,
    /// Include target, file and line in every record.
    pub source_location: bool,
    /// Colours are allowed (no `--no-ansi`); stderr must still be a terminal.
    pub ansi: bool,
}

impl LogSettings {
    /// Verbose with source locations under `--debug`, terse warnings otherwise.
    pub fn for_run(debug: bool, ansi: bool) -> Self {
        if debug {
            Self { verbosity: Verbosity::Debug, source_location: true, ansi }
        } else {
            Self { verbosity: Verbosity::Warn, source_location: false, ansi }
        }
    }

    /// Records go to stderr, so colour follows stderr rather than stdout.
    fn use_ansi(&self, stderr_is_terminal: bool) -> bool {
        self.ansi && stderr_is_terminal
    }
}

/// Install the global subscriber. Returns `false` when logging was already set up.
///
/// The preset level replaces any global level from RUST_LOG; per-target
/// directives in RUST_LOG still apply.
pub fn init(settings: &LogSettings) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let ansi = settings.use_ansi(std::io::stderr().is_terminal());
        let filter = EnvFilter::from_default_env().add_directive(settings.verbosity.level().into());
        let result = if settings.source_location {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_ansi(ansi)
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_ansi(ansi)
                        .with_target(false)
                        .without_time(),
                )
                .with(filter)
                .try_init()
        };
        installed = result.is_ok();
    });
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_preset_is_verbose() {
        let settings = LogSettings::for_run(true, false);
        assert_eq!(settings.verbosity, Verbosity::Debug);
        assert_eq!(settings.verbosity.level(), Level::DEBUG);
        assert!(settings.source_location);
        assert!(!settings.ansi);
    }

    #[test]
    fn test_default_preset_is_terse_warnings() {
        let settings = LogSettings::for_run(false, true);
        assert_eq!(settings.verbosity, Verbosity::Warn);
        assert!(!settings.source_location);
        assert!(settings.ansi);
    }

    #[test]
    fn test_colour_requires_stderr_terminal() {
        let allowed = LogSettings::for_run(false, true);
        assert!(allowed.use_ansi(true));
        assert!(!allowed.use_ansi(false));

        let disabled = LogSettings::for_run(false, false);
        assert!(!disabled.use_ansi(true));
    }

    #[test]
    fn test_init_runs_once() {
        let settings = LogSettings::for_run(false, false);
        init(&settings);
        assert!(!init(&settings), "second init must be a no-op");
    }
}
