//! Command-line interface for depscan
//!
//! Every command resolves its configuration first; the analysis work itself
//! happens downstream of the resolved snapshot.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod args;
mod plan;
mod show;

use crate::config::{self, ConfigResolver, FileConfigSource, FlagScope, FlagSource, StdoutTerminal};
use args::{AnalyzeArgs, BuildArgs, CommonArgs, ReportArgs, TestArgs, UploadArgs};
use plan::CommandKind;

/// Analyze project dependencies and report on them
#[derive(Parser, Debug)]
#[command(name = "depscan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    common: CommonArgs,

    /// Run a build before analyzing (default command only)
    #[arg(short = 'b', long)]
    build: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze modules and collect their dependencies
    Analyze(AnalyzeArgs),

    /// Build modules so their dependencies can be resolved
    Build(BuildArgs),

    /// Wait for the server-side scan and check for issues
    Test(TestArgs),

    /// Upload analysis results
    Upload(UploadArgs),

    /// Generate a report for the project
    Report(ReportArgs),

    /// Print the resolved configuration as JSON
    ShowConfig(CommonArgs),
}

impl Cli {
    /// Flags given after the subcommand, or the top-level flags when there is none.
    fn command_scope(&self) -> &dyn FlagScope {
        match &self.command {
            Some(Commands::Analyze(args)) => args,
            Some(Commands::Build(args)) => args,
            Some(Commands::Test(args)) => args,
            Some(Commands::Upload(args)) => args,
            Some(Commands::Report(args)) => args,
            Some(Commands::ShowConfig(args)) => args,
            None => self,
        }
    }

    fn kind(&self) -> CommandKind {
        match &self.command {
            Some(Commands::Analyze(_)) => CommandKind::Analyze,
            Some(Commands::Build(_)) => CommandKind::Build,
            Some(Commands::Test(_)) => CommandKind::Test,
            Some(Commands::Upload(_)) => CommandKind::Upload,
            Some(Commands::Report(_)) => CommandKind::Report,
            Some(Commands::ShowConfig(_)) => CommandKind::ShowConfig,
            None => CommandKind::Default,
        }
    }
}

impl FlagScope for Cli {
    fn string(&self, name: &str) -> String {
        self.common.string(name)
    }

    fn bool(&self, name: &str) -> bool {
        match name {
            "build" => self.build,
            _ => self.common.bool(name),
        }
    }

    fn uint(&self, name: &str) -> u64 {
        self.common.uint(name)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let files = FileConfigSource::from_current_dir()?;
    let resolver = ConfigResolver::new(&files, &StdoutTerminal, env!("CARGO_PKG_VERSION"));
    let flags = FlagSource::new(cli.command_scope(), &cli);
    let config = config::must_new(&resolver, &flags);

    match cli.kind() {
        CommandKind::ShowConfig => println!("{}", show::render(&config)?),
        kind => println!("{}", plan::summary(kind, &config)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigFileSource, Terminal};
    use crate::domain::{ModuleDeclaration, PersistedConfig};
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingFiles {
        requested: RefCell<Option<String>>,
    }

    impl ConfigFileSource for RecordingFiles {
        fn read(&self, path_override: &str) -> anyhow::Result<(PathBuf, PersistedConfig)> {
            *self.requested.borrow_mut() = Some(path_override.to_string());
            Ok((PathBuf::from(path_override), PersistedConfig::default()))
        }
    }

    struct Pipe;

    impl Terminal for Pipe {
        fn is_interactive(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_options_before_subcommand_reach_resolver() {
        let cli = Cli::try_parse_from([
            "depscan", "--project", "acme", "--config", "ci.yml", "-m", "go:api", "analyze",
        ])
        .expect("parse");
        let files = RecordingFiles::default();
        let resolver = ConfigResolver::new(&files, &Pipe, "0.0.0");

        let config = resolver.resolve(&FlagSource::new(cli.command_scope(), &cli)).expect("config");

        assert_eq!(config.project, "acme");
        assert_eq!(files.requested.borrow().as_deref(), Some("ci.yml"));
        assert_eq!(config.config_file_path, PathBuf::from("ci.yml"));
        assert_eq!(config.modules, vec![ModuleDeclaration::from_token("go", "api")]);
    }

    #[test]
    fn test_subcommand_options_win_over_top_level() {
        let cli = Cli::try_parse_from(["depscan", "-p", "outer", "build", "-p", "inner"])
            .expect("parse");
        let files = RecordingFiles::default();
        let resolver = ConfigResolver::new(&files, &Pipe, "0.0.0");

        let config = resolver.resolve(&FlagSource::new(cli.command_scope(), &cli)).expect("config");
        assert_eq!(config.project, "inner");
    }

    #[test]
    fn test_global_and_command_scopes_are_separate() {
        let cli = Cli::try_parse_from(["depscan", "--debug", "analyze", "--no-ansi", "-p", "acme"])
            .expect("parse");

        assert_eq!(cli.kind(), CommandKind::Analyze);
        assert!(cli.bool("debug"));
        assert!(!cli.bool("no-ansi"));
        assert!(cli.command_scope().bool("no-ansi"));
        assert!(!cli.command_scope().bool("debug"));
        assert_eq!(cli.command_scope().string("project"), "acme");
        assert_eq!(cli.string("project"), "");

        let flags = FlagSource::new(cli.command_scope(), &cli);
        assert!(flags.either("debug"));
        assert!(flags.either("no-ansi"));
    }

    #[test]
    fn test_default_command_reads_top_level() {
        let cli = Cli::try_parse_from(["depscan", "-b", "-m", "go:api"]).expect("parse");
        assert_eq!(cli.kind(), CommandKind::Default);
        assert!(cli.command_scope().bool("build"));
        assert_eq!(cli.command_scope().string("modules"), "go:api");
    }

    #[test]
    fn test_test_timeout_default() {
        let cli = Cli::try_parse_from(["depscan", "test"]).expect("parse");
        assert_eq!(cli.command_scope().uint("timeout"), 600);
    }

    #[test]
    fn test_report_type_flag() {
        let cli = Cli::try_parse_from(["depscan", "report", "--type", "licenses"]).expect("parse");
        assert_eq!(cli.command_scope().string("type"), "licenses");
    }
}
