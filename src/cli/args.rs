//! Command-line arguments and their by-name lookup
//!
//! Every command carries the [`CommonArgs`]. The resolver reads them through
//! [`FlagScope`], so each args struct answers for the flag names it defines.

use clap::Args;

use crate::config::FlagScope;

/// Options accepted both before and after the subcommand name.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Path to config file (default: .depscan.yml in the working directory)
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<String>,

    /// Project name
    #[arg(short = 'p', long, value_name = "NAME")]
    pub project: Option<String>,

    /// Project revision (commit, tag or version)
    #[arg(short = 'r', long, value_name = "REVISION")]
    pub revision: Option<String>,

    /// Server endpoint
    #[arg(short = 'e', long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Revision fetcher (e.g. git, custom)
    #[arg(long, value_name = "FETCHER")]
    pub fetcher: Option<String>,

    /// API key for the server
    #[arg(long, value_name = "KEY", env = "DEPSCAN_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Modules to analyze, as comma-separated type:name pairs (e.g. 'go:./cmd,npm:web')
    #[arg(short = 'm', long, value_name = "MODULES")]
    pub modules: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Disable colors and interactive output
    #[arg(long)]
    pub no_ansi: bool,
}

impl FlagScope for CommonArgs {
    fn string(&self, name: &str) -> String {
        let value = match name {
            "config" => &self.config,
            "project" => &self.project,
            "revision" => &self.revision,
            "endpoint" => &self.endpoint,
            "fetcher" => &self.fetcher,
            "api_key" => &self.api_key,
            "modules" => &self.modules,
            _ => return String::new(),
        };
        value.clone().unwrap_or_default()
    }

    fn bool(&self, name: &str) -> bool {
        match name {
            "debug" => self.debug,
            "no-ansi" => self.no_ansi,
            _ => false,
        }
    }

    fn uint(&self, _name: &str) -> u64 {
        0
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print results to stdout instead of uploading them
    #[arg(short = 'o', long)]
    pub output: bool,

    /// Continue when some dependencies cannot be resolved
    #[arg(long)]
    pub allow_unresolved: bool,
}

impl FlagScope for AnalyzeArgs {
    fn string(&self, name: &str) -> String {
        self.common.string(name)
    }

    fn bool(&self, name: &str) -> bool {
        match name {
            "output" => self.output,
            "allow-unresolved" => self.allow_unresolved,
            _ => self.common.bool(name),
        }
    }

    fn uint(&self, name: &str) -> u64 {
        self.common.uint(name)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Rebuild modules even if they look built already
    #[arg(short = 'f', long)]
    pub force: bool,
}

impl FlagScope for BuildArgs {
    fn string(&self, name: &str) -> String {
        self.common.string(name)
    }

    fn bool(&self, name: &str) -> bool {
        match name {
            "force" => self.force,
            _ => self.common.bool(name),
        }
    }

    fn uint(&self, name: &str) -> u64 {
        self.common.uint(name)
    }
}

#[derive(Args, Debug, Clone)]
pub struct TestArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Seconds to wait for scan results
    #[arg(long, value_name = "SECONDS", default_value_t = 600)]
    pub timeout: u64,
}

impl FlagScope for TestArgs {
    fn string(&self, name: &str) -> String {
        self.common.string(name)
    }

    fn bool(&self, name: &str) -> bool {
        self.common.bool(name)
    }

    fn uint(&self, name: &str) -> u64 {
        match name {
            "timeout" => self.timeout,
            _ => self.common.uint(name),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct UploadArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Upload dependency locators instead of full build data
    #[arg(long)]
    pub locators: bool,

    /// Upload payload
    #[arg(long, value_name = "DATA")]
    pub data: Option<String>,
}

impl FlagScope for UploadArgs {
    fn string(&self, name: &str) -> String {
        match name {
            "data" => self.data.clone().unwrap_or_default(),
            _ => self.common.string(name),
        }
    }

    fn bool(&self, name: &str) -> bool {
        match name {
            "locators" => self.locators,
            _ => self.common.bool(name),
        }
    }

    fn uint(&self, name: &str) -> u64 {
        self.common.uint(name)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Report type (e.g. licenses, dependencies)
    #[arg(id = "type", long = "type", value_name = "TYPE")]
    pub report_type: Option<String>,
}

impl FlagScope for ReportArgs {
    fn string(&self, name: &str) -> String {
        match name {
            "type" => self.report_type.clone().unwrap_or_default(),
            _ => self.common.string(name),
        }
    }

    fn bool(&self, name: &str) -> bool {
        self.common.bool(name)
    }

    fn uint(&self, name: &str) -> u64 {
        self.common.uint(name)
    }
}
