//! One-line summaries of what a command will process

use crate::domain::ResolvedConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Default,
    Analyze,
    Build,
    Test,
    Upload,
    Report,
    ShowConfig,
}

pub fn summary(kind: CommandKind, config: &ResolvedConfig) -> String {
    let target = describe_target(config);
    match kind {
        CommandKind::Default => {
            format!("{} | build={}", target, config.default_cmd.build)
        }
        CommandKind::Analyze => format!(
            "analyze {} | output={} allow_unresolved={}",
            target, config.analyze_cmd.output, config.analyze_cmd.allow_unresolved
        ),
        CommandKind::Build => format!("build {} | force={}", target, config.build_cmd.force),
        CommandKind::Test => {
            format!("test {} | timeout={}s", target, config.test_cmd.timeout.as_secs())
        }
        CommandKind::Upload => format!(
            "upload {} | locators={} data_bytes={}",
            target,
            config.upload_cmd.use_locators,
            config.upload_cmd.data.len()
        ),
        CommandKind::Report => {
            format!("report {} | type={}", target, or_unset(&config.report_cmd.report_type))
        }
        CommandKind::ShowConfig => format!("config {}", config.config_file_path.display()),
    }
}

fn describe_target(config: &ResolvedConfig) -> String {
    let modules = if config.modules.is_empty() {
        "none".to_string()
    } else {
        config.modules.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
    };
    format!(
        "project={} revision={} modules={}",
        or_unset(&config.project),
        or_unset(&config.revision),
        modules
    )
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() {
        "<unset>"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModuleDeclaration;
    use std::time::Duration;

    fn sample() -> ResolvedConfig {
        let mut config = ResolvedConfig {
            project: "acme".to_string(),
            modules: vec![
                ModuleDeclaration::from_token("go", "api"),
                ModuleDeclaration::from_token("npm", "web"),
            ],
            ..Default::default()
        };
        config.test_cmd.timeout = Duration::from_secs(120);
        config
    }

    #[test]
    fn test_analyze_summary_lists_modules() {
        let line = summary(CommandKind::Analyze, &sample());
        assert_eq!(
            line,
            "analyze project=acme revision=<unset> modules=go:api,npm:web | output=false allow_unresolved=false"
        );
    }

    #[test]
    fn test_summary_without_modules() {
        let line = summary(CommandKind::Test, &ResolvedConfig::default());
        assert_eq!(line, "test project=<unset> revision=<unset> modules=none | timeout=0s");
    }

    #[test]
    fn test_test_summary_timeout() {
        assert!(summary(CommandKind::Test, &sample()).ends_with("timeout=120s"));
    }
}
