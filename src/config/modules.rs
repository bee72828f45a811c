//! `--modules` flag parsing

use super::error::ConfigError;
use crate::domain::ModuleDeclaration;

/// Parse `type1:name1,type2:name2,...` into module declarations.
///
/// An empty flag yields an empty list rather than an error, so the resolver can
/// fall back to the modules listed in the config file. Order and duplicates are kept.
pub fn parse_modules_flag(spec: &str) -> Result<Vec<ModuleDeclaration>, ConfigError> {
    if spec.is_empty() {
        return Ok(Vec::new());
    }

    spec.split(',')
        .map(|token| match token.split(':').collect::<Vec<_>>().as_slice() {
            [module_type, name] => Ok(ModuleDeclaration::from_token(module_type, name)),
            _ => Err(ConfigError::MalformedModuleSpec(spec.to_string())),
        })
        .collect()
}
