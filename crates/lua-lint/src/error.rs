use lua_lint_lang::LanguageError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while building a validator or loading its configuration.
///
/// Validation itself never fails; these only arise from configuration.
pub enum LintError {
    #[error("invalid language configuration: {0}")]
    /// The language configuration was rejected.
    Language(#[from] LanguageError),

    #[error("keyword pattern error: {0}")]
    /// The block keyword pattern failed to compile.
    KeywordPattern(#[from] regex::Error),

    #[error("YAML parse error: {0}")]
    /// A configuration file could not be parsed.
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    /// A configuration file could not be read.
    Io(#[from] std::io::Error),
}
