//! Lint options and the on-disk configuration format.
//!
//! ```yaml
//! # lua-lint.yaml
//! rules:
//!   missing_then: false
//! language:
//!   line_comment: "--"
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use crate::error::LintError;
use lua_lint_lang::LanguageConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default width, in columns, of an "unclosed block" marker.
pub const DEFAULT_UNCLOSED_BLOCK_WIDTH: usize = 10;

/// Toggles for the heuristic checks.
///
/// Bracket and block matching are always on; only the imprecise one-line heuristics can be
/// switched off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintOptions {
    /// Report `function` headers whose `(` is not closed on the same line.
    pub unclosed_parameter_list: bool,
    /// Warn on `if` lines without `then`.
    pub missing_then: bool,
    /// Warn on `for`/`while` lines without `do`.
    pub missing_do: bool,
    /// Width of the marker placed on the opening line of an unclosed block.
    pub unclosed_block_width: usize,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            unclosed_parameter_list: true,
            missing_then: true,
            missing_do: true,
            unclosed_block_width: DEFAULT_UNCLOSED_BLOCK_WIDTH,
        }
    }
}

/// A complete configuration file: lexical settings plus rule toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Lexical settings.
    pub language: LanguageConfig,
    /// Rule toggles.
    pub rules: LintOptions,
}

impl LintConfig {
    /// Parse a configuration from YAML text. An empty document yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LintError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.language.check()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LintError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}
