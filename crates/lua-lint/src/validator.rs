//! The validator: one forward scan over the document, line by line.
//!
//! For every line, in this order:
//! 1. the lexical classifier masks strings and comments and feeds the remaining characters to
//!    the bracket matcher
//! 2. the block matcher looks at the trimmed line
//! 3. the heuristic checks look at the trimmed line
//!
//! Diagnostics are collected in discovery order, followed by unclosed brackets and then
//! unclosed blocks. Nothing is sorted or deduplicated.

use crate::blocks::{BlockMatcher, KeywordMatcher};
use crate::brackets::BracketMatcher;
use crate::diagnostics::{Diagnostic, Position};
use crate::error::LintError;
use crate::heuristics::{self, LineContext};
use crate::options::{LintConfig, LintOptions};
use crate::scanner::CodeChars;
use lua_lint_lang::LanguageConfig;
use std::sync::LazyLock;

static LUA: LazyLock<Validator> = LazyLock::new(Validator::lua);

/// Validate `text` with the built-in Lua configuration and default options.
///
/// This is a pure function of `text`: it is total, keeps no state between calls and returns
/// the same sequence for the same input.
pub fn validate(text: &str) -> Vec<Diagnostic> {
    LUA.validate(text)
}

/// A reusable, immutable validator.
#[derive(Debug, Clone)]
pub struct Validator {
    language: LanguageConfig,
    options: LintOptions,
    keywords: KeywordMatcher,
}

impl Validator {
    /// Build a validator, rejecting unusable language configurations.
    pub fn new(language: LanguageConfig, options: LintOptions) -> Result<Self, LintError> {
        language.check()?;
        Ok(Self {
            language,
            options,
            keywords: KeywordMatcher::new()?,
        })
    }

    /// Build a validator from a loaded configuration file.
    pub fn from_config(config: LintConfig) -> Result<Self, LintError> {
        Self::new(config.language, config.rules)
    }

    /// The Lua validator with default options.
    pub fn lua() -> Self {
        Self::new(LanguageConfig::lua(), LintOptions::default())
            .expect("built-in Lua configuration is valid")
    }

    /// The language configuration in use.
    pub fn language(&self) -> &LanguageConfig {
        &self.language
    }

    /// The lint options in use.
    pub fn options(&self) -> &LintOptions {
        &self.options
    }

    /// Scan the whole document and return its diagnostics.
    pub fn validate(&self, text: &str) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        let mut brackets = BracketMatcher::new();
        let mut blocks = BlockMatcher::new();
        let mut line_count = 0;

        for (line, line_text) in text.split('\n').enumerate() {
            line_count += 1;

            for (column, ch) in CodeChars::new(&self.language, line_text) {
                brackets.feed(&self.language, ch, Position::new(line, column), &mut out);
            }

            let trimmed = line_text.trim();
            let ctx = LineContext {
                line,
                text: line_text,
                trimmed,
                is_comment: self.language.is_comment_line(trimmed),
            };

            blocks.feed_line(
                &self.keywords,
                line,
                line_text.chars().count(),
                trimmed,
                ctx.is_comment,
                &mut out,
            );
            heuristics::check_line(&self.options, &ctx, &mut out);
        }

        let open_brackets = brackets.depth();
        let open_blocks = blocks.depth();
        brackets.finish(&mut out);
        blocks.finish(self.options.unclosed_block_width, &mut out);

        tracing::debug!(
            lines = line_count,
            open_brackets,
            open_blocks,
            diagnostics = out.len(),
            "validated document"
        );
        out
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::lua()
    }
}
