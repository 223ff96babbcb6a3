#![warn(missing_docs)]
//! `lua-lint-lang` - data-driven language configuration for `lua-lint`.
//!
//! This crate intentionally stays lightweight and does **not** know anything about scanning or
//! diagnostics. It provides the small set of lexical facts the validator needs (line comment
//! token, string delimiters, escape character, bracket pairs) so hosts can tweak them without
//! touching the scanner.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when checking a [`LanguageConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("line comment token must not be empty")]
    /// The line comment token was empty.
    EmptyCommentToken,

    #[error("bracket pair '{open}{close}' uses the same character to open and close")]
    /// A bracket pair opens and closes with the same character.
    DegenerateBracketPair {
        /// Opening character.
        open: char,
        /// Closing character.
        close: char,
    },

    #[error("bracket character '{0}' appears in more than one pair")]
    /// A bracket character is claimed by several pairs.
    DuplicateBracket(char),

    #[error("character '{0}' is used both as a string delimiter and as a bracket")]
    /// A string delimiter collides with a bracket character.
    DelimiterIsBracket(char),
}

/// An opening/closing bracket pair, e.g. `(` / `)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketPair {
    /// Opening character.
    pub open: char,
    /// Closing character.
    pub close: char,
}

impl BracketPair {
    /// Create a new bracket pair.
    pub const fn new(open: char, close: char) -> Self {
        Self { open, close }
    }
}

/// Lexical configuration for a Lua-like language.
///
/// Every field has a Lua default, so a partial YAML/JSON document only needs to list the
/// fields it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Line comment token (`--` for Lua).
    pub line_comment: String,
    /// Characters that open and close a quoted string.
    pub string_delimiters: Vec<char>,
    /// Character that prevents the following delimiter from closing a string.
    pub escape: Option<char>,
    /// Bracket pairs tracked by the bracket matcher.
    pub brackets: Vec<BracketPair>,
}

impl LanguageConfig {
    /// The Lua configuration: `--` comments, `"`/`'` strings, `\` escapes, `()`, `[]`, `{}`.
    pub fn lua() -> Self {
        Self {
            line_comment: "--".to_string(),
            string_delimiters: vec!['"', '\''],
            escape: Some('\\'),
            brackets: vec![
                BracketPair::new('(', ')'),
                BracketPair::new('[', ']'),
                BracketPair::new('{', '}'),
            ],
        }
    }

    /// Check that the configuration is usable by the scanner.
    pub fn check(&self) -> Result<(), LanguageError> {
        if self.line_comment.is_empty() {
            return Err(LanguageError::EmptyCommentToken);
        }

        let mut seen = Vec::with_capacity(self.brackets.len() * 2);
        for pair in &self.brackets {
            if pair.open == pair.close {
                return Err(LanguageError::DegenerateBracketPair {
                    open: pair.open,
                    close: pair.close,
                });
            }
            for ch in [pair.open, pair.close] {
                if seen.contains(&ch) {
                    return Err(LanguageError::DuplicateBracket(ch));
                }
                seen.push(ch);
            }
        }

        if let Some(&ch) = self.string_delimiters.iter().find(|ch| seen.contains(ch)) {
            return Err(LanguageError::DelimiterIsBracket(ch));
        }

        Ok(())
    }

    /// Returns `true` if the trimmed line starts with the line comment token.
    pub fn is_comment_line(&self, trimmed: &str) -> bool {
        !self.line_comment.is_empty() && trimmed.starts_with(self.line_comment.as_str())
    }

    /// Returns `true` if `ch` opens or closes a quoted string.
    pub fn is_string_delimiter(&self, ch: char) -> bool {
        self.string_delimiters.contains(&ch)
    }

    /// Returns `true` if `ch` is the escape character.
    pub fn is_escape(&self, ch: char) -> bool {
        self.escape == Some(ch)
    }

    /// The closing character expected for an opening bracket.
    pub fn closer_for(&self, open: char) -> Option<char> {
        self.brackets
            .iter()
            .find(|pair| pair.open == open)
            .map(|pair| pair.close)
    }

    /// Returns `true` if `ch` closes one of the configured bracket pairs.
    pub fn is_closer(&self, ch: char) -> bool {
        self.brackets.iter().any(|pair| pair.close == ch)
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self::lua()
    }
}
