#![warn(missing_docs)]
//! Lua Lint - a lightweight structural linter for Lua-like source text.
//!
//! # Overview
//!
//! `lua-lint` surfaces structural mistakes while the user edits: unbalanced brackets, block
//! keywords without `end`/`until`, stray closers, and a few one-line omissions (missing
//! `then`, missing `do`, unclosed `function` parameter list). It is **not** a parser: there is
//! no syntax tree, no scope resolution, and no expression grammar.
//!
//! The core is [`validate`], a pure function from the full document text to an ordered list
//! of [`Diagnostic`]s. It is meant to be called on every edit; each call is a full re-scan.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  LintSession (text, version, callbacks)     │  ← Host integration
//! ├─────────────────────────────────────────────┤
//! │  Markers / DiagnosticsPanel                 │  ← Annotation + issues list
//! ├─────────────────────────────────────────────┤
//! │  Validator (one forward scan)               │  ← Core
//! │    bracket matcher · block matcher ·        │
//! │    heuristics                               │
//! ├─────────────────────────────────────────────┤
//! │  Lexical classifier (strings / comments)    │  ← Leaf
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use lua_lint::{DiagnosticSeverity, Position, validate};
//!
//! let diagnostics = validate("if x > 0\nend");
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].severity, DiagnosticSeverity::Warning);
//! assert_eq!(diagnostics[0].message, "Missing 'then' after 'if' statement");
//! assert_eq!(diagnostics[0].range.from, Position::new(0, 0));
//! ```
//!
//! # Module Description
//!
//! - [`scanner`] - string/comment classification per character
//! - [`frames`] - open-construct frames and their stack
//! - [`brackets`] - bracket matcher
//! - [`blocks`] - block keyword matcher
//! - [`heuristics`] - one-line omission checks
//! - [`validator`] - the single-pass scan that drives all of the above
//! - [`line_index`] - line/column to character-offset conversion
//! - [`markers`] - annotation markers for the editor surface
//! - [`panel`] - diagnostics panel state and navigation
//! - [`session`] - re-validation on every edit with change notifications
//!
//! # Known Limitations
//!
//! - Strings and comments never span lines.
//! - Block keywords are found with a word-boundary test on the whole line, so keywords inside
//!   strings count, `for ... do` opens two blocks, and `end)` does not close anything.
//!   Word characters are ASCII only, so `àdo` contains the keyword `do`.
//! - The heuristics only see one line at a time.
//! - The "Unclosed function parameter list" range starts at the `(` column of the untrimmed
//!   line, not at its index in the trimmed text. Tools that report trimmed indices give a
//!   different start for indented lines.

pub mod blocks;
pub mod brackets;
pub mod diagnostics;
mod error;
pub mod frames;
pub mod heuristics;
pub mod line_index;
pub mod markers;
mod options;
pub mod panel;
pub mod scanner;
pub mod session;
pub mod validator;

pub use blocks::{BlockKeyword, KeywordMatcher};
pub use diagnostics::{Diagnostic, DiagnosticCode, DiagnosticRange, DiagnosticSeverity, Position};
pub use error::LintError;
pub use frames::{BlockFrame, BracketFrame, Frame, FrameStack};
pub use line_index::LineIndex;
pub use lua_lint_lang::{BracketPair, LanguageConfig, LanguageError};
pub use markers::{MARKER_STYLE_ERROR, MARKER_STYLE_WARNING, Marker, StyleId, markers};
pub use options::{DEFAULT_UNCLOSED_BLOCK_WIDTH, LintConfig, LintOptions};
pub use panel::DiagnosticsPanel;
pub use scanner::{CharClass, CodeChars, ScanState};
pub use session::{
    LintChange, LintChangeCallback, LintChangeType, LintSession, LintSummary, SAMPLE_DOCUMENT,
};
pub use validator::{Validator, validate};
