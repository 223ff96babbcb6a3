//! Diagnostics data model.
//!
//! Diagnostics are the only output of the validator. Hosts use them for:
//! - gutter markers / underlines (see [`crate::markers`])
//! - a problems panel with jump-to navigation (see [`crate::panel`])

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Position coordinates (line and column numbers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column in characters within the line.
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A half-open line/column range (`from..to`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRange {
    /// Range start (inclusive).
    pub from: Position,
    /// Range end (exclusive).
    pub to: Position,
}

impl DiagnosticRange {
    /// Create a new diagnostic range.
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// A range covering `start..end` columns of a single line.
    pub fn on_line(line: usize, start: usize, end: usize) -> Self {
        Self::new(Position::new(line, start), Position::new(line, end))
    }
}

/// Diagnostic severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    /// A structural impossibility (mismatched/unclosed bracket, stray `end`/`until`).
    Error,
    /// A probable mistake found by an imprecise one-line heuristic.
    Warning,
}

impl DiagnosticSeverity {
    /// Lowercase name, as used in serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies the check that produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticCode {
    /// A closing bracket with no opener.
    UnexpectedClosingBracket,
    /// A closing bracket that does not match the innermost opener.
    MismatchedBrackets,
    /// An opening bracket still open at end of document.
    UnclosedBracket,
    /// An `end` line with no open block.
    UnexpectedEnd,
    /// An `until` line whose innermost block is not `repeat`.
    UnmatchedUntil,
    /// A block keyword still open at end of document.
    UnclosedBlock,
    /// A `function` header whose parameter list is not closed on the same line.
    UnclosedParameterList,
    /// An `if` line without `then`.
    MissingThen,
    /// A `for`/`while` line without `do`.
    MissingDo,
}

impl DiagnosticCode {
    /// Stable kebab-case name of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnexpectedClosingBracket => "unexpected-closing-bracket",
            Self::MismatchedBrackets => "mismatched-brackets",
            Self::UnclosedBracket => "unclosed-bracket",
            Self::UnexpectedEnd => "unexpected-end",
            Self::UnmatchedUntil => "unmatched-until",
            Self::UnclosedBlock => "unclosed-block",
            Self::UnclosedParameterList => "unclosed-parameter-list",
            Self::MissingThen => "missing-then",
            Self::MissingDo => "missing-do",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single diagnostic item for the current document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Diagnostic range in line/column coordinates.
    pub range: DiagnosticRange,
    /// Diagnostic severity.
    pub severity: DiagnosticSeverity,
    /// The check that produced this diagnostic.
    pub code: DiagnosticCode,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(code: DiagnosticCode, range: DiagnosticRange, message: impl Into<String>) -> Self {
        Self {
            range,
            severity: DiagnosticSeverity::Error,
            code,
            message: message.into(),
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(
        code: DiagnosticCode,
        range: DiagnosticRange,
        message: impl Into<String>,
    ) -> Self {
        Self {
            range,
            severity: DiagnosticSeverity::Warning,
            code,
            message: message.into(),
        }
    }

    /// Returns `true` for [`DiagnosticSeverity::Error`].
    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }

    /// Start position of the range (the jump target for navigation).
    pub fn start(&self) -> Position {
        self.range.from
    }
}
