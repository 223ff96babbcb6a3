//! Bracket matcher.
//!
//! Consumes the normal-code characters produced by [`crate::scanner::CodeChars`]. Closers are
//! matched against the nearest unmatched opener; a mismatched closer still consumes that
//! opener, there is no re-synchronization.

use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticRange, Position};
use crate::frames::{BracketFrame, FrameStack};
use lua_lint_lang::LanguageConfig;

/// Tracks open brackets across the whole document.
#[derive(Debug, Default)]
pub struct BracketMatcher {
    stack: FrameStack<BracketFrame>,
}

impl BracketMatcher {
    /// Create a matcher with an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of brackets currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Feed one normal-code character found at `position`.
    pub fn feed(
        &mut self,
        language: &LanguageConfig,
        ch: char,
        position: Position,
        out: &mut Vec<Diagnostic>,
    ) {
        if let Some(close) = language.closer_for(ch) {
            self.stack.push(BracketFrame {
                open: ch,
                close,
                position,
            });
            return;
        }

        if !language.is_closer(ch) {
            return;
        }

        let range = DiagnosticRange::on_line(position.line, position.column, position.column + 1);
        match self.stack.pop() {
            None => out.push(Diagnostic::error(
                DiagnosticCode::UnexpectedClosingBracket,
                range,
                format!("Unexpected closing '{ch}'"),
            )),
            Some(frame) if frame.close != ch => out.push(Diagnostic::error(
                DiagnosticCode::MismatchedBrackets,
                range,
                format!(
                    "Mismatched brackets: expected '{}' but found '{ch}'",
                    frame.close
                ),
            )),
            Some(_) => {}
        }
    }

    /// Report every bracket still open.
    pub fn finish(self, out: &mut Vec<Diagnostic>) {
        self.stack.drain_unclosed(1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(chars: &str) -> Vec<Diagnostic> {
        let language = LanguageConfig::lua();
        let mut matcher = BracketMatcher::new();
        let mut out = Vec::new();
        for (column, ch) in chars.chars().enumerate() {
            matcher.feed(&language, ch, Position::new(0, column), &mut out);
        }
        matcher.finish(&mut out);
        out
    }

    #[test]
    fn test_nested_pairs_are_clean() {
        assert!(run("({[]})()").is_empty());
    }

    #[test]
    fn test_unexpected_closer() {
        let out = run("a)");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].code, DiagnosticCode::UnexpectedClosingBracket);
        assert_eq!(out[0].message, "Unexpected closing ')'");
        assert_eq!(out[0].range, DiagnosticRange::on_line(0, 1, 2));
    }

    #[test]
    fn test_mismatch_consumes_opener() {
        // `(` is consumed by `]`, so the trailing `)` has nothing left to close.
        let out = run("(])");
        assert_eq!(out.len(), 2);
        assert_eq!(
            out[0].message,
            "Mismatched brackets: expected ')' but found ']'"
        );
        assert_eq!(out[1].message, "Unexpected closing ')'");
    }

    #[test]
    fn test_unclosed_reported_at_opener() {
        let out = run("x = {(1)");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].message, "Unclosed '{'");
        assert_eq!(out[0].range, DiagnosticRange::on_line(0, 4, 5));
    }

    #[test]
    fn test_depth_tracks_open_brackets() {
        let language = LanguageConfig::lua();
        let mut matcher = BracketMatcher::new();
        let mut out = Vec::new();
        matcher.feed(&language, '[', Position::new(0, 0), &mut out);
        matcher.feed(&language, '(', Position::new(0, 1), &mut out);
        assert_eq!(matcher.depth(), 2);
        matcher.feed(&language, ')', Position::new(0, 2), &mut out);
        assert_eq!(matcher.depth(), 1);
        assert!(out.is_empty());
    }
}
