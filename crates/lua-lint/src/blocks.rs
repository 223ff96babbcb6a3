//! Block matcher.
//!
//! Works on whole trimmed lines rather than on the character scan:
//! - every block keyword found as a whole word opens a block (comment lines open nothing)
//! - a line that is exactly `end` closes the innermost block
//! - a line that is exactly `until` closes the innermost block, which must be a `repeat`
//!
//! Keyword detection is a word-boundary test on the whole line, so keywords inside strings
//! still count, and `end)` or `end -- done` are not recognized as closers.

use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticRange};
use crate::frames::{BlockFrame, FrameStack};
use regex::Regex;

/// Keywords that open a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKeyword {
    /// `function`
    Function,
    /// `if`
    If,
    /// `for`
    For,
    /// `while`
    While,
    /// `repeat` (closed by `until`)
    Repeat,
    /// `do`
    Do,
}

impl BlockKeyword {
    /// All keywords, in the order frames are pushed when a line contains several.
    pub const ALL: [BlockKeyword; 6] = [
        BlockKeyword::Function,
        BlockKeyword::If,
        BlockKeyword::For,
        BlockKeyword::While,
        BlockKeyword::Repeat,
        BlockKeyword::Do,
    ];

    /// Source text of the keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKeyword::Function => "function",
            BlockKeyword::If => "if",
            BlockKeyword::For => "for",
            BlockKeyword::While => "while",
            BlockKeyword::Repeat => "repeat",
            BlockKeyword::Do => "do",
        }
    }

    /// Parse a keyword from its source text.
    pub fn from_word(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kw| kw.as_str() == word)
    }
}

const END_KEYWORD: &str = "end";
const UNTIL_KEYWORD: &str = "until";

/// Finds whole-word block keywords in a line.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    regex: Regex,
}

impl KeywordMatcher {
    /// Build the matcher for [`BlockKeyword::ALL`].
    pub fn new() -> Result<Self, regex::Error> {
        let alternation = BlockKeyword::ALL
            .iter()
            .map(|kw| regex::escape(kw.as_str()))
            .collect::<Vec<_>>()
            .join("|");
        // ASCII boundaries: `àdo` still contains the keyword `do`.
        Ok(Self {
            regex: Regex::new(&format!(r"(?-u:\b)(?:{alternation})(?-u:\b)"))?,
        })
    }

    /// Distinct keywords present in `line`, in [`BlockKeyword::ALL`] order.
    pub fn keywords_in(&self, line: &str) -> Vec<BlockKeyword> {
        let mut found = [false; BlockKeyword::ALL.len()];
        for m in self.regex.find_iter(line) {
            if let Some(kw) = BlockKeyword::from_word(m.as_str()) {
                found[kw as usize] = true;
            }
        }
        BlockKeyword::ALL
            .into_iter()
            .filter(|kw| found[*kw as usize])
            .collect()
    }
}

/// Tracks open blocks across the whole document.
#[derive(Debug, Default)]
pub struct BlockMatcher {
    stack: FrameStack<BlockFrame>,
}

impl BlockMatcher {
    /// Create a matcher with an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of blocks currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Feed one line.
    ///
    /// `trimmed` is the line without surrounding whitespace and `line_len` the character
    /// length of the untrimmed line (the span of whole-line diagnostics).
    pub fn feed_line(
        &mut self,
        keywords: &KeywordMatcher,
        line: usize,
        line_len: usize,
        trimmed: &str,
        is_comment: bool,
        out: &mut Vec<Diagnostic>,
    ) {
        if !is_comment {
            for keyword in keywords.keywords_in(trimmed) {
                self.stack.push(BlockFrame { keyword, line });
            }
        }

        let whole_line = DiagnosticRange::on_line(line, 0, line_len);
        match trimmed {
            END_KEYWORD => {
                if self.stack.pop().is_none() {
                    out.push(Diagnostic::error(
                        DiagnosticCode::UnexpectedEnd,
                        whole_line,
                        "Unexpected 'end' - no matching block statement",
                    ));
                }
            }
            UNTIL_KEYWORD => {
                if self.stack.peek().map(|frame| frame.keyword) == Some(BlockKeyword::Repeat) {
                    self.stack.pop();
                } else {
                    out.push(Diagnostic::error(
                        DiagnosticCode::UnmatchedUntil,
                        whole_line,
                        "'until' without matching 'repeat'",
                    ));
                }
            }
            _ => {}
        }
    }

    /// Report every block still open; block markers span `block_width` columns.
    pub fn finish(self, block_width: usize, out: &mut Vec<Diagnostic>) {
        self.stack.drain_unclosed(block_width, out);
    }
}
