//! Open-construct frames and the stack that holds them.
//!
//! Brackets and block keywords are tracked on two independent stacks with different closing
//! rules, but both share the same lifecycle: push on open, pop on close, and convert every
//! frame left at end of document into exactly one "unclosed" diagnostic.

use crate::blocks::BlockKeyword;
use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticRange, Position};

/// A frame that can report itself as unclosed at end of document.
pub trait Frame {
    /// The diagnostic emitted when this frame is never closed.
    ///
    /// `block_width` is the marker width used for block frames, which only know their line.
    fn unclosed(&self, block_width: usize) -> Diagnostic;
}

/// An opening bracket awaiting its closer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketFrame {
    /// The opening character.
    pub open: char,
    /// The closing character this frame expects.
    pub close: char,
    /// Position of the opening character.
    pub position: Position,
}

impl Frame for BracketFrame {
    fn unclosed(&self, _block_width: usize) -> Diagnostic {
        let Position { line, column } = self.position;
        Diagnostic::error(
            DiagnosticCode::UnclosedBracket,
            DiagnosticRange::on_line(line, column, column + 1),
            format!("Unclosed '{}'", self.open),
        )
    }
}

/// A block keyword awaiting `end` (or `until` for `repeat`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockFrame {
    /// The keyword that opened the block.
    pub keyword: BlockKeyword,
    /// Line the keyword was found on.
    pub line: usize,
}

impl Frame for BlockFrame {
    fn unclosed(&self, block_width: usize) -> Diagnostic {
        let closer = match self.keyword {
            BlockKeyword::Repeat => "until",
            _ => "end",
        };
        Diagnostic::error(
            DiagnosticCode::UnclosedBlock,
            DiagnosticRange::on_line(self.line, 0, block_width),
            format!(
                "Unclosed '{}' block - missing '{}'",
                self.keyword.as_str(),
                closer
            ),
        )
    }
}

/// A LIFO stack of open frames.
#[derive(Debug, Clone)]
pub struct FrameStack<F> {
    frames: Vec<F>,
}

impl<F: Frame> FrameStack<F> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Push a newly opened frame.
    pub fn push(&mut self, frame: F) {
        self.frames.push(frame);
    }

    /// Pop the innermost frame.
    pub fn pop(&mut self) -> Option<F> {
        self.frames.pop()
    }

    /// The innermost frame.
    pub fn peek(&self) -> Option<&F> {
        self.frames.last()
    }

    /// Number of open frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if nothing is open.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Consume the stack, turning every remaining frame (outermost first) into an "unclosed"
    /// diagnostic.
    pub fn drain_unclosed(self, block_width: usize, out: &mut Vec<Diagnostic>) {
        for frame in &self.frames {
            let diagnostic = frame.unclosed(block_width);
            tracing::trace!(
                diagnostic = %diagnostic.message,
                line = diagnostic.range.from.line,
                "unclosed frame"
            );
            out.push(diagnostic);
        }
    }
}

impl<F: Frame> Default for FrameStack<F> {
    fn default() -> Self {
        Self::new()
    }
}
