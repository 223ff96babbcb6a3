//! Line index used to map line/column diagnostics to document character offsets.
//!
//! Backed by a [`Rope`] built with `\n` as the only line separator, which is the same line
//! splitting the validator uses.

use crate::diagnostics::Position;
use ropey::Rope;

/// Logical line index - implemented using Rope data structure.
#[derive(Debug, Clone)]
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Create an empty line index.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build line index from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Total line count. An empty document has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total character count.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Character length of a line, excluding its `\n`. Out-of-range lines have length 0.
    pub fn line_len(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let start = self.rope.line_to_char(line);
        let end = if line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line + 1) - 1 // -1 for newline
        } else {
            self.rope.len_chars()
        };
        end - start
    }

    /// Get text of the specified line (excluding newline).
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let mut text = self.rope.line(line).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        Some(text)
    }

    /// Get character offset from a position, clamping the column to the line length.
    ///
    /// Positions past the last line map to the end of the document.
    pub fn position_to_char_offset(&self, position: Position) -> usize {
        if position.line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(position.line) + position.column.min(self.line_len(position.line))
    }

    /// Get the position of a character offset (clamped to the document length).
    pub fn char_offset_to_position(&self, char_offset: usize) -> Position {
        let char_offset = char_offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(char_offset);
        Position::new(line, char_offset - self.rope.line_to_char(line))
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}
