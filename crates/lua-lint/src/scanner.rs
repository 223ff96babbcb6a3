//! Lexical classifier.
//!
//! Decides, per character of a line, whether it sits in a line comment, in a quoted string or
//! in normal code. Only normal-code characters are handed to the bracket matcher.
//!
//! The scan state is reset at the start of every line: strings and comments never span lines.
//! A `\\` right before a closing delimiter is treated as an escape of the delimiter, so a
//! string ending in an even number of backslashes stays open until the end of the line.

use lua_lint_lang::LanguageConfig;

/// Classification of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Normal code.
    Code,
    /// Inside (or delimiting) a quoted string.
    String,
    /// Inside a line comment, including the comment token itself.
    Comment,
}

/// Per-line scan state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Delimiter of the string currently open, if any.
    pub string_delimiter: Option<char>,
    /// Whether the rest of the line is a comment.
    pub in_comment: bool,
}

impl ScanState {
    /// Whether a quoted string is currently open.
    pub fn in_string(&self) -> bool {
        self.string_delimiter.is_some()
    }

    /// Classify `chars[index]` and advance the state.
    ///
    /// Returns the class and the number of characters consumed (the comment token is consumed
    /// as a whole).
    pub fn classify(
        &mut self,
        language: &LanguageConfig,
        chars: &[char],
        index: usize,
    ) -> (CharClass, usize) {
        if !self.in_string() && starts_with_token(chars, index, &language.line_comment) {
            self.in_comment = true;
            return (CharClass::Comment, language.line_comment.chars().count());
        }

        if self.in_comment {
            return (CharClass::Comment, 1);
        }

        let ch = chars[index];
        match self.string_delimiter {
            None if language.is_string_delimiter(ch) => {
                self.string_delimiter = Some(ch);
                (CharClass::String, 1)
            }
            None => (CharClass::Code, 1),
            Some(delimiter) => {
                let escaped = index > 0 && language.is_escape(chars[index - 1]);
                if ch == delimiter && !escaped {
                    self.string_delimiter = None;
                }
                (CharClass::String, 1)
            }
        }
    }
}

fn starts_with_token(chars: &[char], index: usize, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    let mut rest = chars[index..].iter();
    token.chars().all(|expected| rest.next() == Some(&expected))
}

/// Iterator over the normal-code characters of one line, yielding `(column, char)`.
pub struct CodeChars<'a> {
    language: &'a LanguageConfig,
    chars: Vec<char>,
    index: usize,
    state: ScanState,
}

impl<'a> CodeChars<'a> {
    /// Start scanning `line` with a fresh [`ScanState`].
    pub fn new(language: &'a LanguageConfig, line: &str) -> Self {
        Self {
            language,
            chars: line.chars().collect(),
            index: 0,
            state: ScanState::default(),
        }
    }

    /// The state reached so far.
    pub fn state(&self) -> ScanState {
        self.state
    }
}

impl Iterator for CodeChars<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.chars.len() {
            if self.state.in_comment {
                self.index = self.chars.len();
                break;
            }

            let index = self.index;
            let (class, consumed) = self.state.classify(self.language, &self.chars, index);
            self.index += consumed.max(1);

            if class == CharClass::Code {
                return Some((index, self.chars[index]));
            }
        }
        None
    }
}
