//! Lint session: the glue between an editing surface and the validator.
//!
//! The host pushes the full document text after every edit; the session re-validates it from
//! scratch, refreshes the diagnostics panel and notifies subscribers.
//!
//! # Example
//!
//! ```rust
//! use lua_lint::{LintChangeType, LintSession};
//!
//! let mut session = LintSession::new("function f()\nend");
//! assert!(session.diagnostics().is_empty());
//!
//! session.subscribe(|change| {
//!     println!("{:?}: {} -> {}", change.change_type, change.old_version, change.new_version);
//! });
//!
//! session.set_text("function f(\nend");
//! assert_eq!(session.summary().errors, 2);
//! ```

use crate::diagnostics::{Diagnostic, DiagnosticSeverity};
use crate::line_index::LineIndex;
use crate::markers::{self, Marker};
use crate::panel::DiagnosticsPanel;
use crate::validator::Validator;
use std::fmt;

/// The document shown when the editor opens without a file.
pub const SAMPLE_DOCUMENT: &str = r#"-- Welcome to Lua Syntax Checker
-- Start typing your Lua code here

function greet(name)
    if name then
        print("Hello, " .. name .. "!")
    else
        print("Hello, World!")
    end
end

-- Example with potential syntax error (uncomment to test):
-- function broken_function(
--     print("Missing closing parenthesis")

greet("Developer")

-- Try some advanced Lua features:
local numbers = {1, 2, 3, 4, 5}
for i, v in ipairs(numbers) do
    print("Index: " .. i .. ", Value: " .. v)
end

-- Coroutine example
local co = coroutine.create(function()
    for i = 1, 3 do
        print("Coroutine step: " .. i)
        coroutine.yield()
    end
end)

coroutine.resume(co)
"#;

/// Session change type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintChangeType {
    /// The document text was replaced.
    DocumentChanged,
    /// The diagnostics differ from the previous run.
    DiagnosticsChanged,
}

/// Session change record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintChange {
    /// Change type.
    pub change_type: LintChangeType,
    /// Old version number.
    pub old_version: u64,
    /// New version number.
    pub new_version: u64,
}

/// Session change callback function type.
pub type LintChangeCallback = Box<dyn FnMut(&LintChange) + Send>;

/// Error/warning totals, as shown in the editor header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LintSummary {
    /// Number of errors.
    pub errors: usize,
    /// Number of warnings.
    pub warnings: usize,
}

impl LintSummary {
    /// Count the severities in `diagnostics`.
    pub fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        diagnostics
            .iter()
            .fold(Self::default(), |mut summary, d| {
                match d.severity {
                    DiagnosticSeverity::Error => summary.errors += 1,
                    DiagnosticSeverity::Warning => summary.warnings += 1,
                }
                summary
            })
    }

    /// Total number of diagnostics.
    pub fn total(&self) -> usize {
        self.errors + self.warnings
    }

    /// `true` when there is nothing to report.
    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}

impl fmt::Display for LintSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return f.write_str("no issues");
        }
        let plural = |n: usize| if n == 1 { "" } else { "s" };
        write!(
            f,
            "{} error{}, {} warning{}",
            self.errors,
            plural(self.errors),
            self.warnings,
            plural(self.warnings)
        )
    }
}

/// Owns the current document and its latest diagnostics.
pub struct LintSession {
    validator: Validator,
    text: String,
    line_index: LineIndex,
    panel: DiagnosticsPanel,
    version: u64,
    callbacks: Vec<LintChangeCallback>,
}

impl LintSession {
    /// Create a session with the Lua validator and validate `text` immediately.
    pub fn new(text: &str) -> Self {
        Self::with_validator(Validator::lua(), text)
    }

    /// Create a session with a custom validator.
    pub fn with_validator(validator: Validator, text: &str) -> Self {
        let diagnostics = validator.validate(text);
        Self {
            validator,
            text: text.to_string(),
            line_index: LineIndex::from_text(text),
            panel: DiagnosticsPanel::from_diagnostics(diagnostics),
            version: 0,
            callbacks: Vec::new(),
        }
    }

    /// Replace the document and re-validate it from scratch.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.line_index = LineIndex::from_text(text);
        self.bump(LintChangeType::DocumentChanged);

        let diagnostics = self.validator.validate(text);
        if diagnostics.as_slice() != self.panel.diagnostics() {
            self.panel.replace(diagnostics);
            self.bump(LintChangeType::DiagnosticsChanged);
        }
    }

    fn bump(&mut self, change_type: LintChangeType) {
        let change = LintChange {
            change_type,
            old_version: self.version,
            new_version: self.version + 1,
        };
        self.version += 1;
        for callback in &mut self.callbacks {
            callback(&change);
        }
    }

    /// Subscribe to session changes.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&LintChange) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Check if the session has changed since a version.
    pub fn has_changed_since(&self, version: u64) -> bool {
        self.version > version
    }

    /// Current version number (incremented on every change).
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The current document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The validator in use.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Diagnostics for the current text.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.panel.diagnostics()
    }

    /// The diagnostics panel.
    pub fn panel(&self) -> &DiagnosticsPanel {
        &self.panel
    }

    /// Mutable access to the panel (selection/navigation).
    pub fn panel_mut(&mut self) -> &mut DiagnosticsPanel {
        &mut self.panel
    }

    /// Annotation markers for the current diagnostics.
    pub fn markers(&self) -> Vec<Marker> {
        markers::markers(&self.line_index, self.panel.diagnostics())
    }

    /// Error/warning totals.
    pub fn summary(&self) -> LintSummary {
        LintSummary::from_diagnostics(self.panel.diagnostics())
    }
}

impl fmt::Debug for LintSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LintSession")
            .field("version", &self.version)
            .field("chars", &self.line_index.char_count())
            .field("diagnostics", &self.panel.len())
            .field("callbacks", &format!("{} callbacks", self.callbacks.len()))
            .finish()
    }
}
