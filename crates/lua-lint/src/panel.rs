//! Diagnostics panel state.
//!
//! A headless model of the "issues" list shown next to the editor: it enumerates the latest
//! diagnostics, keeps a selection, and tells the host where to move the cursor when the user
//! jumps to an entry.

use crate::diagnostics::{Diagnostic, DiagnosticSeverity, Position};

/// Selection-aware list of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticsPanel {
    diagnostics: Vec<Diagnostic>,
    selected: Option<usize>,
}

impl DiagnosticsPanel {
    /// Create an empty panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a panel listing `diagnostics`, with nothing selected.
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            diagnostics,
            selected: None,
        }
    }

    /// Replace the listed diagnostics.
    ///
    /// The selection index is kept when it is still in range, and cleared otherwise.
    pub fn replace(&mut self, diagnostics: Vec<Diagnostic>) {
        self.diagnostics = diagnostics;
        if self.selected.is_some_and(|i| i >= self.diagnostics.len()) {
            self.selected = None;
        }
    }

    /// All listed diagnostics, in validator order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// `true` means "no issues".
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of error entries.
    pub fn error_count(&self) -> usize {
        self.count(DiagnosticSeverity::Error)
    }

    /// Number of warning entries.
    pub fn warning_count(&self) -> usize {
        self.count(DiagnosticSeverity::Warning)
    }

    fn count(&self, severity: DiagnosticSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Select the entry at `index`. Out-of-range indices leave the selection unchanged.
    pub fn select(&mut self, index: usize) -> Option<&Diagnostic> {
        if index < self.diagnostics.len() {
            self.selected = Some(index);
        }
        self.selected()
    }

    /// Select the next entry, wrapping to the first.
    pub fn select_next(&mut self) -> Option<&Diagnostic> {
        let len = self.diagnostics.len();
        if len == 0 {
            return None;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % len,
            None => 0,
        });
        self.selected()
    }

    /// Select the previous entry, wrapping to the last.
    pub fn select_prev(&mut self) -> Option<&Diagnostic> {
        let len = self.diagnostics.len();
        if len == 0 {
            return None;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
        self.selected()
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Index of the selected entry.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected entry.
    pub fn selected(&self) -> Option<&Diagnostic> {
        self.selected.and_then(|i| self.diagnostics.get(i))
    }

    /// Where the cursor should go for the selected entry: the start of its range.
    pub fn jump_target(&self) -> Option<Position> {
        self.selected().map(Diagnostic::start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate;

    fn panel() -> DiagnosticsPanel {
        // 0: unexpected `)` (error), 1: missing then (warning), 2: unclosed if (error)
        DiagnosticsPanel::from_diagnostics(validate(")\n  if x"))
    }

    #[test]
    fn test_counts() {
        let panel = panel();
        assert_eq!(panel.len(), 3);
        assert_eq!(panel.error_count(), 2);
        assert_eq!(panel.warning_count(), 1);
        assert!(DiagnosticsPanel::new().is_empty());
    }

    #[test]
    fn test_navigation_wraps() {
        let mut panel = panel();
        assert_eq!(panel.jump_target(), None);

        panel.select_next();
        assert_eq!(panel.selected_index(), Some(0));
        assert_eq!(panel.jump_target(), Some(Position::new(0, 0)));

        panel.select_next();
        panel.select_next();
        assert_eq!(panel.selected_index(), Some(2));
        panel.select_next();
        assert_eq!(panel.selected_index(), Some(0));

        panel.select_prev();
        assert_eq!(panel.selected_index(), Some(2));
        assert_eq!(panel.jump_target(), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut panel = panel();
        panel.select(1);
        assert_eq!(panel.select(7).map(|d| d.severity), Some(DiagnosticSeverity::Warning));
        assert_eq!(panel.selected_index(), Some(1));
    }

    #[test]
    fn test_replace_clears_stale_selection() {
        let mut panel = panel();
        panel.select(2);
        panel.replace(validate(")"));
        assert_eq!(panel.selected_index(), None);

        panel.select(0);
        panel.replace(validate("]"));
        assert_eq!(panel.selected_index(), Some(0));
    }

    #[test]
    fn test_empty_panel_navigation() {
        let mut panel = DiagnosticsPanel::new();
        assert!(panel.select_next().is_none());
        assert!(panel.select_prev().is_none());
        assert_eq!(panel.jump_target(), None);
    }
}
