//! Annotation markers.
//!
//! The annotation layer renders one marker per diagnostic. Markers are anchored to document
//! character offsets (half-open), like style intervals, and carry a severity-specific style
//! id the UI/theme layer maps to an underline colour.

use crate::diagnostics::{Diagnostic, DiagnosticSeverity};
use crate::line_index::LineIndex;

/// Style identifier handed to the renderer.
pub type StyleId = u32;

// Low bits store the severity, the base keeps lint markers apart from other style layers.
const MARKER_STYLE_BASE: StyleId = 0x0500_0000;

/// Style id for error markers.
pub const MARKER_STYLE_ERROR: StyleId = MARKER_STYLE_BASE | 1;
/// Style id for warning markers.
pub const MARKER_STYLE_WARNING: StyleId = MARKER_STYLE_BASE | 2;

/// Style id used for a severity.
pub fn marker_style_id(severity: DiagnosticSeverity) -> StyleId {
    match severity {
        DiagnosticSeverity::Error => MARKER_STYLE_ERROR,
        DiagnosticSeverity::Warning => MARKER_STYLE_WARNING,
    }
}

/// A rendered diagnostic range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    /// Start offset (inclusive), in `char`s from the start of the document.
    pub start: usize,
    /// End offset (exclusive). Equal to `start` for a point marker.
    pub end: usize,
    /// Style id (see [`marker_style_id`]).
    pub style_id: StyleId,
    /// Index of the diagnostic this marker was produced from.
    pub diagnostic: usize,
}

/// Map every diagnostic to a marker, in the same order.
///
/// Columns past the end of a line are clamped to the line length, so a marker never spills
/// onto the following line.
pub fn markers(line_index: &LineIndex, diagnostics: &[Diagnostic]) -> Vec<Marker> {
    diagnostics
        .iter()
        .enumerate()
        .map(|(index, diagnostic)| {
            let start = line_index.position_to_char_offset(diagnostic.range.from);
            let end = line_index
                .position_to_char_offset(diagnostic.range.to)
                .max(start);
            Marker {
                start,
                end,
                style_id: marker_style_id(diagnostic.severity),
                diagnostic: index,
            }
        })
        .collect()
}
