//! One-line heuristics for common omissions.
//!
//! These checks look at a single trimmed line with plain substring tests. Headers split
//! across several lines are not tracked, so `if a and\n b then` warns on its first line.

use crate::diagnostics::{Diagnostic, DiagnosticCode, DiagnosticRange};
use crate::options::LintOptions;

/// A line handed to the heuristic checks.
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    /// Zero-based line number.
    pub line: usize,
    /// The untrimmed line.
    pub text: &'a str,
    /// The line without surrounding whitespace.
    pub trimmed: &'a str,
    /// Whether the trimmed line starts with the comment token.
    pub is_comment: bool,
}

impl LineContext<'_> {
    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn whole_line(&self) -> DiagnosticRange {
        DiagnosticRange::on_line(self.line, 0, self.len())
    }

    /// Column (in the untrimmed line) of a byte offset into `trimmed`.
    fn column_of(&self, trimmed_byte: usize) -> usize {
        let leading = self.text.len() - self.text.trim_start().len();
        self.text[..leading].chars().count() + self.trimmed[..trimmed_byte].chars().count()
    }
}

/// Run every enabled heuristic on one line, in a fixed order.
pub fn check_line(options: &LintOptions, ctx: &LineContext<'_>, out: &mut Vec<Diagnostic>) {
    if options.unclosed_parameter_list {
        unclosed_parameter_list(ctx, out);
    }
    if options.missing_then {
        missing_then(ctx, out);
    }
    if options.missing_do {
        missing_do(ctx, out);
    }
}

// Runs on comment lines as well: a commented-out `function f(` header is still reported.
fn unclosed_parameter_list(ctx: &LineContext<'_>, out: &mut Vec<Diagnostic>) {
    let trimmed = ctx.trimmed;
    if !trimmed.contains("function") || trimmed.contains(')') {
        return;
    }
    let Some(open) = trimmed.find('(') else {
        return;
    };

    out.push(Diagnostic::error(
        DiagnosticCode::UnclosedParameterList,
        DiagnosticRange::on_line(ctx.line, ctx.column_of(open), ctx.len()),
        "Unclosed function parameter list",
    ));
}

fn missing_then(ctx: &LineContext<'_>, out: &mut Vec<Diagnostic>) {
    if ctx.is_comment || !ctx.trimmed.contains("if ") || ctx.trimmed.contains("then") {
        return;
    }
    out.push(Diagnostic::warning(
        DiagnosticCode::MissingThen,
        ctx.whole_line(),
        "Missing 'then' after 'if' statement",
    ));
}

fn missing_do(ctx: &LineContext<'_>, out: &mut Vec<Diagnostic>) {
    let trimmed = ctx.trimmed;
    let is_loop = trimmed.contains("for ") || trimmed.contains("while ");
    if ctx.is_comment || !is_loop || trimmed.contains("do") {
        return;
    }
    out.push(Diagnostic::warning(
        DiagnosticCode::MissingDo,
        ctx.whole_line(),
        "Missing 'do' after loop statement",
    ));
}
