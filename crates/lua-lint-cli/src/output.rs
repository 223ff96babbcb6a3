//! Report rendering.
//!
//! Text output is one line per diagnostic, compiler style, with 1-based line and column:
//!
//! ```text
//! init.lua:3:5: warning[missing-then]: Missing 'then' after 'if' statement
//! ```

use clap::ValueEnum;
use lua_lint::{Diagnostic, LintSummary};
use serde::Serialize;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `path:line:col: severity[code]: message`
    Text,
    /// A JSON array of `{ path, diagnostics }` objects.
    Json,
}

/// Diagnostics for one input.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Display path (`<stdin>` for standard input).
    pub path: String,
    /// Diagnostics in validator order.
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    pub fn summary(&self) -> LintSummary {
        LintSummary::from_diagnostics(&self.diagnostics)
    }
}

fn total(reports: &[FileReport]) -> LintSummary {
    reports
        .iter()
        .map(FileReport::summary)
        .fold(LintSummary::default(), |acc, s| LintSummary {
            errors: acc.errors + s.errors,
            warnings: acc.warnings + s.warnings,
        })
}

pub fn render(format: OutputFormat, reports: &[FileReport]) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(reports)),
        OutputFormat::Json => render_json(reports),
    }
}

pub fn render_text(reports: &[FileReport]) -> String {
    let mut out = String::new();
    for report in reports {
        for d in &report.diagnostics {
            out.push_str(&format!(
                "{}:{}:{}: {}[{}]: {}\n",
                report.path,
                d.range.from.line + 1,
                d.range.from.column + 1,
                d.severity,
                d.code,
                d.message
            ));
        }
    }

    let files = reports.len();
    out.push_str(&format!(
        "{} file{} checked: {}\n",
        files,
        if files == 1 { "" } else { "s" },
        total(reports)
    ));
    out
}

pub fn render_json(reports: &[FileReport]) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(reports)?;
    json.push('\n');
    Ok(json)
}

/// Whether the run should exit with a failure status.
pub fn fails(reports: &[FileReport], deny_warnings: bool) -> bool {
    let summary = total(reports);
    summary.errors > 0 || (deny_warnings && summary.warnings > 0)
}
