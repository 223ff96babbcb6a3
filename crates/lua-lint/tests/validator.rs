use lua_lint::{
    Diagnostic, DiagnosticCode, DiagnosticRange, DiagnosticSeverity, SAMPLE_DOCUMENT, validate,
};
use pretty_assertions::assert_eq;

fn messages(text: &str) -> Vec<String> {
    validate(text).into_iter().map(|d| d.message).collect()
}

fn is_bracket(d: &Diagnostic) -> bool {
    matches!(
        d.code,
        DiagnosticCode::UnexpectedClosingBracket
            | DiagnosticCode::MismatchedBrackets
            | DiagnosticCode::UnclosedBracket
    )
}

fn is_block(d: &Diagnostic) -> bool {
    matches!(
        d.code,
        DiagnosticCode::UnexpectedEnd | DiagnosticCode::UnmatchedUntil | DiagnosticCode::UnclosedBlock
    )
}

#[test]
fn test_matched_brackets_are_clean() {
    for text in ["(foo)", "[1]", "{a = {b}}", "f(x[1], {y})", "(\n[\n{\n}\n]\n)"] {
        assert!(
            validate(text).iter().all(|d| !is_bracket(d)),
            "unexpected bracket diagnostic for {text:?}"
        );
    }
}

#[test]
fn test_unclosed_bracket_at_opener() {
    let diagnostics = validate("(foo");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "Unclosed '('");
    assert_eq!(diagnostics[0].severity, DiagnosticSeverity::Error);
    assert_eq!(diagnostics[0].range, DiagnosticRange::on_line(0, 0, 1));
}

#[test]
fn test_unexpected_closing_bracket() {
    let diagnostics = validate(")");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "Unexpected closing ')'");
    assert_eq!(diagnostics[0].range, DiagnosticRange::on_line(0, 0, 1));
}

#[test]
fn test_mismatched_pair() {
    let diagnostics = validate("(]");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "Mismatched brackets: expected ')' but found ']'"
    );
    assert_eq!(diagnostics[0].range, DiagnosticRange::on_line(0, 1, 2));
}

#[test]
fn test_comment_and_string_contents_are_ignored() {
    assert!(validate("-- ( [ { end").is_empty());
    assert!(validate("x = \"( [ {\"").is_empty());
    assert!(validate("x = '}' -- )").is_empty());
}

#[test]
fn test_function_end_is_clean() {
    assert!(validate("function f()\nend").iter().all(|d| !is_block(d)));
    assert!(validate("function f()\nend").is_empty());
}

#[test]
fn test_until_must_stand_alone() {
    assert_eq!(
        messages("repeat\nuntil true"),
        vec!["Unclosed 'repeat' block - missing 'until'".to_string()]
    );
    assert!(validate("repeat\nuntil").is_empty());
}

#[test]
fn test_if_with_and_without_then() {
    assert!(validate("if x > 0 then\nend").is_empty());

    let diagnostics = validate("if x > 0\nend");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "Missing 'then' after 'if' statement");
    assert_eq!(diagnostics[0].severity, DiagnosticSeverity::Warning);
    assert_eq!(diagnostics[0].range, DiagnosticRange::on_line(0, 0, 8));
    assert!(diagnostics.iter().all(|d| !is_block(d)));
}

#[test]
fn test_stray_closers() {
    assert_eq!(
        messages("x = 1\nend"),
        vec!["Unexpected 'end' - no matching block statement".to_string()]
    );
    assert_eq!(
        messages("until"),
        vec!["'until' without matching 'repeat'".to_string()]
    );
}

#[test]
fn test_until_does_not_close_other_blocks() {
    let diagnostics = validate("while x do\nuntil");
    let codes: Vec<DiagnosticCode> = diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![
            DiagnosticCode::UnmatchedUntil,
            DiagnosticCode::UnclosedBlock,
            DiagnosticCode::UnclosedBlock,
        ]
    );
}

#[test]
fn test_for_do_opens_two_blocks() {
    // Both `for` and `do` push a frame; a single `end` only closes one.
    assert_eq!(
        messages("for i = 1, 3 do\nend"),
        vec!["Unclosed 'for' block - missing 'end'".to_string()]
    );
    assert!(validate("for i = 1, 3 do\nend\nend").is_empty());
}

#[test]
fn test_whole_line_spans_use_untrimmed_length() {
    let diagnostics = validate("  while x  ");
    assert_eq!(diagnostics[0].code, DiagnosticCode::MissingDo);
    assert_eq!(diagnostics[0].range, DiagnosticRange::on_line(0, 0, 11));
}

#[test]
fn test_keyword_next_to_non_ascii_letter() {
    let diagnostics = validate("print('àdo')");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "Unclosed 'do' block - missing 'end'");
    assert_eq!(diagnostics[0].range, DiagnosticRange::on_line(0, 0, 10));
}

#[test]
fn test_parameter_list_range_starts_at_paren_in_indented_line() {
    let diagnostics = validate("    local function f(a, b");
    let codes: Vec<DiagnosticCode> = diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![
            DiagnosticCode::UnclosedParameterList,
            DiagnosticCode::UnclosedBracket,
            DiagnosticCode::UnclosedBlock,
        ]
    );
    assert_eq!(diagnostics[0].range, DiagnosticRange::on_line(0, 20, 25));
    assert_eq!(diagnostics[1].range, DiagnosticRange::on_line(0, 20, 21));
}

#[test]
fn test_strings_do_not_span_lines() {
    // The opening quote on line 0 is forgotten at the end of the line.
    assert_eq!(messages("s = \"abc\nx = (1"), vec!["Unclosed '('".to_string()]);
}

#[test]
fn test_crlf_lines_are_trimmed_for_block_checks() {
    assert!(validate("function f()\r\nend\r\n").is_empty());
}

#[test]
fn test_sample_document() {
    let diagnostics = validate(SAMPLE_DOCUMENT);
    let summary: Vec<(DiagnosticCode, usize, String)> = diagnostics
        .iter()
        .map(|d| (d.code, d.range.from.line, d.message.clone()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (
                DiagnosticCode::UnclosedParameterList,
                12,
                "Unclosed function parameter list".to_string()
            ),
            (
                DiagnosticCode::UnclosedBlock,
                19,
                "Unclosed 'for' block - missing 'end'".to_string()
            ),
            (
                DiagnosticCode::UnclosedBlock,
                24,
                "Unclosed 'function' block - missing 'end'".to_string()
            ),
            (
                DiagnosticCode::UnclosedBlock,
                25,
                "Unclosed 'for' block - missing 'end'".to_string()
            ),
        ]
    );
    assert_eq!(diagnostics[0].range, DiagnosticRange::on_line(12, 27, 28));
}

#[test]
fn test_validation_is_deterministic() {
    let text = "function f(a\n  if a then\n    return {a]\n  end\nuntil\n";
    let first = validate(text);
    let second = validate(text);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
