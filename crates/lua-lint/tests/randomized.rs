//! Randomized checks
//!
//! 1. Totality: arbitrary documents built from Lua-ish fragments always validate, and every
//!    diagnostic range lies inside the document's line structure.
//! 2. Determinism: validating the same text twice yields identical sequences.
//! 3. Balanced bracket nests produce no bracket diagnostics.

use lua_lint::{DiagnosticCode, validate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const FRAGMENTS: &[&str] = &[
    "function", "f(", ")", "(", "[", "]", "{", "}", "end", "until", "repeat", "if ", "then",
    "for ", "while ", "do", "\"", "'", "\\", "--", " ", "\n", "\n", "x", "= ", "é", "👋", "\r",
];

fn random_document(rng: &mut StdRng, fragments: usize) -> String {
    (0..fragments)
        .map(|_| *FRAGMENTS.choose(rng).unwrap_or(&" "))
        .collect()
}

#[test]
fn test_random_documents_are_total_and_deterministic() {
    let mut rng = StdRng::seed_from_u64(0x1u64);

    for _ in 0..500 {
        let len = rng.gen_range(0..120);
        let text = random_document(&mut rng, len);

        let first = validate(&text);
        let second = validate(&text);
        assert_eq!(first, second, "non-deterministic output for {text:?}");

        let lines: Vec<&str> = text.split('\n').collect();
        for diagnostic in &first {
            let from = diagnostic.range.from;
            let to = diagnostic.range.to;
            assert!(from.line < lines.len(), "line out of range for {text:?}");
            assert_eq!(from.line, to.line, "multi-line range for {text:?}");
            assert!(from.column <= to.column, "inverted range for {text:?}");
            if diagnostic.code != DiagnosticCode::UnclosedBlock {
                assert!(
                    to.column <= lines[to.line].chars().count(),
                    "range past end of line for {text:?}"
                );
            }
        }
    }
}

fn balanced(rng: &mut StdRng, depth: usize, out: &mut String) {
    let pairs = [('(', ')'), ('[', ']'), ('{', '}')];
    for _ in 0..rng.gen_range(0..4) {
        let (open, close) = pairs[rng.gen_range(0..pairs.len())];
        out.push(open);
        if depth > 0 {
            balanced(rng, depth - 1, out);
        }
        if rng.gen_bool(0.2) {
            out.push('\n');
        }
        out.push(close);
    }
}

#[test]
fn test_balanced_nests_have_no_bracket_diagnostics() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let mut text = String::new();
        balanced(&mut rng, 4, &mut text);
        let diagnostics = validate(&text);
        assert!(diagnostics.is_empty(), "{text:?} -> {diagnostics:?}");
    }
}

#[test]
fn test_large_document_completes() {
    let block = "function f(a, b)\n  if a then\n    return {a, b}\n  end\nend\n";
    let text = block.repeat(5_000);
    assert!(validate(&text).is_empty());
}
