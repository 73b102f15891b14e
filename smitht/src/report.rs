//! Token test reports.
//!
//! A unit test pairs a piece of source code with the tokens it must lex to.
//! Running a suite is a pure function from a tokenizer and the tests to a
//! [`Report`]; rendering the report is a separate step, so nothing here
//! touches stdout.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use smith_lex::Token;
use smith_util::span::{Pos, Span};
use tracing::{debug, info};

use crate::error::Result;

/// A single lexer test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitTest {
    /// Short description shown in the report
    pub name: String,
    /// Source text to tokenize
    pub code: String,
    /// Tokens `code` must produce, in order
    #[serde(default)]
    pub expected: Vec<Token>,
}

impl UnitTest {
    /// Create a test case.
    pub fn new(name: impl Into<String>, code: impl Into<String>, expected: Vec<Token>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            expected,
        }
    }
}

/// Whether the actual tokens equal the expected ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Same kinds, texts and spans, in the same order
    Match,
    /// Anything else
    Mismatch,
}

/// The result of running one [`UnitTest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseResult {
    /// Name of the test case
    pub name: String,
    /// Source text that was tokenized
    pub code: String,
    /// Tokens the tokenizer produced
    pub actual: Vec<Token>,
    /// Tokens the test case expected
    pub expected: Vec<Token>,
    /// Comparison of the two
    pub outcome: Outcome,
}

/// Results of a whole suite, in test order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// One entry per test case
    pub results: Vec<CaseResult>,
}

impl Report {
    /// Number of matching cases.
    pub fn passed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.outcome == Outcome::Match)
            .count()
    }

    /// Number of mismatching cases.
    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    /// Returns true when every case matched.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Run `tests` through `tokenize` and compare each result with its
/// expectation.
pub fn run_unit_tests(tokenize: impl Fn(&str) -> Vec<Token>, tests: &[UnitTest]) -> Report {
    let results: Vec<CaseResult> = tests
        .iter()
        .map(|test| {
            let actual = tokenize(&test.code);
            let outcome = if actual == test.expected {
                Outcome::Match
            } else {
                Outcome::Mismatch
            };
            debug!(name = %test.name, ?outcome, tokens = actual.len(), "ran test case");
            CaseResult {
                name: test.name.clone(),
                code: test.code.clone(),
                actual,
                expected: test.expected.clone(),
                outcome,
            }
        })
        .collect();

    let report = Report { results };
    info!(
        passed = report.passed(),
        failed = report.failed(),
        "finished {} test case(s)",
        report.results.len()
    );
    report
}

/// Format a token list for display.
///
/// `[]` when empty, `[ token ]` for a single token, otherwise one token per
/// line between brackets.
pub fn format_tokens(tokens: &[Token]) -> String {
    match tokens {
        [] => "[]".to_string(),
        [token] => format!("[ {token} ]"),
        _ => {
            let lines: Vec<String> = tokens.iter().map(|t| format!("  {t}")).collect();
            format!("[\n{}\n]", lines.join(",\n"))
        }
    }
}

/// Render a report as text.
///
/// Mismatching cases always show their code, actual and expected tokens;
/// matching ones only when `show_passing` is set. A summary line ends the
/// output.
pub fn render_text(report: &Report, show_passing: bool) -> String {
    let mut out = String::new();
    for result in &report.results {
        let label = match result.outcome {
            Outcome::Match => "match",
            Outcome::Mismatch => "MISMATCH",
        };
        if result.outcome == Outcome::Match && !show_passing {
            continue;
        }
        let _ = writeln!(out, "{label}: {}", result.name);
        let _ = writeln!(out, "  code:     {:?}", result.code);
        let _ = writeln!(out, "  tokens:   {}", indent_tail(&format_tokens(&result.actual)));
        let _ = writeln!(
            out,
            "  expected: {}",
            indent_tail(&format_tokens(&result.expected))
        );
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "{} passed, {} failed, {} total",
        report.passed(),
        report.failed(),
        report.results.len()
    );
    out
}

/// Render a report as pretty-printed JSON.
pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Indent every line after the first to line up under a field label.
fn indent_tail(text: &str) -> String {
    text.replace('\n', "\n            ")
}

/// The built-in suite: the cases every Smith lexer must pass.
pub fn builtin_unit_tests() -> Vec<UnitTest> {
    fn at(row: u32, col: u32, width: u32) -> Span {
        Span::single_line(Pos::new(row, col), width)
    }

    vec![
        UnitTest::new("empty input", "", vec![]),
        UnitTest::new("symbol", "foo", vec![Token::symbol("foo", at(0, 0, 3))]),
        UnitTest::new("integer", "42", vec![Token::int("42", at(0, 0, 2))]),
        UnitTest::new("float", "3.14", vec![Token::float("3.14", at(0, 0, 4))]),
        UnitTest::new(
            "short call",
            "f(x, y, z)",
            vec![
                Token::symbol("f", at(0, 0, 1)),
                Token::delimiter('(', at(0, 1, 1)),
                Token::symbol("x", at(0, 2, 1)),
                Token::delimiter(',', at(0, 3, 1)),
                Token::symbol("y", at(0, 5, 1)),
                Token::delimiter(',', at(0, 6, 1)),
                Token::symbol("z", at(0, 8, 1)),
                Token::delimiter(')', at(0, 9, 1)),
            ],
        ),
        UnitTest::new(
            "function call",
            "foo(x, y, z)",
            vec![
                Token::symbol("foo", at(0, 0, 3)),
                Token::delimiter('(', at(0, 3, 1)),
                Token::symbol("x", at(0, 4, 1)),
                Token::delimiter(',', at(0, 5, 1)),
                Token::symbol("y", at(0, 7, 1)),
                Token::delimiter(',', at(0, 8, 1)),
                Token::symbol("z", at(0, 10, 1)),
                Token::delimiter(')', at(0, 11, 1)),
            ],
        ),
        UnitTest::new(
            "uniform call syntax",
            "3.max(10)",
            vec![
                Token::int("3", at(0, 0, 1)),
                Token::operator('.', at(0, 1, 1)),
                Token::symbol("max", at(0, 2, 3)),
                Token::delimiter('(', at(0, 5, 1)),
                Token::int("10", at(0, 6, 2)),
                Token::delimiter(')', at(0, 8, 1)),
            ],
        ),
        UnitTest::new(
            "leading dot float",
            ".24",
            vec![Token::float(".24", at(0, 0, 3))],
        ),
        UnitTest::new("lone dot", ".", vec![Token::operator('.', at(0, 0, 1))]),
        UnitTest::new(
            "indentation",
            "[\n  1,\n  2\n]",
            vec![
                Token::delimiter('[', at(0, 0, 1)),
                Token::indent(2, at(1, 0, 2)),
                Token::int("1", at(1, 2, 1)),
                Token::delimiter(',', at(1, 3, 1)),
                Token::indent(2, at(2, 0, 2)),
                Token::int("2", at(2, 2, 1)),
                Token::indent(0, at(3, 0, 0)),
                Token::delimiter(']', at(3, 0, 1)),
            ],
        ),
    ]
}
