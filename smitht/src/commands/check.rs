//! Check command implementation.
//!
//! Runs lexer unit tests, either the built-in suite or cases loaded from
//! `.toml` / `.json` files, and prints a report.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use smith_lex::tokenize;
use tracing::{debug, info};

use crate::commands::common::{error_messages, read_source_file, OutputFormat};
use crate::commands::traits::Command;
use crate::error::{Result, SmithtError};
use crate::report::{builtin_unit_tests, render_json, render_text, run_unit_tests, Report, UnitTest};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Case files; the built-in suite when empty.
    pub cases: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// List matching cases too.
    pub show_passing: bool,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

/// A TOML case file: a list of `[[test]]` tables.
#[derive(Debug, Deserialize)]
struct CaseFile {
    #[serde(default, rename = "test")]
    tests: Vec<UnitTest>,
}

impl CheckCommand {
    /// Load the cases, run them and print the report.
    pub fn run(&self) -> Result<Report> {
        let report = self.evaluate()?;
        let rendered = match self.args.format {
            OutputFormat::Text => render_text(&report, self.args.show_passing),
            OutputFormat::Json => render_json(&report)? + "\n",
        };

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;

        verdict(&report)?;
        Ok(report)
    }

    /// Load the cases and run them against the lexer.
    fn evaluate(&self) -> Result<Report> {
        let tests = self.collect_tests()?;
        debug!(command = Self::name(), cases = tests.len(), "running");
        Ok(run_unit_tests(tokenize, &tests))
    }

    /// The built-in suite, or every case from every file in order.
    fn collect_tests(&self) -> Result<Vec<UnitTest>> {
        if self.args.cases.is_empty() {
            info!("no case files given, running the built-in suite");
            return Ok(builtin_unit_tests());
        }

        let mut tests = Vec::new();
        for path in &self.args.cases {
            let loaded = load_cases(path)?;
            debug!(path = %path.display(), cases = loaded.len(), "loaded case file");
            tests.extend(loaded);
        }
        Ok(tests)
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = Report;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Fails when any case in the report mismatched.
fn verdict(report: &Report) -> Result<()> {
    if report.is_success() {
        return Ok(());
    }
    Err(SmithtError::CommandExecution(format!(
        "{} of {} {}",
        report.failed(),
        report.results.len(),
        error_messages::CASES_FAILED
    )))
}

/// Load unit tests from a `.toml` file of `[[test]]` tables or a `.json`
/// array.
pub fn load_cases(path: &Path) -> Result<Vec<UnitTest>> {
    let extension = path.extension().and_then(|ext| ext.to_str());
    match extension {
        Some("toml") => {
            let source = read_source_file(path)?;
            let file: CaseFile = toml::from_str(&source.text)?;
            Ok(file.tests)
        }
        Some("json") => {
            let source = read_source_file(path)?;
            Ok(serde_json::from_str(&source.text)?)
        }
        _ => Err(SmithtError::Validation(format!(
            "{}: {}",
            error_messages::UNKNOWN_CASE_FORMAT,
            path.display()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smith_lex::Token;
    use tempfile::TempDir;

    const TOML_CASES: &str = r#"
[[test]]
name = "symbol"
code = "foo"
expected = [
  { kind = "symbol", value = "foo", span = { begin = { row = 0, col = 0 }, end = { row = 0, col = 3 } } },
]

[[test]]
name = "empty"
code = ""
"#;

    #[test]
    fn test_check_command_name() {
        assert_eq!(CheckCommand::name(), "check");
    }

    #[test]
    fn test_builtin_suite_used_without_files() {
        let command = CheckCommand::new(CheckArgs::default());
        let report = command.evaluate().unwrap();
        assert_eq!(report.results.len(), builtin_unit_tests().len());
        assert!(report.is_success());
        assert!(verdict(&report).is_ok());
    }

    #[test]
    fn test_load_toml_cases() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cases.toml");
        std::fs::write(&path, TOML_CASES).unwrap();

        let tests = load_cases(&path).unwrap();
        assert_eq!(tests.len(), 2);
        assert_eq!(tests[0].expected, tokenize("foo"));
        assert!(tests[1].expected.is_empty());
    }

    #[test]
    fn test_load_json_cases() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cases.json");
        let cases = vec![UnitTest::new("call", "f(x)", tokenize("f(x)"))];
        std::fs::write(&path, serde_json::to_string(&cases).unwrap()).unwrap();

        assert_eq!(load_cases(&path).unwrap(), cases);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = load_cases(Path::new("cases.yaml")).unwrap_err();
        assert!(matches!(err, SmithtError::Validation(_)));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cases.toml");
        std::fs::write(&path, "[[test]]\nname = 1\n").unwrap();

        assert!(matches!(load_cases(&path), Err(SmithtError::Toml(_))));
    }

    #[test]
    fn test_mismatch_fails_command() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cases.json");
        let cases = vec![UnitTest::new(
            "wrong",
            "x",
            vec![Token::int("1", smith_util::Span::DUMMY)],
        )];
        std::fs::write(&path, serde_json::to_string(&cases).unwrap()).unwrap();

        let command = CheckCommand::new(CheckArgs {
            cases: vec![path],
            ..CheckArgs::default()
        });
        let report = command.evaluate().unwrap();
        assert_eq!(report.failed(), 1);

        let err = verdict(&report).unwrap_err();
        assert!(matches!(err, SmithtError::CommandExecution(_)));
        assert!(err.to_string().contains("1 of 1 case(s) failed"));
    }
}
