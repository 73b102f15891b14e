//! Lex command implementation.
//!
//! Tokenizes one source file (or stdin) and prints the tokens. Invalid
//! characters are reported through the log with a source excerpt.

use std::io::Write;
use std::path::PathBuf;

use smith_lex::{diagnose, tokenize, Token};
use smith_util::{Diagnostic, Handler, Level, SourceFile};
use tracing::{debug, error, warn};

use crate::commands::common::{error_messages, read_source, OutputFormat, SourceInput};
use crate::commands::traits::Command;
use crate::error::{Result, SmithtError};

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Source file; stdin when `None` or `-`.
    pub input: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Fail when the source contains invalid characters.
    pub deny_invalid: bool,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
}

impl LexCommand {
    /// Tokenize the input, print the tokens and report invalid characters.
    pub fn run(&self) -> Result<()> {
        let input = read_source(self.args.input.as_deref())?;
        let tokens = tokenize(&input.text);
        debug!(
            command = Self::name(),
            source = %input.name,
            tokens = tokens.len(),
            "tokenized"
        );

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(render_tokens(&tokens, self.args.format)?.as_bytes())?;
        stdout.flush()?;

        self.report_invalid(&input, &tokens)
    }

    /// Log every invalid character with an excerpt; under `deny_invalid`
    /// they are errors and fail the command.
    fn report_invalid(&self, input: &SourceInput, tokens: &[Token]) -> Result<()> {
        let level = if self.args.deny_invalid {
            Level::Error
        } else {
            Level::Warning
        };
        let mut handler = Handler::new();
        handler.extend(diagnose(tokens, level));

        let file = SourceFile::new(input.name.as_str(), input.text.as_str());
        for diagnostic in handler.diagnostics() {
            let rendered = render_diagnostic(&file, diagnostic);
            if diagnostic.level.is_error() {
                error!("{rendered}");
            } else {
                warn!("{rendered}");
            }
        }
        debug!(
            errors = handler.error_count(),
            warnings = handler.warning_count(),
            "reported invalid characters"
        );

        if handler.has_errors() {
            return Err(SmithtError::Validation(format!(
                "{} {} in {}",
                handler.error_count(),
                error_messages::INVALID_CHARACTERS,
                input.name
            )));
        }
        Ok(())
    }
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "lex"
    }
}

/// Render tokens for stdout: one per line as text, or a JSON array.
pub fn render_tokens(tokens: &[Token], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(tokens.iter().map(|t| format!("{t}\n")).collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tokens)? + "\n"),
    }
}

/// Render a diagnostic with the source line it points at.
///
/// ```text
/// warning: unexpected character '#'
///  --> main.smith:1:5
///   |
/// 1 | x = # 1
///   |     ^
/// ```
pub fn render_diagnostic(file: &SourceFile, diagnostic: &Diagnostic) -> String {
    let begin = diagnostic.span.begin;
    let number = (begin.row + 1).to_string();
    let pad = " ".repeat(number.len());

    let mut out = format!(
        "{}: {}\n{pad}--> {}:{}:{}",
        diagnostic.level,
        diagnostic.message,
        file.name(),
        begin.row + 1,
        begin.col + 1
    );

    if let Some(line) = file.line(begin.row as usize) {
        // control characters would break the caret alignment
        let line: String = line
            .chars()
            .map(|c| if c.is_control() { ' ' } else { c })
            .collect();
        let width = if diagnostic.span.is_single_line() {
            diagnostic.span.end.col.saturating_sub(begin.col).max(1)
        } else {
            1
        };
        out.push_str(&format!(
            "\n{pad} |\n{number} | {line}\n{pad} | {}{}",
            " ".repeat(begin.col as usize),
            "^".repeat(width as usize)
        ));
    }

    for note in &diagnostic.notes {
        out.push_str(&format!("\n{pad} = note: {note}"));
    }
    out
}
