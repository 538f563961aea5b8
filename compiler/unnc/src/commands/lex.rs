//! The `lex` command: lex a file and print its token stream.

use std::io::{self, Write};
use std::process::ExitCode;

use unn_lexer::{lex_with_options, LexDiagnostic, LexOptions, Token};

use super::read_source;
use crate::cli::{LexArgs, OutputFormat};
use crate::error::CliError;

/// Lex a file, printing tokens to stdout and diagnostics to stderr.
///
/// Diagnostics only affect the exit status under `--deny-warnings`.
pub fn lex_file(args: &LexArgs) -> Result<ExitCode, CliError> {
    let source = read_source(&args.path)?;
    tracing::debug!(path = %args.path.display(), bytes = source.len(), "lexing file");

    let options = LexOptions {
        report_unknown_keywords: args.notes,
    };
    let output = lex_with_options(&source, options);

    write_tokens(&mut io::stdout().lock(), output.tokens.iter(), args.format)?;
    write_diagnostics(&mut io::stderr().lock(), &output.diagnostics)?;

    if args.deny_warnings && output.has_warnings() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn write_tokens<'a>(
    out: &mut impl Write,
    tokens: impl Iterator<Item = &'a Token>,
    format: OutputFormat,
) -> io::Result<()> {
    for token in tokens {
        match format {
            OutputFormat::Trace => writeln!(out, "{token}")?,
            OutputFormat::Compact => writeln!(
                out,
                "{:<10} {:<10} {:?}",
                token.span.to_string(),
                token.kind,
                token.lexeme
            )?,
        }
    }
    out.flush()
}

fn write_diagnostics(out: &mut impl Write, diagnostics: &[LexDiagnostic]) -> io::Result<()> {
    for diagnostic in diagnostics {
        writeln!(out, "{diagnostic}")?;
    }
    out.flush()
}
