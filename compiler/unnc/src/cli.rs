//! Argument parsing for the `unnc` binary.

use std::path::PathBuf;

use crate::error::CliError;

/// File lexed when `unnc lex` is given no path.
pub const DEFAULT_SOURCE: &str = "test.unn";

pub const USAGE: &str = "\
Usage: unnc <command> [options]

Commands:
  lex [FILE]       Lex FILE (default: test.unn) and print its tokens
  help             Show this message
  version          Show the version

Options for lex:
  --format=<fmt>   Token output: trace (default) or compact
  --no-notes       Do not report identifiers that are not keywords
  --deny-warnings  Exit with status 1 if any warning was reported
";

/// How tokens are printed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// `Token Value: ...` / `Type: ...`, two lines per token.
    #[default]
    Trace,
    /// One line per token: span, kind, quoted lexeme.
    Compact,
}

impl OutputFormat {
    fn parse(value: &str) -> Result<Self, CliError> {
        match value {
            "trace" => Ok(OutputFormat::Trace),
            "compact" => Ok(OutputFormat::Compact),
            other => Err(CliError::Usage(format!(
                "unknown format '{other}' (expected 'trace' or 'compact')"
            ))),
        }
    }
}

/// Options of the `lex` command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexArgs {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub notes: bool,
    pub deny_warnings: bool,
}

impl Default for LexArgs {
    fn default() -> Self {
        LexArgs {
            path: PathBuf::from(DEFAULT_SOURCE),
            format: OutputFormat::default(),
            notes: true,
            deny_warnings: false,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Lex(LexArgs),
    Help,
    Version,
}

/// Parse the arguments following the program name.
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let Some(command) = args.first() else {
        return Err(CliError::Usage("missing command".to_string()));
    };

    match command.as_str() {
        "lex" => parse_lex_args(&args[1..]).map(Command::Lex),
        "help" | "--help" | "-h" => Ok(Command::Help),
        "version" | "--version" | "-V" => Ok(Command::Version),
        other => Err(CliError::Usage(format!("unknown command '{other}'"))),
    }
}

fn parse_lex_args(args: &[String]) -> Result<LexArgs, CliError> {
    let mut lex_args = LexArgs::default();
    let mut path = None;

    for arg in args {
        if let Some(format) = arg.strip_prefix("--format=") {
            lex_args.format = OutputFormat::parse(format)?;
        } else if arg == "--no-notes" {
            lex_args.notes = false;
        } else if arg == "--deny-warnings" {
            lex_args.deny_warnings = true;
        } else if arg.starts_with('-') {
            return Err(CliError::Usage(format!("unknown option '{arg}'")));
        } else if path.is_none() {
            path = Some(PathBuf::from(arg));
        } else {
            return Err(CliError::Usage(format!("unexpected argument '{arg}'")));
        }
    }

    if let Some(path) = path {
        lex_args.path = path;
    }
    Ok(lex_args)
}
