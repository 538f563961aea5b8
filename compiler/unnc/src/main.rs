//! unn lexer CLI
//!
//! Reads a source file, lexes it, and prints the token stream.

mod cli;
mod commands;
mod error;
mod tracing_setup;

use std::process::ExitCode;

use cli::Command;
use error::CliError;

fn main() -> ExitCode {
    tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            if matches!(err, CliError::Usage(_)) {
                eprintln!();
                eprint!("{}", cli::USAGE);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<ExitCode, CliError> {
    match cli::parse_args(args)? {
        Command::Help => {
            print!("{}", cli::USAGE);
            Ok(ExitCode::SUCCESS)
        }
        Command::Version => {
            println!("unnc {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        Command::Lex(lex_args) => commands::lex_file(&lex_args),
    }
}
