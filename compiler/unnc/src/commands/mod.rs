//! Command handlers for the `unnc` CLI.
//!
//! Shared utilities like `read_source` live here in the module root.

mod lex;

use std::path::Path;

use crate::error::CliError;

pub use lex::lex_file;

/// Read a source file into memory.
///
/// Byte offsets in spans are `u32`, so files past `u32::MAX` bytes are
/// rejected here rather than truncated by the lexer.
pub(crate) fn read_source(path: &Path) -> Result<String, CliError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| CliError::from_read(path.to_path_buf(), e))?;
    if u32::try_from(content.len()).is_err() {
        return Err(CliError::TooLarge {
            path: path.to_path_buf(),
            size: content.len(),
            limit: u32::MAX,
        });
    }
    Ok(content)
}
