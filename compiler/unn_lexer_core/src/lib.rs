//! Low-level scanning primitives for the unn toy language.
//!
//! Provides the byte [`Cursor`] the scanner drives and the fixed
//! character classes of the language. Nothing here allocates or knows
//! about tokens; the `unn_lexer` crate builds on top of it.

pub mod char_class;
mod cursor;

pub use cursor::{Cursor, EOF};
