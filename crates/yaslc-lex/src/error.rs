//! Error types for the lexer crate.
//!
//! Only unrecoverable failures surface as `Err` values. Recoverable lexical
//! errors (an illegal character, a malformed comment marker) are reported as
//! diagnostics and the scanner keeps producing tokens past them.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A fatal lexical failure.
///
/// Once the scanner returns one of these, no further tokens will be
/// produced; every subsequent call returns the same error.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// A `{` comment was still open when the input ran out. There is no
    /// safe point to resynchronize at, so the whole run is abandoned.
    #[error("unterminated comment opened at {line}:{column}")]
    UnterminatedComment {
        /// Line of the opening `{` (1-based).
        line: u32,
        /// Column of the opening `{` (1-based).
        column: u32,
    },
}

/// Failure to acquire source text from the underlying stream.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading the underlying file or stream failed.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The file (or stream name) that could not be read.
        path: PathBuf,
        /// The originating I/O error, surfaced unmasked.
        source: io::Error,
    },
}
