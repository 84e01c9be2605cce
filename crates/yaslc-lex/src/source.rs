//! Source text acquisition.
//!
//! The scanner itself only sees a `&str` through a [`Cursor`]; this module
//! owns getting that text into memory. A [`SourceFile`] can be acquired from
//! a path, from any [`Read`] implementor, or directly from a string (handy
//! in tests). Read failures surface as typed [`SourceError`] values rather
//! than being masked. The buffer is released when the `SourceFile` is
//! dropped, on every exit path.
//!
//! [`Cursor`]: crate::cursor::Cursor

use crate::error::SourceError;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Owned source text plus the name it was acquired under.
#[derive(Debug, Clone)]
pub struct SourceFile {
    name: String,
    text: String,
}

impl SourceFile {
    /// Wraps already-available text under a display name.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Reads the file at `path` into memory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            name: path.display().to_string(),
            text,
        })
    }

    /// Drains `reader` to end-of-stream into memory.
    pub fn from_reader(name: impl Into<String>, mut reader: impl Read) -> Result<Self, SourceError> {
        let name = name.into();
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| SourceError::Read {
                path: PathBuf::from(&name),
                source,
            })?;
        Ok(Self { name, text })
    }

    /// The name the source was acquired under (a path for files).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full source text.
    pub fn text(&self) -> &str {
        &self.text
    }
}
