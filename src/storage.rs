//! Document persistence.
//!
//! The I/O boundary contract is thin by design: lines are newline-joined
//! on the way out and split on line boundaries on the way in, with no
//! further EOL policy. A missing file on load is the empty document, not
//! an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::buffer::{Line, LineBuffer};
use crate::error::Result;
use crate::event::{LogLevel, emit_log};

/// The save seam the command processor delegates to.
pub trait DocumentStore {
    /// Persist the document lines.
    fn save(&mut self, lines: &[Line]) -> Result<()>;
}

/// Newline-joined file storage.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the given path. Nothing is touched until
    /// [`load`](Self::load) or [`save`](DocumentStore::save).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document. A missing file yields the empty document; any
    /// other I/O failure is an error.
    pub fn load(&self) -> Result<LineBuffer> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(LineBuffer::from_text(&text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                emit_log(
                    LogLevel::Debug,
                    "file not found, starting with an empty document",
                );
                Ok(LineBuffer::new())
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl DocumentStore for FileStore {
    fn save(&mut self, lines: &[Line]) -> Result<()> {
        fs::write(&self.path, join_lines(lines))?;
        Ok(())
    }
}

/// In-memory store for scratch buffers and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    saved: Option<String>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently saved text, if any.
    #[must_use]
    pub fn saved(&self) -> Option<&str> {
        self.saved.as_deref()
    }
}

impl DocumentStore for MemoryStore {
    fn save(&mut self, lines: &[Line]) -> Result<()> {
        self.saved = Some(join_lines(lines));
        Ok(())
    }
}

fn join_lines(lines: &[Line]) -> String {
    let mut text = String::new();
    for (row, line) in lines.iter().enumerate() {
        if row > 0 {
            text.push('\n');
        }
        for &ch in line.code_points() {
            text.push(ch);
        }
    }
    text
}
