//! `linecore` — the editing core of a line-oriented terminal text editor.
//!
//! The crate maintains an editable document as an ordered collection of
//! lines, a cursor clamped to it, a forward search with wraparound
//! find-next, and a scrolling viewport. Terminal rendering and raw input
//! capture live outside: the input side feeds abstract [`Command`]s in,
//! the rendering side reads the projections back out.
//!
//! One command is fully processed per step — buffer mutation, cursor
//! clamp, search update, viewport scroll, status message — before the
//! next is accepted. The aggregate is single-threaded and single-writer
//! by construction.
//!
//! # Examples
//!
//! ```
//! use linecore::storage::MemoryStore;
//! use linecore::{Command, Editor, LineBuffer};
//!
//! let mut editor = Editor::new("scratch", LineBuffer::from_text("hello\nworld"), 24);
//! let mut store = MemoryStore::new();
//!
//! editor.apply(Command::MoveRight, &mut store);
//! editor.apply(Command::InsertChar('!'), &mut store);
//! assert_eq!(editor.buffer().to_text(), "h!ello\nworld");
//!
//! editor.apply(Command::Search("world".into()), &mut store);
//! assert_eq!(editor.cursor().row, 1);
//! ```

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod buffer;
pub mod cursor;
pub mod editor;
pub mod error;
pub mod event;
pub mod search;
pub mod storage;
pub mod viewport;

// Re-export core types at crate root
pub use buffer::{Line, LineBuffer, SOFT_TAB_WIDTH};
pub use cursor::Cursor;
pub use editor::{Command, Editor, Step};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_log, set_log_callback};
pub use search::{FindOutcome, MatchSpan, SearchState};
pub use storage::{DocumentStore, FileStore, MemoryStore};
pub use viewport::Viewport;
