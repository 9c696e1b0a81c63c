//! Command dispatch over the editor aggregate.
//!
//! [`Editor`] owns the whole mutable aggregate — buffer, cursor, search
//! state, viewport, status message — and processes one [`Command`] per
//! step: mutate, reclamp the cursor, recompute the viewport, update the
//! status line. Rendering and persistence are external consumers of the
//! read-only projections at the bottom of this file.

use crate::buffer::{Line, LineBuffer, SOFT_TAB_WIDTH};
use crate::cursor::Cursor;
use crate::event::{LogLevel, emit_log};
use crate::search::{FindOutcome, MatchSpan, SearchState};
use crate::storage::DocumentStore;
use crate::viewport::Viewport;

/// One abstract input to the editor, produced by the input collaborator.
///
/// Search-prompt collection is the input collaborator's job: the query
/// arrives already committed inside [`Command::Search`], and a cancelled
/// prompt simply submits no command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// End the session. Nothing is persisted automatically.
    Quit,
    /// Persist the document through the store; the result becomes a
    /// transient status message.
    Save,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Insert one code point at the cursor.
    InsertChar(char),
    /// Delete backward, removing a whole soft tab when the cursor sits on
    /// a soft-tab boundary.
    Backspace,
    /// Delete forward; at the end of a line this pulls the next line up.
    ForwardDelete,
    /// Split the current line at the cursor.
    Enter,
    /// Find-next when a search is active, a soft tab otherwise. The dual
    /// meaning is intentional context sensitivity.
    Tab,
    /// A committed search query; scans the whole document from the top.
    Search(String),
    /// Advance to the next occurrence of the active query, wrapping.
    FindNext,
    /// Visible-height change. Recomputes the viewport, never the buffer.
    Resize(usize),
}

/// What a dispatch step decided about the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// The editor aggregate and its command processor.
pub struct Editor {
    buffer: LineBuffer,
    cursor: Cursor,
    search: SearchState,
    viewport: Viewport,
    status: String,
    file_name: String,
}

impl Editor {
    /// Create an editor over `buffer` with the given visible height.
    /// `file_name` is the display name used in status messages.
    #[must_use]
    pub fn new(file_name: impl Into<String>, buffer: LineBuffer, visible_height: usize) -> Self {
        Self {
            buffer,
            cursor: Cursor::default(),
            search: SearchState::new(),
            viewport: Viewport::new(visible_height),
            status: String::new(),
            file_name: file_name.into(),
        }
    }

    /// Process one command against the aggregate and report whether the
    /// session should continue.
    ///
    /// Every step ends with the cursor reclamped into the buffer and the
    /// viewport scrolled to keep it visible. Any command other than
    /// `Search`/`FindNext`/`Tab` resets the search state so stale
    /// highlights disappear once the user resumes editing or navigating.
    pub fn apply<S: DocumentStore>(&mut self, command: Command, store: &mut S) -> Step {
        if !preserves_search(&command) {
            self.search.reset();
        }
        self.status.clear();

        match command {
            Command::Quit => return Step::Quit,
            Command::Save => self.save(store),
            Command::MoveUp => self.cursor.move_up(&self.buffer),
            Command::MoveDown => self.cursor.move_down(&self.buffer),
            Command::MoveLeft => self.cursor.move_left(),
            Command::MoveRight => self.cursor.move_right(&self.buffer),
            Command::InsertChar(ch) => {
                self.buffer.insert_char(self.cursor.row, self.cursor.col, ch);
                self.cursor.col += 1;
            }
            Command::Backspace => self.backspace(),
            Command::ForwardDelete => {
                self.buffer.delete_char_at(self.cursor.row, self.cursor.col);
            }
            Command::Enter => {
                let (row, col) = self.buffer.split_line(self.cursor.row, self.cursor.col);
                self.cursor = Cursor::new(row, col);
            }
            Command::Tab => self.tab(),
            Command::Search(query) => self.search_document(&query),
            Command::FindNext => self.find_next(),
            Command::Resize(height) => self.viewport.resize(height),
        }

        self.cursor.clamp(&self.buffer);
        self.viewport.scroll_to(self.cursor.row);
        Step::Continue
    }

    fn save<S: DocumentStore>(&mut self, store: &mut S) {
        match store.save(self.buffer.lines()) {
            Ok(()) => {
                self.buffer.clear_dirty();
                self.status = format!("'{}' saved successfully!", self.file_name);
                emit_log(LogLevel::Info, &format!("saved '{}'", self.file_name));
            }
            Err(e) => {
                self.status = format!("Could not save file: {e}");
                emit_log(LogLevel::Warn, &format!("save failed: {e}"));
            }
        }
    }

    fn backspace(&mut self) {
        let Cursor { row, col } = self.cursor;
        let (row, col) = if col > 0 && self.buffer.smart_backspace_boundary(row, col) {
            let mut position = (row, col);
            for _ in 0..SOFT_TAB_WIDTH {
                position = self.buffer.delete_char_before(position.0, position.1);
            }
            position
        } else {
            self.buffer.delete_char_before(row, col)
        };
        self.cursor = Cursor::new(row, col);
    }

    fn tab(&mut self) {
        if self.search.is_active() {
            self.find_next();
        } else {
            self.buffer.insert_soft_tab(self.cursor.row, self.cursor.col);
            self.cursor.col += SOFT_TAB_WIDTH;
        }
    }

    fn search_document(&mut self, query: &str) {
        match self.search.search(&self.buffer, query) {
            Some((row, col)) => self.cursor = Cursor::new(row, col),
            None => self.status = format!("Search: '{query}' not found"),
        }
    }

    fn find_next(&mut self) {
        match self.search.find_next(&self.buffer) {
            FindOutcome::Found { row, col } => self.cursor = Cursor::new(row, col),
            FindOutcome::Wrapped { row, col } => {
                self.cursor = Cursor::new(row, col);
                self.status = format!("Search wrapped to top: '{}'", self.search.query());
                emit_log(LogLevel::Debug, "find-next wrapped to top");
            }
            FindOutcome::Exhausted => {
                self.status = format!("No further occurrences of '{}'", self.search.query());
            }
            FindOutcome::Inactive => {}
        }
    }

    // ------------------------------------------------------------------
    // Read-only projections for the rendering collaborator.
    // ------------------------------------------------------------------

    /// The document.
    #[must_use]
    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    /// The cursor position in document coordinates.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The scroll state.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The lines currently inside the viewport, in visual order.
    #[must_use]
    pub fn visible_lines(&self) -> &[Line] {
        &self.buffer.lines()[self.viewport.visible_range(self.buffer.line_count())]
    }

    /// Cursor position in screen coordinates:
    /// `(row - row_offset, col)`.
    #[must_use]
    pub fn cursor_screen_position(&self) -> (usize, usize) {
        (
            self.cursor.row.saturating_sub(self.viewport.row_offset()),
            self.cursor.col,
        )
    }

    /// The current transient status message; empty when there is none.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Display name of the document, for the status bar.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Whether the document has unsaved changes.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.buffer.is_dirty()
    }

    /// One-based `row:col` indicator for the status bar.
    #[must_use]
    pub fn position_indicator(&self) -> String {
        format!("{}:{}", self.cursor.row + 1, self.cursor.col + 1)
    }

    /// The active-match span for highlighting, if a search is active.
    #[must_use]
    pub fn match_span(&self) -> Option<MatchSpan> {
        self.search.match_span()
    }
}

fn preserves_search(command: &Command) -> bool {
    matches!(
        command,
        Command::Search(_) | Command::FindNext | Command::Tab
    )
}
