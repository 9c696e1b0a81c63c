//! Cursor position and clamping.

use crate::buffer::LineBuffer;

/// A `(row, col)` position logically bound to a [`LineBuffer`].
///
/// Invariant after [`clamp`](Self::clamp): `row < line_count()` and
/// `col <= line_len(row)`. The column may legally equal the line length
/// (the end-of-line position). Vertical moves reclamp the column against
/// the destination line independently each time; no desired column is
/// remembered across moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based line index.
    pub row: usize,
    /// Zero-based code-point column, up to and including the line length.
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at `(row, col)`.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Pull the cursor back into the buffer's bounds: row first, then the
    /// column against the (possibly different) target line.
    pub fn clamp(&mut self, buffer: &LineBuffer) {
        self.row = self.row.min(buffer.line_count() - 1);
        self.col = self.col.min(buffer.line_len(self.row));
    }

    /// Move one row up, reclamping the column to the new line.
    pub fn move_up(&mut self, buffer: &LineBuffer) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(buffer.line_len(self.row));
        }
    }

    /// Move one row down, reclamping the column to the new line.
    pub fn move_down(&mut self, buffer: &LineBuffer) {
        if self.row + 1 < buffer.line_count() {
            self.row += 1;
            self.col = self.col.min(buffer.line_len(self.row));
        }
    }

    /// Move one column left. Never crosses a line boundary.
    pub fn move_left(&mut self) {
        self.col = self.col.saturating_sub(1);
    }

    /// Move one column right, up to the end-of-line position. Never crosses
    /// a line boundary.
    pub fn move_right(&mut self, buffer: &LineBuffer) {
        if self.col < buffer.line_len(self.row) {
            self.col += 1;
        }
    }
}
