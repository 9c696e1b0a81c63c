//! Line-granular document storage.
//!
//! [`LineBuffer`] owns the document as an ordered sequence of [`Line`]s.
//! A line is a sequence of Unicode code points; a newline is a structural
//! separator between lines, never stored content. The buffer always
//! contains at least one line — an empty document is a single empty line —
//! and every boundary check in this crate relies on that.
//!
//! All edit primitives are defined only for `row < line_count()`. Callers
//! (the command processor) clamp the cursor before dispatching, so an
//! out-of-range row is a contract violation, not a runtime error path.

use std::fmt;

use unicode_width::UnicodeWidthChar;

/// Width of a soft tab: four literal spaces inserted and deleted as a unit.
pub const SOFT_TAB_WIDTH: usize = 4;

/// One row of the document: an ordered sequence of code points with no
/// stored terminator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Line {
    chars: Vec<char>,
}

impl Line {
    /// Create an empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Length in code points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the line has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The line content as a slice of code points.
    #[must_use]
    pub fn code_points(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &ch in &self.chars {
            fmt::Write::write_char(f, ch)?;
        }
        Ok(())
    }
}

/// The document: an ordered, mutable sequence of lines plus a dirty flag.
///
/// Every content mutation sets the dirty flag; the command processor clears
/// it after a successful save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<Line>,
    dirty: bool,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Create an empty document (one empty line).
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()],
            dirty: false,
        }
    }

    /// Build a document from text, splitting on `'\n'`.
    ///
    /// A single trailing newline is not an extra empty line; empty input is
    /// the empty document.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let text = text.strip_suffix('\n').unwrap_or(text);
        Self {
            lines: text.split('\n').map(Line::from).collect(),
            dirty: false,
        }
    }

    /// Build a document from pre-split lines. An empty sequence becomes the
    /// empty document.
    #[must_use]
    pub fn from_lines(lines: Vec<Line>) -> Self {
        if lines.is_empty() {
            return Self::new();
        }
        Self {
            lines,
            dirty: false,
        }
    }

    /// Number of lines; always at least 1.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The line at `row`.
    #[must_use]
    pub fn line(&self, row: usize) -> &Line {
        &self.lines[row]
    }

    /// All lines, in visual order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Length of the line at `row`, in code points.
    #[must_use]
    pub fn line_len(&self, row: usize) -> usize {
        self.lines[row].len()
    }

    /// The whole document as newline-joined text.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for (row, line) in self.lines.iter().enumerate() {
            if row > 0 {
                text.push('\n');
            }
            for &ch in line.code_points() {
                text.push(ch);
            }
        }
        text
    }

    /// Whether the content has been mutated since the last save.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the content as saved.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Insert `ch` at `col` in the line at `row`. Requires
    /// `col <= line_len(row)`; the caller is responsible for advancing the
    /// cursor column.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) {
        debug_assert!(row < self.lines.len(), "insert_char: row {row} out of range");
        debug_assert!(col <= self.lines[row].len(), "insert_char: col {col} out of range");
        self.lines[row].chars.insert(col, ch);
        self.dirty = true;
    }

    /// Delete the code point before `(row, col)` and report the new cursor
    /// position.
    ///
    /// At column 0 this joins the line onto the end of the previous one and
    /// removes it; the reported position is the old end of the previous
    /// line. At the very start of the document it is a no-op.
    pub fn delete_char_before(&mut self, row: usize, col: usize) -> (usize, usize) {
        debug_assert!(row < self.lines.len(), "delete_char_before: row {row} out of range");
        if col > 0 {
            self.lines[row].chars.remove(col - 1);
            self.dirty = true;
            (row, col - 1)
        } else if row > 0 {
            let tail = self.lines.remove(row);
            let join_col = self.lines[row - 1].len();
            self.lines[row - 1].chars.extend(tail.chars);
            self.dirty = true;
            (row - 1, join_col)
        } else {
            (0, 0)
        }
    }

    /// Forward delete: remove the code point at `(row, col)`.
    ///
    /// At the end of a line this joins the next line up; at the end of the
    /// document it is a no-op. The cursor does not move.
    pub fn delete_char_at(&mut self, row: usize, col: usize) {
        debug_assert!(row < self.lines.len(), "delete_char_at: row {row} out of range");
        if col < self.lines[row].len() {
            self.lines[row].chars.remove(col);
            self.dirty = true;
        } else if row + 1 < self.lines.len() {
            let next = self.lines.remove(row + 1);
            self.lines[row].chars.extend(next.chars);
            self.dirty = true;
        }
    }

    /// Split the line at `(row, col)`: truncate it to `[0, col)` and insert
    /// the remainder as a new line below. Reports the new cursor position
    /// `(row + 1, 0)`.
    pub fn split_line(&mut self, row: usize, col: usize) -> (usize, usize) {
        debug_assert!(row < self.lines.len(), "split_line: row {row} out of range");
        debug_assert!(col <= self.lines[row].len(), "split_line: col {col} out of range");
        let tail = self.lines[row].chars.split_off(col);
        self.lines.insert(row + 1, Line { chars: tail });
        self.dirty = true;
        (row + 1, 0)
    }

    /// Insert a soft tab ([`SOFT_TAB_WIDTH`] spaces) at `(row, col)`. The
    /// caller advances the cursor by the same width.
    pub fn insert_soft_tab(&mut self, row: usize, col: usize) {
        for _ in 0..SOFT_TAB_WIDTH {
            self.insert_char(row, col, ' ');
        }
    }

    /// Whether a backspace at `(row, col)` should delete a whole soft tab:
    /// the column is a soft-tab boundary and the preceding
    /// [`SOFT_TAB_WIDTH`] code points are all spaces.
    ///
    /// A policy check, not a mutation.
    #[must_use]
    pub fn smart_backspace_boundary(&self, row: usize, col: usize) -> bool {
        debug_assert!(row < self.lines.len(), "smart_backspace_boundary: row {row} out of range");
        debug_assert!(col <= self.lines[row].len(), "smart_backspace_boundary: col {col} out of range");
        col >= SOFT_TAB_WIDTH
            && col % SOFT_TAB_WIDTH == 0
            && self.lines[row].chars[col - SOFT_TAB_WIDTH..col]
                .iter()
                .all(|&ch| ch == ' ')
    }

    /// Terminal-cell column of the code-point column `col` in the line at
    /// `row`. Wide glyphs (CJK) occupy two cells; the rendering collaborator
    /// uses this to place the hardware cursor.
    #[must_use]
    pub fn display_width(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.lines.len(), "display_width: row {row} out of range");
        debug_assert!(col <= self.lines[row].len(), "display_width: col {col} out of range");
        self.lines[row].chars[..col]
            .iter()
            .map(|&ch| UnicodeWidthChar::width(ch).unwrap_or(0))
            .sum()
    }
}
