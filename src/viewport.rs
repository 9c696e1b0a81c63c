//! Scroll offset derivation.
//!
//! The viewport is the contiguous range of document rows currently visible:
//! a row offset plus a visible height. It is derived state — recomputed
//! from the cursor after every cursor-affecting command and on resize —
//! and knows nothing about rendering.

use std::ops::Range;

/// Scroll state: invariant after [`scroll_to`](Self::scroll_to) with a
/// non-zero height, `row_offset <= cursor_row <= row_offset + height - 1`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    row_offset: usize,
    height: usize,
}

impl Viewport {
    /// Create a viewport with the given visible height, scrolled to the top.
    #[must_use]
    pub fn new(height: usize) -> Self {
        Self {
            row_offset: 0,
            height,
        }
    }

    /// First visible document row.
    #[must_use]
    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// Number of visible rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Change the visible height. The caller re-runs [`scroll_to`](Self::scroll_to)
    /// afterwards to restore the visibility invariant.
    pub fn resize(&mut self, height: usize) {
        self.height = height;
    }

    /// Scroll the minimal amount needed to keep `cursor_row` visible.
    pub fn scroll_to(&mut self, cursor_row: usize) {
        if self.height == 0 {
            return;
        }
        if cursor_row < self.row_offset {
            self.row_offset = cursor_row;
        }
        if cursor_row >= self.row_offset + self.height {
            self.row_offset = cursor_row - self.height + 1;
        }
    }

    /// The document rows currently visible, clamped to `line_count`.
    #[must_use]
    pub fn visible_range(&self, line_count: usize) -> Range<usize> {
        let start = self.row_offset.min(line_count);
        let end = (self.row_offset + self.height).min(line_count);
        start..end
    }
}
