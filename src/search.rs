//! Forward substring search and find-next with wraparound.
//!
//! Matching is case-sensitive over code points; no regular expressions.
//! A fresh search always scans the whole document from row 0. Find-next
//! advances from one column past the active match, and on reaching the end
//! of the document wraps to row 0, bounded on the final row so the active
//! match can never be re-reported.

use crate::buffer::LineBuffer;

/// Highlight span for the active match: a read-only projection for
/// rendering, never buffer state. `end_col` is exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchSpan {
    pub row: usize,
    pub start_col: usize,
    pub end_col: usize,
}

/// Outcome of one find-next step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FindOutcome {
    /// The next occurrence, found without wrapping.
    Found { row: usize, col: usize },
    /// An occurrence found after wrapping past the end of the document.
    Wrapped { row: usize, col: usize },
    /// No other occurrence exists anywhere; the active match is retained.
    Exhausted,
    /// There is no active search to advance.
    Inactive,
}

/// The query and the most recent match location (the find-next anchor).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    query: Vec<char>,
    last_match: Option<(usize, usize)>,
}

impl SearchState {
    /// Create an inactive search state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a match is active (a search succeeded and has not been
    /// reset since).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last_match.is_some()
    }

    /// The current query string.
    #[must_use]
    pub fn query(&self) -> String {
        self.query.iter().collect()
    }

    /// The active match position, if any.
    #[must_use]
    pub fn last_match(&self) -> Option<(usize, usize)> {
        self.last_match
    }

    /// The active match as a highlight span.
    #[must_use]
    pub fn match_span(&self) -> Option<MatchSpan> {
        self.last_match.map(|(row, col)| MatchSpan {
            row,
            start_col: col,
            end_col: col + self.query.len(),
        })
    }

    /// Drop the query and active match. Called whenever a non-search
    /// command is dispatched, so stale highlights disappear.
    pub fn reset(&mut self) {
        self.query.clear();
        self.last_match = None;
    }

    /// Scan the whole document from row 0 for the first occurrence of
    /// `query`. On a hit the state becomes active and the position is
    /// returned; on a miss the state stays inactive.
    pub fn search(&mut self, buffer: &LineBuffer, query: &str) -> Option<(usize, usize)> {
        self.query = query.chars().collect();
        self.last_match = None;
        if self.query.is_empty() {
            return None;
        }
        for row in 0..buffer.line_count() {
            let line = buffer.line(row).code_points();
            if let Some(col) = find_in_line(line, &self.query, 0, line.len()) {
                self.last_match = Some((row, col));
                return Some((row, col));
            }
        }
        None
    }

    /// Advance to the next occurrence of the active query.
    ///
    /// Scans forward from one column past the active match to the end of
    /// the document, then wraps from row 0 back through the match row. On
    /// the final wrapped row only a match starting strictly before the
    /// active match column is accepted, so a lone occurrence reports
    /// [`FindOutcome::Exhausted`] rather than finding itself.
    pub fn find_next(&mut self, buffer: &LineBuffer) -> FindOutcome {
        let Some((match_row, match_col)) = self.last_match else {
            return FindOutcome::Inactive;
        };
        if self.query.is_empty() {
            return FindOutcome::Inactive;
        }

        for row in match_row..buffer.line_count() {
            let from = if row == match_row { match_col + 1 } else { 0 };
            let line = buffer.line(row).code_points();
            if let Some(col) = find_in_line(line, &self.query, from, line.len()) {
                self.last_match = Some((row, col));
                return FindOutcome::Found { row, col };
            }
        }

        for row in 0..=match_row {
            let line = buffer.line(row).code_points();
            let start_limit = if row == match_row { match_col } else { line.len() };
            if let Some(col) = find_in_line(line, &self.query, 0, start_limit) {
                self.last_match = Some((row, col));
                return FindOutcome::Wrapped { row, col };
            }
        }

        FindOutcome::Exhausted
    }
}

/// First occurrence of `query` in `line` whose start column lies in
/// `from..start_limit`.
fn find_in_line(line: &[char], query: &[char], from: usize, start_limit: usize) -> Option<usize> {
    if query.is_empty() || line.len() < query.len() {
        return None;
    }
    let last_start = line.len() - query.len();
    let upper = start_limit.min(last_start + 1);
    (from..upper).find(|&col| line[col..col + query.len()] == *query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_finds_first_occurrence() {
        let buffer = LineBuffer::from_text("abc\nxfoox\nfoo");
        let mut state = SearchState::new();
        assert_eq!(state.search(&buffer, "foo"), Some((1, 1)));
        assert!(state.is_active());
        assert_eq!(state.query(), "foo");
    }

    #[test]
    fn test_search_miss_stays_inactive() {
        let buffer = LineBuffer::from_text("abc\ndef");
        let mut state = SearchState::new();
        assert_eq!(state.search(&buffer, "zzz"), None);
        assert!(!state.is_active());
    }

    #[test]
    fn test_search_empty_query_is_a_miss() {
        let buffer = LineBuffer::from_text("abc");
        let mut state = SearchState::new();
        assert_eq!(state.search(&buffer, ""), None);
        assert!(!state.is_active());
    }

    #[test]
    fn test_find_next_same_row_then_wrap() {
        // "foo bar foo" hits 0, then 8, then wraps back to 0
        let buffer = LineBuffer::from_text("foo bar foo");
        let mut state = SearchState::new();
        assert_eq!(state.search(&buffer, "foo"), Some((0, 0)));
        assert_eq!(state.find_next(&buffer), FindOutcome::Found { row: 0, col: 8 });
        assert_eq!(state.find_next(&buffer), FindOutcome::Wrapped { row: 0, col: 0 });
    }

    #[test]
    fn test_find_next_across_rows() {
        let buffer = LineBuffer::from_text("foo\nbar\nfoo");
        let mut state = SearchState::new();
        state.search(&buffer, "foo");
        assert_eq!(state.find_next(&buffer), FindOutcome::Found { row: 2, col: 0 });
        assert_eq!(state.find_next(&buffer), FindOutcome::Wrapped { row: 0, col: 0 });
    }

    #[test]
    fn test_find_next_single_occurrence_exhausts() {
        let buffer = LineBuffer::from_text("x\nfoo\ny");
        let mut state = SearchState::new();
        state.search(&buffer, "foo");
        assert_eq!(state.find_next(&buffer), FindOutcome::Exhausted);
        // the anchor survives so the highlight stays put
        assert_eq!(state.last_match(), Some((1, 0)));
    }

    #[test]
    fn test_find_next_without_active_search() {
        let buffer = LineBuffer::from_text("foo");
        let mut state = SearchState::new();
        assert_eq!(state.find_next(&buffer), FindOutcome::Inactive);
    }

    #[test]
    fn test_find_next_overlapping_matches() {
        let buffer = LineBuffer::from_text("aaa");
        let mut state = SearchState::new();
        assert_eq!(state.search(&buffer, "aa"), Some((0, 0)));
        assert_eq!(state.find_next(&buffer), FindOutcome::Found { row: 0, col: 1 });
        assert_eq!(state.find_next(&buffer), FindOutcome::Wrapped { row: 0, col: 0 });
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let buffer = LineBuffer::from_text("Foo\nfoo");
        let mut state = SearchState::new();
        assert_eq!(state.search(&buffer, "foo"), Some((1, 0)));
    }

    #[test]
    fn test_match_span_covers_query() {
        let buffer = LineBuffer::from_text("say hello");
        let mut state = SearchState::new();
        state.search(&buffer, "hello");
        assert_eq!(
            state.match_span(),
            Some(MatchSpan {
                row: 0,
                start_col: 4,
                end_col: 9,
            })
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let buffer = LineBuffer::from_text("foo");
        let mut state = SearchState::new();
        state.search(&buffer, "foo");
        state.reset();
        assert!(!state.is_active());
        assert_eq!(state.match_span(), None);
        assert_eq!(state.find_next(&buffer), FindOutcome::Inactive);
    }

    #[test]
    fn test_query_longer_than_line() {
        let buffer = LineBuffer::from_text("ab\nabcdef");
        let mut state = SearchState::new();
        assert_eq!(state.search(&buffer, "abcd"), Some((1, 0)));
    }
}
