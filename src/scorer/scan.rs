//! Backward two-pointer scan.
//!
//! The text is walked right to left one [`Cell`] at a time while the pattern
//! pointer moves right to left on every exact match. Each step consumes the
//! current [`ScanState`] and hands back the next one, so the whole scan is a
//! `try_fold` that breaks out on the match of the first pattern char.

use super::boundary::BoundaryClassifier;
use super::options::{EdgeSegments, ScoreOptions, SeparatorPolicy};
use std::iter::{Peekable, Rev};
use std::ops::ControlFlow;
use std::str::CharIndices;

/// Raw event counts of a completed scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Tally {
    pub copies: usize,
    pub deletes: usize,
    pub boundaries: usize,
    pub straight_runs: Vec<usize>,
}

/// One text position together with its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cell {
    pub index: usize,
    pub byte: usize,
    pub left: Option<char>,
    pub ch: char,
    pub right: Option<char>,
}

/// Yields the cells of a text from its last char to its first.
pub(crate) struct Cells<'a> {
    chars: Peekable<Rev<CharIndices<'a>>>,
    right: Option<char>,
    index: usize,
}

impl<'a> Cells<'a> {
    pub fn new(text: &'a str) -> Self {
        Cells {
            chars: text.char_indices().rev().peekable(),
            right: None,
            index: text.chars().count(),
        }
    }
}

impl Iterator for Cells<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let (byte, ch) = self.chars.next()?;
        self.index -= 1;
        let left = self.chars.peek().map(|&(_, c)| c);
        let cell = Cell {
            index: self.index,
            byte,
            left,
            ch,
            right: self.right,
        };
        self.right = Some(ch);
        Some(cell)
    }
}

/// Char range `[start, end)` of a token both of whose anchors have been seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segment {
    pub start: usize,
    pub end: usize,
}

impl Segment {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScanState {
    /// Index of the pattern char we are looking for.
    pub j: usize,
    /// Pattern char consumed by the last exact match, cleared on a mismatch
    /// so only an immediate repeat can reuse it.
    pub prev: Option<char>,
    /// Length of the current straight run; never spans two tokens.
    pub run: usize,
    pub gap: usize,
    pub pending_end: Option<usize>,
    pub segment: Option<Segment>,
    /// Set once the first exact match has been seen.
    pub matched_any: bool,
    pub tally: Tally,
}

impl ScanState {
    fn new(pattern_len: usize) -> Self {
        ScanState {
            j: pattern_len - 1,
            prev: None,
            run: 0,
            gap: 0,
            pending_end: None,
            segment: None,
            matched_any: false,
            tally: Tally::default(),
        }
    }

    fn close_run(&mut self) {
        if self.run > 0 {
            self.tally.straight_runs.push(self.run);
            self.run = 0;
        }
    }

    fn commit_gap(&mut self) {
        self.tally.deletes += self.gap;
        self.gap = 0;
    }
}

/// A successful scan: the tally and the cell of the first pattern char.
#[derive(Debug)]
pub(crate) struct Matched {
    pub tally: Tally,
    pub cell: Cell,
}

pub(crate) struct Scan<'a> {
    text: &'a str,
    pattern: &'a [char],
    options: &'a ScoreOptions,
    classifier: BoundaryClassifier<'a>,
}

impl<'a> Scan<'a> {
    /// `pattern` must not be empty.
    pub fn new(text: &'a str, pattern: &'a [char], options: &'a ScoreOptions) -> Self {
        Scan {
            text,
            pattern,
            options,
            classifier: BoundaryClassifier::new(&options.separators),
        }
    }

    pub fn run(&self) -> Option<Matched> {
        let start = ScanState::new(self.pattern.len());
        match Cells::new(self.text).try_fold(start, |state, cell| self.step(state, cell)) {
            ControlFlow::Break(matched) => Some(matched),
            ControlFlow::Continue(_) => None,
        }
    }

    pub(crate) fn step(&self, mut state: ScanState, cell: Cell) -> ControlFlow<Matched, ScanState> {
        self.observe_anchors(&mut state, cell);

        let current = self.pattern[state.j];
        if self.options.chars_eq(cell.ch, current) {
            if !state.matched_any {
                self.open_edge_segment(&mut state, cell);
                state.matched_any = true;
            }
            state.tally.copies += 1;
            state.run += 1;
            if let Some(segment) = state.segment {
                state.gap = 0;
                if state.run != segment.len() {
                    state.tally.boundaries += 1;
                }
            }
            state.prev = Some(current);

            if state.j == 0 {
                state.close_run();
                state.commit_gap();
                return ControlFlow::Break(Matched {
                    tally: state.tally,
                    cell,
                });
            }
            state.j -= 1;
        } else if state
            .prev
            .is_some_and(|prev| self.options.chars_eq(cell.ch, prev))
        {
            state.tally.copies += 1;
        } else {
            let excluded = self.options.separator_policy == SeparatorPolicy::Exclude
                && self.classifier.is_separator(cell.ch);
            if !excluded {
                state.gap += 1;
            }
            state.close_run();
            state.prev = None;
        }

        // gaps never cross a token boundary
        if state.segment.is_some() {
            state.commit_gap();
        }

        ControlFlow::Continue(state)
    }

    fn observe_anchors(&self, state: &mut ScanState, cell: Cell) {
        // an end anchor, read right to left, is where a new token begins
        if self.classifier.is_end(cell.ch, cell.right) {
            state.segment = None;
            state.pending_end = Some(cell.index + 1);
            state.close_run();
        }

        if self.classifier.is_start(cell.left, cell.ch) {
            if let Some(end) = state.pending_end.take() {
                state.segment = Some(Segment {
                    start: cell.index,
                    end,
                });
            }
        }
    }

    /// Under `EdgeSegments::Open`, activate the token holding the first
    /// exact match before its start anchor has been seen.
    fn open_edge_segment(&self, state: &mut ScanState, cell: Cell) {
        if self.options.edge_segments != EdgeSegments::Open
            || state.segment.is_some()
            || self.classifier.is_separator(cell.ch)
        {
            return;
        }
        if let Some(end) = state.pending_end.take() {
            let prefix = &self.text[..cell.byte];
            state.segment = Some(Segment {
                start: self.classifier.token_start(prefix, cell.ch, cell.index),
                end,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str, pattern: &str) -> Option<Matched> {
        let pattern: Vec<char> = pattern.chars().collect();
        let options = ScoreOptions::default();
        Scan::new(text, &pattern, &options).run()
    }

    #[test]
    fn test_cells_window() {
        let cells: Vec<Cell> = Cells::new("aé/").collect();
        assert_eq!(cells.len(), 3);
        assert_eq!(
            cells[0],
            Cell {
                index: 2,
                byte: 3,
                left: Some('é'),
                ch: '/',
                right: None,
            }
        );
        assert_eq!(cells[1].index, 1);
        assert_eq!(cells[1].byte, 1);
        assert_eq!(cells[2].left, None);
        assert_eq!(cells[2].right, Some('é'));
    }

    #[test]
    fn test_subsequence_detection() {
        assert!(scan("abcd", "ad").is_some());
        assert!(scan("xyad", "ad").is_some());
        assert!(scan("abab", "ad").is_none());
        assert!(scan("ad", "adfoo").is_none());
        assert!(scan("", "a").is_none());
    }

    #[test]
    fn test_reports_first_match_cell() {
        let matched = scan("yx/xyfoo_bar", "fb").unwrap();
        assert_eq!(matched.cell.index, 5);
        assert_eq!(matched.cell.ch, 'f');
    }

    #[test]
    fn test_step_by_step_fold() {
        let pattern = ['f', 'b'];
        let options = ScoreOptions::default();
        let scan = Scan::new("FooBar", &pattern, &options);
        let mut cells = Cells::new("FooBar");

        // 'r' closes nothing, leaves a pending end and one gap char
        let state = match scan.step(ScanState::new(2), cells.next().unwrap()) {
            ControlFlow::Continue(s) => s,
            ControlFlow::Break(_) => panic!("matched too early"),
        };
        assert_eq!(state.pending_end, Some(6));
        assert_eq!(state.segment, None);
        assert_eq!(state.gap, 1);

        let state = match scan.step(state, cells.next().unwrap()) {
            ControlFlow::Continue(s) => s,
            ControlFlow::Break(_) => panic!("matched too early"),
        };
        assert_eq!(state.gap, 2);

        // 'B' opens the segment [3, 6) and forgives the pending gap
        let state = match scan.step(state, cells.next().unwrap()) {
            ControlFlow::Continue(s) => s,
            ControlFlow::Break(_) => panic!("matched too early"),
        };
        assert_eq!(state.segment, Some(Segment { start: 3, end: 6 }));
        assert_eq!(state.gap, 0);
        assert_eq!(state.j, 0);
        assert_eq!(state.tally.boundaries, 1);
        assert_eq!(state.tally.deletes, 0);
    }

    #[test]
    fn test_repeat_of_previous_is_a_copy_only() {
        let matched = scan("abb", "ab").unwrap();
        assert_eq!(matched.tally.copies, 3);
        assert_eq!(matched.tally.straight_runs, vec![2]);
        assert_eq!(matched.tally.deletes, 0);
    }

    #[test]
    fn test_run_closes_at_token_end() {
        let matched = scan("FooBar", "oobar").unwrap();
        assert_eq!(matched.tally.straight_runs, vec![3, 2]);

        let matched = scan("aB", "ab").unwrap();
        assert_eq!(matched.tally.straight_runs, vec![1, 1]);

        // one token, one run
        let matched = scan("ab", "ab").unwrap();
        assert_eq!(matched.tally.straight_runs, vec![2]);
    }

    #[test]
    fn test_mismatch_forgets_previous_char() {
        let matched = scan("abxb", "ab").unwrap();
        assert_eq!(matched.tally.copies, 2);

        let matched = scan("ab_xyz_b", "ab").unwrap();
        assert_eq!(matched.tally.copies, 2);
        assert_eq!(matched.tally.deletes, 5);
    }

    #[test]
    fn test_open_edge_activates_trailing_token() {
        let pattern = ['a', 'r'];
        let options = ScoreOptions::default().with_edge_segments(EdgeSegments::Open);
        let matched = Scan::new("FooBar", &pattern, &options).run().unwrap();
        assert_eq!(matched.tally.boundaries, 2);

        let strict = scan("FooBar", "ar").unwrap();
        assert_eq!(strict.tally.boundaries, 0);
    }

    #[test]
    fn test_open_edge_follows_the_matched_token() {
        let pattern = ['a'];
        let options = ScoreOptions::default().with_edge_segments(EdgeSegments::Open);

        // the trailing "X" token must not steal the open treatment
        let short = Scan::new("Abbxbx.", &pattern, &options).run().unwrap();
        let long = Scan::new("Abbxbx.X", &pattern, &options).run().unwrap();
        assert_eq!(short.tally.boundaries, 1);
        assert_eq!(long.tally.boundaries, 1);
        assert_eq!(short.tally.deletes, 0);
        assert_eq!(long.tally.deletes, 2);
    }
}
