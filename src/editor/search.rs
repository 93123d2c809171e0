//! Incremental search.
//!
//! Each keystroke typed into the search prompt runs one step: the previous match
//! overlay is removed, the next matching row (circularly, in the current direction)
//! becomes the cursor row, and the match span is painted with `Highlight::Match`.
//! Only the most recently painted row is remembered for restoration.

use super::Editor;
use crate::keys::{Key, ENTER};
use crate::syntax::Highlight;
use crate::types::{Pos, PromptKind, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    Forward,
    Backward,
}

/// State of one search prompt session.
#[derive(Debug)]
pub struct SearchState {
    saved_cursor: Pos,
    saved_viewport: Viewport,
    last_match: Option<usize>,
    direction: SearchDirection,
    /// Row index and its highlight before the match overlay was applied.
    saved_hl: Option<(usize, Vec<Highlight>)>,
}

impl SearchState {
    fn new(cursor: Pos, viewport: Viewport) -> Self {
        Self {
            saved_cursor: cursor,
            saved_viewport: viewport,
            last_match: None,
            direction: SearchDirection::Forward,
            saved_hl: None,
        }
    }

    pub fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    pub fn direction(&self) -> SearchDirection {
        self.direction
    }
}

impl Editor {
    /// Open the search prompt, remembering where the cursor and viewport were.
    pub fn start_search(&mut self) {
        self.search = Some(SearchState::new(self.cursor, self.viewport));
        self.open_prompt(PromptKind::Find);
    }

    pub fn search_state(&self) -> Option<&SearchState> {
        self.search.as_ref()
    }

    /// Run one search step for `query` after `key` was pressed in the prompt.
    pub(crate) fn search_step(&mut self, query: &str, key: Key) {
        let Some(state) = self.search.as_mut() else {
            return;
        };

        if let Some((y, hl)) = state.saved_hl.take() {
            if let Some(row) = self.doc.rows.get_mut(y) {
                row.hl = hl;
            }
        }

        match key {
            Key::Char(ENTER) | Key::Escape => {
                state.last_match = None;
                state.direction = SearchDirection::Forward;
                return;
            }
            Key::ArrowRight | Key::ArrowDown => state.direction = SearchDirection::Forward,
            Key::ArrowLeft | Key::ArrowUp => state.direction = SearchDirection::Backward,
            _ => {
                state.last_match = None;
                state.direction = SearchDirection::Forward;
            }
        }
        if state.last_match.is_none() {
            state.direction = SearchDirection::Forward;
        }

        let needle = query.as_bytes();
        let num_rows = self.doc.num_rows();
        if needle.is_empty() || num_rows == 0 {
            return;
        }

        let tab_stop = self.doc.tab_stop();
        let mut current = state.last_match;
        state.last_match = None;
        for _ in 0..num_rows {
            let y = match (current, state.direction) {
                (None, SearchDirection::Forward) => 0,
                (None, SearchDirection::Backward) => num_rows - 1,
                (Some(c), SearchDirection::Forward) => (c + 1) % num_rows,
                (Some(c), SearchDirection::Backward) => (c + num_rows - 1) % num_rows,
            };
            current = Some(y);

            let row = &mut self.doc.rows[y];
            let Some(offset) = find(&row.render, needle) else {
                continue;
            };

            tracing::debug!(query, row = y, offset, "search match");
            state.last_match = Some(y);
            self.cursor = Pos {
                y,
                x: row.rx_to_cx(offset, tab_stop),
            };
            // Past the end, so the next scroll pass puts the match row at the top.
            self.viewport.row_offset = num_rows;
            state.saved_hl = Some((y, row.hl.clone()));
            row.hl[offset..offset + needle.len()].fill(Highlight::Match);
            return;
        }
    }

    /// Close the search session. A cancelled search puts the cursor and viewport back.
    pub(crate) fn end_search(&mut self, confirmed: bool) {
        let Some(state) = self.search.take() else {
            return;
        };
        if let Some((y, hl)) = state.saved_hl {
            if let Some(row) = self.doc.rows.get_mut(y) {
                row.hl = hl;
            }
        }
        if !confirmed {
            self.cursor = state.saved_cursor;
            self.viewport.row_offset = state.saved_viewport.row_offset;
            self.viewport.col_offset = state.saved_viewport.col_offset;
        }
    }
}

/// Byte offset of the first occurrence of `needle` in `haystack`.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
