//! Common types used throughout the editor.

use std::time::{Duration, Instant};

/// A position in the document.
///
/// - `y`: row index (0-based). `y == num_rows` is the virtual row past the end.
/// - `x`: **byte index** within that row's content (0-based). This is *not* a screen column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub y: usize,
    pub x: usize,
}

/// The visible window into the document.
///
/// Offsets are in rows and *rendered* columns; `rows`/`cols` is the text area size
/// (the status bar and message line are not included).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub row_offset: usize,
    pub col_offset: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    /// Adjust the offsets so that `(row, rx)` falls inside the window, scrolling as
    /// little as possible.
    pub fn scroll_to(&mut self, row: usize, rx: usize) {
        if row < self.row_offset {
            self.row_offset = row;
        }
        if row >= self.row_offset + self.rows {
            self.row_offset = (row + 1).saturating_sub(self.rows);
        }
        if rx < self.col_offset {
            self.col_offset = rx;
        }
        if rx >= self.col_offset + self.cols {
            self.col_offset = (rx + 1).saturating_sub(self.cols);
        }
    }
}

/// The prompt modes shown in the message line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    SaveAs,
    Find,
}

impl PromptKind {
    /// Text drawn before the typed input.
    pub fn label(self) -> &'static str {
        match self {
            Self::SaveAs => "Save as: ",
            Self::Find => "Search: ",
        }
    }

    /// Hint drawn after the typed input.
    pub fn hint(self) -> &'static str {
        match self {
            Self::SaveAs => " (ESC to cancel)",
            Self::Find => " (Use ESC/Arrows/Enter)",
        }
    }
}

/// Prompt state (what the user is typing at the bottom).
#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }

    /// The full message-line text for this prompt.
    pub fn display(&self) -> String {
        format!("{}{}{}", self.kind.label(), self.input, self.kind.hint())
    }
}

/// Short-lived status message shown in the message line.
#[derive(Clone, Debug)]
pub struct StatusMsg {
    pub text: String,
    pub until: Instant,
}

impl StatusMsg {
    pub fn new(text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            until: Instant::now() + ttl,
        }
    }

    /// Whether the message should still be drawn at `now`.
    pub fn is_visible(&self, now: Instant) -> bool {
        !self.text.is_empty() && now < self.until
    }
}
