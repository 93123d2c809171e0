//! Editor: the application state and the main loop.

mod file_ops;
mod input;
mod movement;
mod render;
mod search;

use crate::buffer::Document;
use crate::config::Config;
use crate::keys::read_key;
use crate::terminal::Terminal;
use crate::types::{Pos, Prompt, StatusMsg, Viewport};
use anyhow::Result;
use std::time::Instant;

pub use search::{SearchDirection, SearchState};

/// Rows at the bottom of the window used by the status bar and the message line.
const CHROME_ROWS: usize = 2;

/// The top-level application state.
///
/// Owns the document, the cursor and viewport, and the prompt/search state. Every
/// operation goes through this one value; there is no global state.
pub struct Editor {
    /// The document being edited.
    pub doc: Document,
    /// Cursor in logical coordinates (row, byte column).
    pub cursor: Pos,
    /// Rendered column of the cursor, recomputed on every scroll pass.
    pub rx: usize,
    pub viewport: Viewport,
    pub(crate) config: Config,
    pub(crate) status: Option<StatusMsg>,
    pub(crate) prompt: Option<Prompt>,
    pub(crate) search: Option<SearchState>,
    /// Remaining extra Ctrl-Q presses before a dirty document is abandoned.
    pub(crate) quit_times: u32,
}

impl Editor {
    pub fn new(config: Config, doc: Document) -> Self {
        let quit_times = config.quit_times;
        Self {
            doc,
            cursor: Pos::default(),
            rx: 0,
            viewport: Viewport::default(),
            config,
            status: None,
            prompt: None,
            search: None,
            quit_times,
        }
    }

    /// Render, read a key, process it; until the user quits.
    pub fn run<T: Terminal + ?Sized>(&mut self, term: &mut T) -> Result<()> {
        loop {
            self.refresh_screen(term)?;
            let key = read_key(term)?;
            if self.handle_key(key)? {
                tracing::info!("quit");
                return Ok(());
            }
        }
    }

    /// Resize the text area for a `rows` x `cols` terminal.
    pub fn set_window_size(&mut self, rows: usize, cols: usize) {
        self.viewport.rows = rows.saturating_sub(CHROME_ROWS).max(1);
        self.viewport.cols = cols.max(1);
    }

    /// Show a message in the message line for the configured timeout.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(StatusMsg::new(msg, self.config.message_timeout()));
    }

    /// The status message, if one is still visible.
    pub fn status_text(&self) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|s| s.is_visible(Instant::now()))
            .map(|s| s.text.as_str())
    }

    /// The active prompt, if any.
    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }
}
