//! Cursor movement and viewport scrolling.

use super::Editor;
use crate::keys::Key;
use crate::row::Row;

impl Editor {
    /// Move the cursor one step for an arrow key.
    ///
    /// Left at column 0 wraps to the end of the previous row; right at the end of a row
    /// wraps to the start of the next (possibly the virtual row past the end). The column
    /// is then clamped to the new row's length.
    pub fn move_cursor(&mut self, key: Key) {
        let row_len = self.doc.row(self.cursor.y).map(Row::len);
        match key {
            Key::ArrowLeft => {
                if self.cursor.x > 0 {
                    self.cursor.x -= 1;
                } else if self.cursor.y > 0 {
                    self.cursor.y -= 1;
                    self.cursor.x = self.doc.row_len(self.cursor.y);
                }
            }
            Key::ArrowRight => {
                if let Some(len) = row_len {
                    if self.cursor.x < len {
                        self.cursor.x += 1;
                    } else {
                        self.cursor.y += 1;
                        self.cursor.x = 0;
                    }
                }
            }
            Key::ArrowUp => self.cursor.y = self.cursor.y.saturating_sub(1),
            Key::ArrowDown => {
                if self.cursor.y < self.doc.num_rows() {
                    self.cursor.y += 1;
                }
            }
            _ => {}
        }
        self.cursor.x = self.cursor.x.min(self.doc.row_len(self.cursor.y));
    }

    /// PageUp/PageDown: jump to the top/bottom of the window, then a full screen further.
    pub fn move_page(&mut self, key: Key) {
        let rows = self.viewport.rows;
        let step = match key {
            Key::PageUp => {
                self.cursor.y = self.viewport.row_offset;
                Key::ArrowUp
            }
            Key::PageDown => {
                self.cursor.y = (self.viewport.row_offset + rows)
                    .saturating_sub(1)
                    .min(self.doc.num_rows());
                Key::ArrowDown
            }
            _ => return,
        };
        for _ in 0..rows {
            self.move_cursor(step);
        }
    }

    /// Recompute `rx` and scroll the viewport so the cursor is visible.
    pub fn scroll(&mut self) {
        let tab_stop = self.doc.tab_stop();
        self.rx = self
            .doc
            .row(self.cursor.y)
            .map_or(0, |row| row.cx_to_rx(self.cursor.x, tab_stop));
        self.viewport.scroll_to(self.cursor.y, self.rx);
    }
}
