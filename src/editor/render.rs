//! Rendering: composing one frame of the editor UI.
//!
//! The whole frame is queued into a byte buffer and handed to the terminal in a single
//! write, so a half-drawn screen is never visible.

use super::Editor;
use crate::row::Row;
use crate::terminal::Terminal;
use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
    QueueableCommand,
};
use std::time::Instant;

/// Longest filename prefix shown in the status bar.
const STATUS_NAME_MAX: usize = 20;

impl Editor {
    /// Query the window size, scroll to the cursor, and draw a full frame.
    pub fn refresh_screen<T: Terminal + ?Sized>(&mut self, term: &mut T) -> Result<()> {
        let (rows, cols) = term.size()?;
        self.set_window_size(rows, cols);
        self.scroll();
        let frame = self.draw_frame(Instant::now())?;
        term.write_all(&frame)
    }

    /// Build the bytes of one frame as of `now`.
    ///
    /// Uses the current viewport and `rx` as they are; callers normally run
    /// [`Editor::scroll`] first.
    pub fn draw_frame(&self, now: Instant) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        out.queue(cursor::Hide)?;
        out.queue(cursor::MoveTo(0, 0))?;

        self.draw_rows(&mut out)?;
        self.draw_status_bar(&mut out)?;
        self.draw_message_line(&mut out, now)?;

        let vp = self.viewport;
        let x = u16::try_from(self.rx.saturating_sub(vp.col_offset)).unwrap_or(u16::MAX);
        let y = u16::try_from(self.cursor.y.saturating_sub(vp.row_offset)).unwrap_or(u16::MAX);
        out.queue(cursor::MoveTo(x, y))?;
        out.queue(cursor::Show)?;
        Ok(out)
    }

    fn draw_rows(&self, out: &mut Vec<u8>) -> Result<()> {
        let vp = self.viewport;
        for screen_y in 0..vp.rows {
            match self.doc.row(screen_y + vp.row_offset) {
                Some(row) => draw_text_row(out, row, vp.col_offset, vp.cols)?,
                None if self.doc.num_rows() == 0 && screen_y == vp.rows / 3 => {
                    draw_welcome(out, vp.cols);
                }
                None => out.push(b'~'),
            }
            out.queue(Clear(ClearType::UntilNewLine))?;
            out.extend_from_slice(b"\r\n");
        }
        Ok(())
    }

    fn draw_status_bar(&self, out: &mut Vec<u8>) -> Result<()> {
        let cols = self.viewport.cols;
        let num_rows = self.doc.num_rows();

        let name = self
            .doc
            .filename
            .as_ref()
            .map_or_else(|| "[No Name]".to_string(), |p| p.display().to_string());
        let name = truncate(name.as_bytes(), STATUS_NAME_MAX);
        let modified = if self.doc.dirty > 0 {
            " (modified)"
        } else {
            ""
        };
        let mut left = name.to_vec();
        left.extend_from_slice(format!(" - {num_rows} lines{modified}").as_bytes());
        let filetype = self.doc.syntax().map_or("no ft", |s| s.name);
        let right = format!("{filetype} | {}/{num_rows}", self.cursor.y + 1);

        out.queue(SetAttribute(Attribute::Reverse))?;
        let left = truncate(&left, cols);
        out.extend_from_slice(left);
        let mut len = left.len();
        while len < cols {
            if cols - len == right.len() {
                out.extend_from_slice(right.as_bytes());
                break;
            }
            out.push(b' ');
            len += 1;
        }
        out.queue(SetAttribute(Attribute::Reset))?;
        out.extend_from_slice(b"\r\n");
        Ok(())
    }

    fn draw_message_line(&self, out: &mut Vec<u8>, now: Instant) -> Result<()> {
        out.queue(Clear(ClearType::UntilNewLine))?;
        let status = self.status.as_ref().filter(|s| s.is_visible(now));
        let text = match &self.prompt {
            Some(p) => Some(p.display()),
            None => status.map(|s| s.text.clone()),
        };
        if let Some(text) = text {
            out.extend_from_slice(truncate(text.as_bytes(), self.viewport.cols));
        }
        Ok(())
    }
}

/// The visible slice of one row, with color changes only where the category changes.
fn draw_text_row(out: &mut Vec<u8>, row: &Row, col_offset: usize, cols: usize) -> Result<()> {
    let start = col_offset.min(row.render.len());
    let end = col_offset.saturating_add(cols).min(row.render.len());
    let mut current = Color::Reset;

    for (&c, &hl) in row.render[start..end].iter().zip(row.hl.iter().skip(start)) {
        if c.is_ascii_control() {
            let sym = if c <= 26 { b'@' + c } else { b'?' };
            out.queue(SetAttribute(Attribute::Reverse))?;
            out.push(sym);
            out.queue(SetAttribute(Attribute::NoReverse))?;
            continue;
        }
        let color = hl.color();
        if color != current {
            out.queue(SetForegroundColor(color))?;
            current = color;
        }
        out.push(c);
    }
    if current != Color::Reset {
        out.queue(SetForegroundColor(Color::Reset))?;
    }
    Ok(())
}

fn draw_welcome(out: &mut Vec<u8>, cols: usize) {
    let banner = format!("Lite Editor -- version {}", env!("CARGO_PKG_VERSION"));
    let banner = truncate(banner.as_bytes(), cols);
    let mut padding = (cols - banner.len()) / 2;
    if padding > 0 {
        out.push(b'~');
        padding -= 1;
    }
    out.resize(out.len() + padding, b' ');
    out.extend_from_slice(banner);
}

fn truncate(bytes: &[u8], max: usize) -> &[u8] {
    &bytes[..bytes.len().min(max)]
}
