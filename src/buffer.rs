//! The document: an ordered list of rows plus the file it came from.

use crate::row::Row;
use crate::syntax::{self, LanguageProfile};
use crate::types::Pos;
use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// The document buffer: a list of rows.
///
/// Every content mutation bumps `dirty` and re-renders only the touched row.
pub struct Document {
    pub rows: Vec<Row>,
    /// Number of edits since the last load/save; nonzero means unsaved changes.
    pub dirty: usize,
    pub filename: Option<PathBuf>,
    syntax: Option<&'static LanguageProfile>,
    tab_stop: usize,
}

impl Document {
    /// Create an empty, unnamed document.
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            dirty: 0,
            filename: None,
            syntax: None,
            tab_stop: tab_stop.max(1),
        }
    }

    /// Load `path`, one row per line with line terminators stripped.
    pub fn open(path: &Path, tab_stop: usize) -> Result<Self> {
        let lines = read_lines(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let mut doc = Self::new(tab_stop);
        doc.set_filename(path.to_path_buf());
        for line in lines {
            let line = line.with_context(|| format!("Failed reading {}", path.display()))?;
            doc.insert_row(doc.num_rows(), &line);
        }
        doc.dirty = 0;
        tracing::info!(path = %path.display(), rows = doc.num_rows(), "opened file");
        Ok(doc)
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, y: usize) -> Option<&Row> {
        self.rows.get(y)
    }

    /// Content length of row `y`, or 0 for the virtual row past the end.
    pub fn row_len(&self, y: usize) -> usize {
        self.rows.get(y).map_or(0, Row::len)
    }

    pub fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    pub fn syntax(&self) -> Option<&'static LanguageProfile> {
        self.syntax
    }

    /// Bind the document to `path` and pick the matching language profile.
    pub fn set_filename(&mut self, path: PathBuf) {
        let name = path.to_string_lossy().into_owned();
        self.filename = Some(path);
        self.set_syntax(syntax::select_profile(&name));
    }

    /// Switch the language profile and re-highlight every row once.
    pub fn set_syntax(&mut self, syntax: Option<&'static LanguageProfile>) {
        tracing::debug!(
            language = syntax.map_or("none", |s| s.name),
            "language selected"
        );
        self.syntax = syntax;
        for row in &mut self.rows {
            row.rehighlight(syntax);
        }
    }

    /// Insert a new row holding `text` before row `at`. `at == num_rows` appends.
    pub fn insert_row(&mut self, at: usize, text: &[u8]) {
        if at > self.rows.len() {
            return;
        }
        self.rows.insert(at, Row::new(text.to_vec(), self.tab_stop, self.syntax));
        self.dirty += 1;
    }

    /// Remove row `at`; out of range is a no-op.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.dirty += 1;
    }

    /// Append `text` to the end of row `y`.
    pub fn append_string(&mut self, y: usize, text: &[u8]) {
        self.ensure_row(y);
        let Some(row) = self.rows.get_mut(y) else {
            return;
        };
        row.chars.extend_from_slice(text);
        row.update(self.tab_stop, self.syntax);
        self.dirty += 1;
    }

    /// Insert a single byte at a position, returning the new cursor position.
    pub fn insert_char(&mut self, p: Pos, ch: u8) -> Pos {
        self.ensure_row(p.y);
        let Some(row) = self.rows.get_mut(p.y) else {
            return p;
        };
        let x = p.x.min(row.len());
        row.chars.insert(x, ch);
        row.update(self.tab_stop, self.syntax);
        self.dirty += 1;
        Pos { y: p.y, x: x + 1 }
    }

    /// Newline: truncate row `p.y` at `p.x` and move the remainder into a new row below.
    ///
    /// At column 0 this simply opens an empty row above. Returns the new cursor position.
    pub fn split_row(&mut self, p: Pos) -> Pos {
        if p.y > self.rows.len() {
            return p;
        }
        if p.x == 0 || p.y == self.rows.len() {
            self.insert_row(p.y, b"");
        } else {
            let row = &mut self.rows[p.y];
            let x = p.x.min(row.len());
            let rest = row.chars.split_off(x);
            row.update(self.tab_stop, self.syntax);
            self.insert_row(p.y + 1, &rest);
        }
        Pos { y: p.y + 1, x: 0 }
    }

    /// Backspace: delete the byte left of `p`.
    ///
    /// At column 0 the row is joined onto the end of the previous one. Positions on
    /// the virtual row or at the very start of the document are a no-op.
    pub fn delete_char(&mut self, p: Pos) -> Pos {
        if p.y >= self.rows.len() || (p.x == 0 && p.y == 0) {
            return p;
        }
        if p.x > 0 {
            let row = &mut self.rows[p.y];
            let x = p.x.min(row.len());
            if x == 0 {
                return Pos { y: p.y, x: 0 };
            }
            row.chars.remove(x - 1);
            row.update(self.tab_stop, self.syntax);
            self.dirty += 1;
            Pos { y: p.y, x: x - 1 }
        } else {
            let prev_len = self.rows[p.y - 1].len();
            let cur = std::mem::take(&mut self.rows[p.y].chars);
            self.append_string(p.y - 1, &cur);
            self.delete_row(p.y);
            Pos {
                y: p.y - 1,
                x: prev_len,
            }
        }
    }

    /// Serialize all rows, each followed by `line_sep`.
    pub fn rows_to_text(&self, line_sep: &[u8]) -> Vec<u8> {
        let total: usize = self.rows.iter().map(|r| r.len() + line_sep.len()).sum();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(&row.chars);
            out.extend_from_slice(line_sep);
        }
        out
    }

    /// Write the document to its file, returning the number of bytes written.
    pub fn save(&mut self) -> Result<usize> {
        let path = self.filename.clone().context("No file name")?;
        let text = self.rows_to_text(b"\n");
        write_whole_file(&path, &text)?;
        self.dirty = 0;
        tracing::info!(path = %path.display(), bytes = text.len(), "saved file");
        Ok(text.len())
    }

    fn ensure_row(&mut self, y: usize) {
        if y == self.rows.len() {
            self.insert_row(y, b"");
        }
    }
}

/// Lazily read the lines of `path`, with `\n`/`\r\n` terminators stripped.
pub fn read_lines(path: &Path) -> io::Result<impl Iterator<Item = io::Result<Vec<u8>>>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file).split(b'\n').map(|line| {
        line.map(|mut l| {
            while l.last().is_some_and(|&c| c == b'\r' || c == b'\n') {
                l.pop();
            }
            l
        })
    }))
}

/// Create-if-missing, truncate to the exact length, then write everything.
///
/// Not atomic: a failure part way through leaves the file in an unspecified state.
pub fn write_whole_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    file.set_len(bytes.len() as u64)
        .with_context(|| format!("Failed to truncate {}", path.display()))?;
    file.write_all(bytes)
        .with_context(|| format!("Failed writing {}", path.display()))?;
    Ok(())
}
