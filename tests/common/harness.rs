// EditorHarness - drives the editor through an in-memory terminal

use anyhow::Result;
use lite::buffer::Document;
use lite::config::Config;
use lite::editor::Editor;
use lite::keys::read_key;
use lite::terminal::Terminal;
use std::collections::VecDeque;
use std::path::Path;

/// Raw byte sequences a terminal sends for the special keys.
pub mod keys {
    pub const ARROW_UP: &[u8] = b"\x1b[A";
    pub const ARROW_DOWN: &[u8] = b"\x1b[B";
    pub const ARROW_RIGHT: &[u8] = b"\x1b[C";
    pub const ARROW_LEFT: &[u8] = b"\x1b[D";
    pub const DELETE: &[u8] = b"\x1b[3~";
    pub const HOME: &[u8] = b"\x1b[H";
    pub const END: &[u8] = b"\x1b[F";
    pub const PAGE_DOWN: &[u8] = b"\x1b[6~";
    pub const ESCAPE: &[u8] = b"\x1b";
    pub const ENTER: &[u8] = b"\r";
    pub const BACKSPACE: &[u8] = &[127];
    pub const CTRL_F: &[u8] = &[0x06];
    pub const CTRL_Q: &[u8] = &[0x11];
    pub const CTRL_S: &[u8] = &[0x13];
}

/// A terminal whose input is a fixed byte script and whose output is collected.
pub struct ScriptedTerminal {
    input: VecDeque<u8>,
    output: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl ScriptedTerminal {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            input: VecDeque::new(),
            output: Vec::new(),
            rows,
            cols,
        }
    }

    pub fn feed(&mut self, bytes: &[u8]) {
        self.input.extend(bytes);
    }

    pub fn has_input(&self) -> bool {
        !self.input.is_empty()
    }

    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.output)
    }
}

impl Terminal for ScriptedTerminal {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        Ok(self.input.pop_front())
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.output.extend_from_slice(bytes);
        Ok(())
    }

    fn size(&self) -> Result<(usize, usize)> {
        Ok((self.rows, self.cols))
    }
}

/// An editor wired to a [`ScriptedTerminal`].
pub struct EditorHarness {
    pub editor: Editor,
    pub term: ScriptedTerminal,
}

impl EditorHarness {
    pub fn new(doc: Document) -> Self {
        let mut editor = Editor::new(Config::default(), doc);
        editor.set_window_size(24, 80);
        Self {
            editor,
            term: ScriptedTerminal::new(24, 80),
        }
    }

    /// An unnamed document holding `text`, split on `\n`.
    pub fn with_text(text: &str) -> Self {
        let mut doc = Document::new(Config::default().tab_stop);
        for line in text.split('\n') {
            doc.insert_row(doc.num_rows(), line.as_bytes());
        }
        doc.dirty = 0;
        Self::new(doc)
    }

    pub fn open(path: &Path) -> Self {
        Self::new(Document::open(path, Config::default().tab_stop).unwrap())
    }

    /// Feed `bytes` and process every key they decode to, redrawing before each key
    /// like the main loop does. Returns true if a key asked to quit.
    ///
    /// A lone ESC must be sent on its own, otherwise it is read as the start of a
    /// sequence.
    pub fn send(&mut self, bytes: &[u8]) -> bool {
        self.term.feed(bytes);
        while self.term.has_input() {
            self.editor.refresh_screen(&mut self.term).unwrap();
            let key = read_key(&mut self.term).unwrap();
            if self.editor.handle_key(key).unwrap() {
                return true;
            }
        }
        false
    }

    pub fn type_text(&mut self, text: &str) {
        for b in text.bytes() {
            self.send(&[b]);
        }
    }

    /// Draw a fresh frame and return it with escape sequences left in.
    pub fn frame(&mut self) -> String {
        self.term.take_output();
        self.editor.refresh_screen(&mut self.term).unwrap();
        String::from_utf8_lossy(self.term.output()).into_owned()
    }

    /// The document contents, rows joined with `\n`.
    pub fn buffer_text(&self) -> String {
        let rows: Vec<String> = self
            .editor
            .doc
            .rows
            .iter()
            .map(|r| String::from_utf8_lossy(&r.chars).into_owned())
            .collect();
        rows.join("\n")
    }

    pub fn assert_frame_contains(&mut self, text: &str) {
        let frame = self.frame();
        assert!(
            frame.contains(text),
            "expected frame to contain {text:?}\n{frame:?}"
        );
    }

    pub fn assert_frame_not_contains(&mut self, text: &str) {
        let frame = self.frame();
        assert!(
            !frame.contains(text),
            "expected frame not to contain {text:?}\n{frame:?}"
        );
    }
}
