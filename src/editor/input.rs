//! Key handling: editing commands and prompt input.

use super::Editor;
use crate::keys::{ctrl, Key, BACKSPACE, ENTER};
use crate::types::{Prompt, PromptKind};

const CTRL_F: u8 = ctrl(b'f');
const CTRL_H: u8 = ctrl(b'h');
const CTRL_L: u8 = ctrl(b'l');
const CTRL_Q: u8 = ctrl(b'q');
const CTRL_S: u8 = ctrl(b's');

/// How a prompt keystroke left the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptOutcome {
    Pending,
    Confirmed,
    Cancelled,
}

impl Editor {
    /// Top-level key handler.
    ///
    /// Returns `Ok(true)` if the editor should quit, `Ok(false)` otherwise.
    pub fn handle_key(&mut self, key: Key) -> anyhow::Result<bool> {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return Ok(false);
        }

        match key {
            Key::Char(ENTER) => self.cursor = self.doc.split_row(self.cursor),
            Key::Char(CTRL_Q) => {
                if self.doc.dirty > 0 && self.quit_times > 0 {
                    self.set_status(format!(
                        "WARNING!!! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                        self.quit_times
                    ));
                    tracing::debug!(
                        remaining = self.quit_times,
                        "quit refused, document dirty"
                    );
                    self.quit_times -= 1;
                    return Ok(false);
                }
                return Ok(true);
            }
            Key::Char(CTRL_S) => self.save(),
            Key::Char(CTRL_F) => self.start_search(),
            Key::Home => self.cursor.x = 0,
            Key::End => self.cursor.x = self.doc.row_len(self.cursor.y),
            Key::Char(BACKSPACE | CTRL_H) => self.cursor = self.doc.delete_char(self.cursor),
            Key::Delete => {
                self.move_cursor(Key::ArrowRight);
                self.cursor = self.doc.delete_char(self.cursor);
            }
            Key::PageUp | Key::PageDown => self.move_page(key),
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight => {
                self.move_cursor(key)
            }
            Key::Char(CTRL_L) | Key::Escape => {}
            Key::Char(c) => self.cursor = self.doc.insert_char(self.cursor, c),
        }

        self.quit_times = self.config.quit_times;
        Ok(false)
    }

    /// Handle keys while a prompt is active.
    ///
    /// Search prompts run one search step per keystroke, including the one that ends
    /// the prompt.
    fn handle_prompt_key(&mut self, key: Key) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };

        let outcome = match key {
            Key::Delete | Key::Char(BACKSPACE | CTRL_H) => {
                prompt.input.pop();
                PromptOutcome::Pending
            }
            Key::Escape => PromptOutcome::Cancelled,
            Key::Char(ENTER) if !prompt.input.is_empty() => PromptOutcome::Confirmed,
            Key::Char(c) if c.is_ascii() && !c.is_ascii_control() => {
                prompt.input.push(char::from(c));
                PromptOutcome::Pending
            }
            _ => PromptOutcome::Pending,
        };
        let kind = prompt.kind;
        let input = prompt.input.clone();

        if kind == PromptKind::Find {
            self.search_step(&input, key);
        }
        if outcome == PromptOutcome::Pending {
            return;
        }

        self.prompt = None;
        self.status = None;
        let confirmed = outcome == PromptOutcome::Confirmed;
        match kind {
            PromptKind::Find => self.end_search(confirmed),
            PromptKind::SaveAs if confirmed => {
                self.doc.set_filename(input.into());
                self.write_document();
            }
            PromptKind::SaveAs => self.set_status("Save aborted"),
        }
    }

    pub(crate) fn open_prompt(&mut self, kind: PromptKind) {
        self.prompt = Some(Prompt::new(kind));
    }
}
