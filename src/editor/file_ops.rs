//! File operations: save and save-as.

use super::Editor;
use crate::types::PromptKind;

impl Editor {
    /// Save to the current file, or ask for a name first.
    pub fn save(&mut self) {
        if self.doc.filename.is_none() {
            self.open_prompt(PromptKind::SaveAs);
            return;
        }
        self.write_document();
    }

    /// Write the document and report the outcome in the message line.
    ///
    /// Failures are not fatal: the document stays dirty and the editor keeps running.
    pub(crate) fn write_document(&mut self) {
        match self.doc.save() {
            Ok(len) => self.set_status(format!("{len} bytes written to disk")),
            Err(e) => {
                tracing::warn!(error = ?e, "save failed");
                self.set_status(format!("Can't save! I/O error: {}", e.root_cause()));
            }
        }
    }
}
