//! `lite`: a small terminal text editor.
//!
//! ## Reading guide
//! - **`keys`** decodes the raw byte stream from the terminal into [`keys::Key`] values.
//! - **`buffer::Document`** is the list of rows; each [`row::Row`] keeps its raw bytes, the
//!   tab-expanded render and one highlight category per rendered byte.
//! - **`syntax`** holds the language profiles and the per-row classifier.
//! - **`editor::Editor`** owns the document, cursor and viewport, handles keys, runs the
//!   search and save prompts, and composes each frame.
//! - **`terminal`** is the byte-level terminal interface plus the raw-mode guard.

pub mod buffer;
pub mod config;
pub mod editor;
pub mod keys;
pub mod logging;
pub mod row;
pub mod syntax;
pub mod terminal;
pub mod types;
