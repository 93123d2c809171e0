//! Key decoding: turns the raw terminal byte stream into logical key events.

use crate::terminal::Terminal;
use anyhow::Result;

/// Byte sent by the Backspace key in raw mode.
pub const BACKSPACE: u8 = 127;
pub const ESC: u8 = 0x1b;
pub const ENTER: u8 = b'\r';

/// The byte produced by Ctrl + `k`.
pub const fn ctrl(k: u8) -> u8 {
    k & 0x1f
}

/// A decoded key press.
///
/// Anything that is not a recognized escape sequence comes through as `Char`, including
/// control bytes and `BACKSPACE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(u8),
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Escape,
}

/// Block until one key is available and decode it.
///
/// A lone `ESC` (or any sequence we do not recognize) decodes as `Key::Escape`.
pub fn read_key<T: Terminal + ?Sized>(term: &mut T) -> Result<Key> {
    let c = loop {
        if let Some(c) = term.read_byte()? {
            break c;
        }
    };
    if c != ESC {
        return Ok(Key::Char(c));
    }

    let Some(s0) = term.read_byte()? else {
        return Ok(Key::Escape);
    };
    let Some(s1) = term.read_byte()? else {
        return Ok(Key::Escape);
    };

    let key = match (s0, s1) {
        (b'[', b'0'..=b'9') => match term.read_byte()? {
            Some(b'~') => tilde_key(s1),
            _ => None,
        },
        (b'[', b'A') => Some(Key::ArrowUp),
        (b'[', b'B') => Some(Key::ArrowDown),
        (b'[', b'C') => Some(Key::ArrowRight),
        (b'[', b'D') => Some(Key::ArrowLeft),
        (b'[' | b'O', b'H') => Some(Key::Home),
        (b'[' | b'O', b'F') => Some(Key::End),
        _ => None,
    };
    Ok(key.unwrap_or_else(|| {
        tracing::debug!(s0, s1, "unrecognized escape sequence");
        Key::Escape
    }))
}

/// `ESC [ <digit> ~` forms.
fn tilde_key(digit: u8) -> Option<Key> {
    match digit {
        b'1' | b'7' => Some(Key::Home),
        b'3' => Some(Key::Delete),
        b'4' | b'8' => Some(Key::End),
        b'5' => Some(Key::PageUp),
        b'6' => Some(Key::PageDown),
        _ => None,
    }
}
