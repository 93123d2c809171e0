//! A single line of the document and its rendered (tab-expanded) projection.

use crate::syntax::{self, Highlight, LanguageProfile};

/// One logical line.
///
/// `chars` is what gets saved; `render` is what gets drawn (tabs expanded to the next
/// tab stop); `hl` holds one highlight category per byte of `render`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    pub chars: Vec<u8>,
    pub render: Vec<u8>,
    pub hl: Vec<Highlight>,
}

impl Row {
    /// Build a row and derive its render and highlight arrays.
    pub fn new(chars: Vec<u8>, tab_stop: usize, syntax: Option<&LanguageProfile>) -> Self {
        let mut row = Self {
            chars,
            render: Vec::new(),
            hl: Vec::new(),
        };
        row.update(tab_stop, syntax);
        row
    }

    /// Length of the logical content in bytes.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Regenerate `render` from `chars`, then re-highlight.
    pub fn update(&mut self, tab_stop: usize, syntax: Option<&LanguageProfile>) {
        self.render = render(&self.chars, tab_stop);
        self.rehighlight(syntax);
    }

    /// Recompute `hl` from the current `render` without touching the content.
    pub fn rehighlight(&mut self, syntax: Option<&LanguageProfile>) {
        self.hl = syntax::highlight(&self.render, syntax);
    }

    /// Rendered column of logical column `cx`.
    pub fn cx_to_rx(&self, cx: usize, tab_stop: usize) -> usize {
        let tab_stop = tab_stop.max(1);
        self.chars.iter().take(cx).fold(0, |rx, &c| {
            if c == b'\t' {
                rx + tab_stop - rx % tab_stop
            } else {
                rx + 1
            }
        })
    }

    /// Logical column whose rendered span covers rendered column `rx`.
    ///
    /// Returns the row length when `rx` lies past the end of the rendered text.
    pub fn rx_to_cx(&self, rx: usize, tab_stop: usize) -> usize {
        let tab_stop = tab_stop.max(1);
        let mut cur_rx = 0;
        for (cx, &c) in self.chars.iter().enumerate() {
            if c == b'\t' {
                cur_rx += tab_stop - cur_rx % tab_stop;
            } else {
                cur_rx += 1;
            }
            if cur_rx > rx {
                return cx;
            }
        }
        self.chars.len()
    }
}

/// Expand tabs in `chars` to spaces, advancing to the next multiple of `tab_stop`.
pub fn render(chars: &[u8], tab_stop: usize) -> Vec<u8> {
    let tab_stop = tab_stop.max(1);
    let tabs = chars.iter().filter(|&&c| c == b'\t').count();
    let mut out = Vec::with_capacity(chars.len() + tabs * (tab_stop - 1));
    for &c in chars {
        if c == b'\t' {
            out.push(b' ');
            while out.len() % tab_stop != 0 {
                out.push(b' ');
            }
        } else {
            out.push(c);
        }
    }
    out
}
